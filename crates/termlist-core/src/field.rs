//! Reading named fields off records.
//!
//! Lists never inspect a record's structure. They ask a [`FieldAccessor`] for the display value
//! of each shown field, so any record type works as long as the host can name its columns.

/// Produces the display value of a named field.
///
/// Accessors must not mutate the record and should return a stable value for every field name
/// the list is configured to show.
pub trait FieldAccessor<T> {
    fn get(&self, record: &T, field: &str) -> String;
}

impl<T, F> FieldAccessor<T> for F
where
    F: Fn(&T, &str) -> String,
{
    fn get(&self, record: &T, field: &str) -> String {
        self(record, field)
    }
}

/// A record that knows how to look up its own fields by name.
pub trait Record {
    fn field(&self, name: &str) -> Option<String>;
}

/// Adapts any [`Record`] into a [`FieldAccessor`]. Unknown fields render empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordFields;

impl<T: Record> FieldAccessor<T> for RecordFields {
    fn get(&self, record: &T, field: &str) -> String {
        record.field(field).unwrap_or_else(|| {
            log::warn!("record has no field named {field:?}");
            String::new()
        })
    }
}
