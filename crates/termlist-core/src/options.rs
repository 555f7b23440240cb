use ratatui::style::Modifier;
use ratatui::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionMarkers {
    pub selected: String,
    pub unselected: String,
}

impl Default for SelectionMarkers {
    fn default() -> Self {
        Self {
            selected: "[x]".to_string(),
            unselected: "[ ]".to_string(),
        }
    }
}

impl SelectionMarkers {
    pub fn for_state(&self, selected: bool) -> &str {
        if selected {
            &self.selected
        } else {
            &self.unselected
        }
    }
}

/// How a list lays out its rows.
///
/// Every column, including the selection column of a selectable list, is left-justified and
/// padded to `field_width` characters. Longer values are not truncated.
#[derive(Clone, Debug)]
pub struct DisplayOptions {
    /// Field names shown as columns, in order.
    pub fields: Vec<String>,
    pub field_width: usize,
    pub show_header: bool,
    /// Gutter drawn before the cursor row. Other rows get the same number of spaces.
    pub cursor_marker: String,
    pub selection_markers: SelectionMarkers,
    pub selection_label: String,
    pub empty_message: String,
    /// Applied to the cursor row when a frame is drawn into a ratatui buffer.
    pub cursor_style: Style,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            field_width: 0,
            show_header: false,
            cursor_marker: ">  ".to_string(),
            selection_markers: SelectionMarkers::default(),
            selection_label: "Selection".to_string(),
            empty_message: "No items".to_string(),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn field_width(mut self, width: usize) -> Self {
        self.field_width = width;
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn selection_markers(
        mut self,
        selected: impl Into<String>,
        unselected: impl Into<String>,
    ) -> Self {
        self.selection_markers = SelectionMarkers {
            selected: selected.into(),
            unselected: unselected.into(),
        };
        self
    }

    /// Width of the cursor gutter in characters.
    pub fn gutter_width(&self) -> usize {
        self.cursor_marker.chars().count()
    }
}
