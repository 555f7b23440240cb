use crate::input::Key;
use std::collections::BTreeMap;
use std::fmt;
use std::panic;
use std::panic::AssertUnwindSafe;

pub type Handler<W> = Box<dyn FnMut(&mut W)>;

struct Entry<W> {
    /// `None` while the handler is running.
    handler: Option<Handler<W>>,
    help_desc: Option<String>,
}

/// Maps key codes to handlers that receive the owning widget.
///
/// At most one handler exists per key; binding a key again replaces the previous handler.
pub struct KeyBindings<W> {
    entries: BTreeMap<Key, Entry<W>>,
}

impl<W> Default for KeyBindings<W> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<W> fmt::Debug for KeyBindings<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl<W> KeyBindings<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, key: Key, handler: impl FnMut(&mut W) + 'static) {
        self.insert(key, Box::new(handler), None);
    }

    /// Binds `key` and records a short description for [`KeyBindings::help_line`].
    pub fn bind_described(
        &mut self,
        key: Key,
        help_desc: impl Into<String>,
        handler: impl FnMut(&mut W) + 'static,
    ) {
        self.insert(key, Box::new(handler), Some(help_desc.into()));
    }

    pub fn bind_return(&mut self, handler: impl FnMut(&mut W) + 'static) {
        self.bind(Key::RETURN, handler);
    }

    pub fn unbind(&mut self, key: Key) -> bool {
        self.entries.remove(&key).is_some()
    }

    pub fn is_bound(&self, key: Key) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.keys().copied()
    }

    /// Removes the handler for `key` so it can be called with a mutable borrow of the widget
    /// that owns this registry. Pair with [`KeyBindings::restore`].
    pub fn take(&mut self, key: Key) -> Option<Handler<W>> {
        self.entries.get_mut(&key).and_then(|e| e.handler.take())
    }

    /// Puts back a handler obtained from [`KeyBindings::take`].
    ///
    /// If the handler rebound its own key while running, the new binding is kept. If it unbound
    /// its key, the handler is dropped.
    pub fn restore(&mut self, key: Key, handler: Handler<W>) {
        if let Some(entry) = self.entries.get_mut(&key) {
            if entry.handler.is_none() {
                entry.handler = Some(handler);
            }
        }
    }

    /// Renders described bindings as `"a add • d delete"`, in key order.
    pub fn help_line(&self) -> String {
        self.entries
            .iter()
            .filter_map(|(key, e)| e.help_desc.as_ref().map(|d| format!("{key} {d}")))
            .collect::<Vec<_>>()
            .join(" • ")
    }

    fn insert(&mut self, key: Key, handler: Handler<W>, help_desc: Option<String>) {
        self.entries.insert(
            key,
            Entry {
                handler: Some(handler),
                help_desc,
            },
        );
    }
}

/// Runs the handler bound to `key` against `widget`, reaching the registry through `bindings`.
/// Returns `false` if nothing is bound to `key`.
///
/// The handler goes back into the registry even when it panics, and the panic then continues.
pub fn dispatch<W>(widget: &mut W, key: Key, bindings: fn(&mut W) -> &mut KeyBindings<W>) -> bool {
    let Some(mut handler) = bindings(widget).take(key) else {
        return false;
    };
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(widget)));
    bindings(widget).restore(key, handler);
    if let Err(payload) = outcome {
        panic::resume_unwind(payload);
    }
    true
}
