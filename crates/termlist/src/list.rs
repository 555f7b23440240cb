use crate::event_loop;
use crate::event_loop::Interactive;
use crate::view::ListView;
use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use termlist_core::Result;
use termlist_core::field::FieldAccessor;
use termlist_core::field::Record;
use termlist_core::field::RecordFields;
use termlist_core::input::Direction;
use termlist_core::input::Key;
use termlist_core::keymap::Handler;
use termlist_core::keymap;
use termlist_core::keymap::KeyBindings;
use termlist_core::options::DisplayOptions;
use termlist_core::reader::KeyReader;
use termlist_core::render::Frame;

/// An interactive list with a wrap-around cursor.
///
/// Up and down move the cursor, escape or ctrl-c exit, and every other key goes to the handler
/// bound to it. Handlers receive the list itself, so they can add records, move the cursor, or
/// call [`List::exit`].
///
/// ```no_run
/// use termlist::List;
///
/// let mut list = List::new(|name: &String, _field: &str| name.clone());
/// list.show_field("Name");
/// list.add_item("Ada".to_string());
/// list.bind_return(|l| l.exit());
/// list.display_terminal()?;
/// # Ok::<(), termlist::ListError>(())
/// ```
pub struct List<T> {
    view: ListView<T>,
    bindings: KeyBindings<List<T>>,
    on_exit: Option<Handler<List<T>>>,
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("view", &self.view)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl<T: Record> List<T> {
    /// A list whose columns are read through [`Record::field`].
    pub fn for_records() -> Self {
        Self::new(RecordFields)
    }
}

impl<T> List<T> {
    pub fn new(accessor: impl FieldAccessor<T> + 'static) -> Self {
        Self::with_options(accessor, DisplayOptions::default())
    }

    pub fn with_options(accessor: impl FieldAccessor<T> + 'static, options: DisplayOptions) -> Self {
        Self {
            view: ListView::new(accessor, options),
            bindings: KeyBindings::new(),
            on_exit: None,
        }
    }

    pub fn add_item(&mut self, item: T) {
        self.view.state.add_item(item);
    }

    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        self.view.state.remove_item(index)
    }

    pub fn items(&self) -> &[T] {
        self.view.state.items()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.view.state.get_mut(index)
    }

    /// Swaps two rows; the cursor stays on its record. Returns `false` if either is missing.
    pub fn swap_items(&mut self, a: usize, b: usize) -> bool {
        self.view.state.swap_items(a, b)
    }

    /// Stable sort of the rows; the cursor stays on its record.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.view.state.sort_by(compare);
    }

    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) {
        self.view.state.sort_by_key(key);
    }

    pub fn len(&self) -> usize {
        self.view.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.state.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.view.state.cursor()
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.view.state.set_cursor(cursor);
    }

    /// The record under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.view.state.current()
    }

    pub fn move_cursor_up(&mut self) {
        self.view.state.move_cursor_up();
    }

    pub fn move_cursor_down(&mut self) {
        self.view.state.move_cursor_down();
    }

    /// Adds a column for the named field. Columns appear in the order they are added.
    pub fn show_field(&mut self, name: impl Into<String>) {
        self.view.options.fields.push(name.into());
    }

    pub fn set_field_width(&mut self, width: usize) {
        self.view.options.field_width = width;
    }

    pub fn show_header(&mut self, show: bool) {
        self.view.options.show_header = show;
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.view.options
    }

    pub fn options_mut(&mut self) -> &mut DisplayOptions {
        &mut self.view.options
    }

    pub fn bind(&mut self, key: Key, handler: impl FnMut(&mut List<T>) + 'static) {
        self.bindings.bind(key, handler);
    }

    /// Binds a printable ASCII key. Fails for characters that do not fit in one byte.
    pub fn bind_char(
        &mut self,
        c: char,
        handler: impl FnMut(&mut List<T>) + 'static,
    ) -> Result<()> {
        self.bindings.bind(Key::from_char(c)?, handler);
        Ok(())
    }

    pub fn bind_described(
        &mut self,
        key: Key,
        help_desc: impl Into<String>,
        handler: impl FnMut(&mut List<T>) + 'static,
    ) {
        self.bindings.bind_described(key, help_desc, handler);
    }

    pub fn bind_return(&mut self, handler: impl FnMut(&mut List<T>) + 'static) {
        self.bindings.bind_return(handler);
    }

    pub fn unbind(&mut self, key: Key) -> bool {
        self.bindings.unbind(key)
    }

    /// Descriptions of the keys bound with [`List::bind_described`].
    pub fn help_line(&self) -> String {
        self.bindings.help_line()
    }

    /// Runs `hook` once, right before the list exits.
    pub fn on_exit(&mut self, hook: impl FnMut(&mut List<T>) + 'static) {
        self.on_exit = Some(Box::new(hook));
    }

    /// Ends the list after running the exit hook. Later calls do nothing.
    pub fn exit(&mut self) {
        if self.view.state.is_exited() {
            return;
        }
        if let Some(mut hook) = self.on_exit.take() {
            hook(self);
            if self.on_exit.is_none() {
                self.on_exit = Some(hook);
            }
        }
        self.view.state.mark_exited();
        log::debug!("list exited with {} items", self.len());
    }

    pub fn is_exited(&self) -> bool {
        self.view.state.is_exited()
    }

    /// The frame the list would draw right now.
    pub fn frame(&self) -> Frame {
        self.view.frame(None)
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.view.redraw(None)
    }

    /// Redirects frames away from stdout.
    pub fn set_output(&mut self, out: impl Write + 'static) {
        self.view.set_output(out);
    }

    /// Erases the last `lines` lines, for handlers that print prompts below the list.
    pub fn erase_lines(&mut self, lines: usize) -> Result<()> {
        self.view.erase_lines(lines)
    }

    fn bindings_mut(&mut self) -> &mut KeyBindings<List<T>> {
        &mut self.bindings
    }

    /// Shows the list and handles keys from `reader` until the list exits.
    pub fn display(&mut self, reader: impl KeyReader) -> Result<()> {
        event_loop::run(self, reader)
    }

    /// Shows the list, reading keys from the terminal.
    #[cfg(feature = "crossterm")]
    pub fn display_terminal(&mut self) -> Result<()> {
        self.display(termlist_core::crossterm_input::CrosstermKeyReader::new())
    }
}

impl<T> Interactive for List<T> {
    const SELECTABLE: bool = false;

    fn redraw(&mut self) -> Result<()> {
        List::redraw(self)
    }

    fn clear(&mut self) -> Result<()> {
        self.view.clear()
    }

    fn is_exited(&self) -> bool {
        List::is_exited(self)
    }

    fn has_items(&self) -> bool {
        !self.is_empty()
    }

    fn exit(&mut self) {
        List::exit(self);
    }

    fn navigate(&mut self, direction: Direction) -> Result<()> {
        self.view.state.move_cursor(direction);
        List::redraw(self)
    }

    fn dispatch(&mut self, key: Key) -> Result<()> {
        if !keymap::dispatch(self, key, List::bindings_mut) {
            log::debug!("no binding for key {key}");
        }
        List::redraw(self)
    }
}
