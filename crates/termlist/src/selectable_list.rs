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
use termlist_core::selection::SelectionSet;

/// A [`List`](crate::List) whose rows can be marked with space.
///
/// Selection is tracked per row, so two equal records are selected independently. Read the
/// final selection from an [`SelectableList::on_exit`] hook or after
/// [`SelectableList::display`] returns.
pub struct SelectableList<T> {
    view: ListView<T>,
    selection: SelectionSet,
    bindings: KeyBindings<SelectableList<T>>,
    on_exit: Option<Handler<SelectableList<T>>>,
}

impl<T> fmt::Debug for SelectableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectableList")
            .field("view", &self.view)
            .field("selection", &self.selection)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl<T: Record> SelectableList<T> {
    /// A list whose columns are read through [`Record::field`].
    pub fn for_records() -> Self {
        Self::new(RecordFields)
    }
}

impl<T> SelectableList<T> {
    pub fn new(accessor: impl FieldAccessor<T> + 'static) -> Self {
        Self::with_options(accessor, DisplayOptions::default())
    }

    pub fn with_options(accessor: impl FieldAccessor<T> + 'static, options: DisplayOptions) -> Self {
        Self {
            view: ListView::new(accessor, options),
            selection: SelectionSet::new(),
            bindings: KeyBindings::new(),
            on_exit: None,
        }
    }

    pub fn add_item(&mut self, item: T) {
        self.view.state.add_item(item);
    }

    /// Removes a record. Selection of the remaining rows is preserved.
    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        let item = self.view.state.remove_item(index)?;
        self.selection.shift_after_removal(index);
        Some(item)
    }

    pub fn items(&self) -> &[T] {
        self.view.state.items()
    }

    /// Edits one record in place. Its selection is unaffected.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.view.state.get_mut(index)
    }

    /// Swaps two rows. Selection and cursor move with their records.
    pub fn swap_items(&mut self, a: usize, b: usize) -> bool {
        if !self.view.state.swap_items(a, b) {
            return false;
        }
        self.selection.swap(a, b);
        true
    }

    /// Stable sort of the rows. Selection and cursor move with their records.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        let order = self.view.state.sort_by(compare);
        self.selection.reorder(&order);
    }

    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) {
        let order = self.view.state.sort_by_key(key);
        self.selection.reorder(&order);
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

    pub fn current(&self) -> Option<&T> {
        self.view.state.current()
    }

    pub fn move_cursor_up(&mut self) {
        self.view.state.move_cursor_up();
    }

    pub fn move_cursor_down(&mut self) {
        self.view.state.move_cursor_down();
    }

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

    /// Selects the row at `index`. Returns `false` if it was already selected or does not exist.
    pub fn select_item(&mut self, index: usize) -> bool {
        if index >= self.len() {
            log::debug!("ignoring selection of row {index}, list has {} rows", self.len());
            return false;
        }
        self.selection.select(index)
    }

    /// Deselects the row at `index`. Deselecting an unselected row does nothing.
    pub fn deselect_item(&mut self, index: usize) -> bool {
        self.selection.deselect(index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Flips the selection of the row at `index` and redraws immediately.
    pub fn toggle_selected(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            log::debug!("ignoring toggle of row {index}, list has {} rows", self.len());
            return Ok(());
        }
        self.selection.toggle(index);
        self.redraw()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected row indices in display order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.iter().collect()
    }

    /// Selected records in display order.
    pub fn selected_items(&self) -> Vec<&T> {
        self.selection
            .iter()
            .filter_map(|i| self.view.state.get(i))
            .collect()
    }

    pub fn bind(&mut self, key: Key, handler: impl FnMut(&mut SelectableList<T>) + 'static) {
        self.bindings.bind(key, handler);
    }

    /// Binds a printable ASCII key. Fails for characters that do not fit in one byte.
    pub fn bind_char(
        &mut self,
        c: char,
        handler: impl FnMut(&mut SelectableList<T>) + 'static,
    ) -> Result<()> {
        self.bindings.bind(Key::from_char(c)?, handler);
        Ok(())
    }

    pub fn bind_described(
        &mut self,
        key: Key,
        help_desc: impl Into<String>,
        handler: impl FnMut(&mut SelectableList<T>) + 'static,
    ) {
        self.bindings.bind_described(key, help_desc, handler);
    }

    pub fn bind_return(&mut self, handler: impl FnMut(&mut SelectableList<T>) + 'static) {
        self.bindings.bind_return(handler);
    }

    pub fn unbind(&mut self, key: Key) -> bool {
        self.bindings.unbind(key)
    }

    pub fn help_line(&self) -> String {
        self.bindings.help_line()
    }

    /// Runs `hook` once, right before the list exits.
    pub fn on_exit(&mut self, hook: impl FnMut(&mut SelectableList<T>) + 'static) {
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
        log::debug!(
            "selectable list exited with {} of {} rows selected",
            self.selection.len(),
            self.len()
        );
    }

    pub fn is_exited(&self) -> bool {
        self.view.state.is_exited()
    }

    pub fn frame(&self) -> Frame {
        self.view.frame(Some(&self.selection))
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.view.redraw(Some(&self.selection))
    }

    pub fn set_output(&mut self, out: impl Write + 'static) {
        self.view.set_output(out);
    }

    pub fn erase_lines(&mut self, lines: usize) -> Result<()> {
        self.view.erase_lines(lines)
    }

    fn bindings_mut(&mut self) -> &mut KeyBindings<SelectableList<T>> {
        &mut self.bindings
    }

    /// Shows the list and handles keys from `reader` until the list exits.
    pub fn display(&mut self, reader: impl KeyReader) -> Result<()> {
        event_loop::run(self, reader)
    }

    #[cfg(feature = "crossterm")]
    pub fn display_terminal(&mut self) -> Result<()> {
        self.display(termlist_core::crossterm_input::CrosstermKeyReader::new())
    }
}

impl<T> Interactive for SelectableList<T> {
    const SELECTABLE: bool = true;

    fn redraw(&mut self) -> Result<()> {
        SelectableList::redraw(self)
    }

    fn clear(&mut self) -> Result<()> {
        self.view.clear()
    }

    fn is_exited(&self) -> bool {
        SelectableList::is_exited(self)
    }

    fn has_items(&self) -> bool {
        !self.is_empty()
    }

    fn exit(&mut self) {
        SelectableList::exit(self);
    }

    fn navigate(&mut self, direction: Direction) -> Result<()> {
        self.view.state.move_cursor(direction);
        SelectableList::redraw(self)
    }

    fn toggle_current(&mut self) -> Result<()> {
        let cursor = self.cursor();
        self.toggle_selected(cursor)
    }

    fn dispatch(&mut self, key: Key) -> Result<()> {
        if !keymap::dispatch(self, key, SelectableList::bindings_mut) {
            log::debug!("no binding for key {key}");
        }
        SelectableList::redraw(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::Screen;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use termlist_core::reader::ScriptedKeys;

    fn fruits() -> (SelectableList<&'static str>, Screen) {
        let mut list = SelectableList::new(|s: &&'static str, _: &str| s.to_string());
        list.show_field("Fruit");
        list.set_field_width(4);
        for f in ["fig", "kiwi", "lime"] {
            list.add_item(f);
        }
        let screen = Screen::default();
        list.set_output(screen.clone());
        (list, screen)
    }

    #[test]
    fn space_toggles_cursor_row() {
        let (mut list, screen) = fruits();
        list.display(ScriptedKeys::new([Key::DOWN, Key::SPACE, Key::ESC]))
            .unwrap();
        assert_eq!(list.selected_indices(), vec![1]);
        assert_eq!(list.selected_items(), vec![&"kiwi"]);

        // down redraw, loop frame, then the toggle's own redraw
        let frames = screen.frames();
        assert_eq!(frames[3], "   [ ] fig \n>  [x] kiwi\n   [ ] lime\n");
    }

    #[test]
    fn double_toggle_restores_selection() {
        let (mut list, _screen) = fruits();
        list.select_item(2);
        list.display(ScriptedKeys::new([Key::SPACE, Key::SPACE, Key::ESC]))
            .unwrap();
        assert_eq!(list.selected_indices(), vec![2]);
    }

    #[test]
    fn selecting_twice_keeps_one_entry() {
        let (mut list, _screen) = fruits();
        assert!(list.select_item(0));
        assert!(!list.select_item(0));
        assert!(!list.select_item(7));
        assert!(!list.deselect_item(1));
        assert_eq!(list.selection().len(), 1);
        assert!(list.is_selected(0));
    }

    #[test]
    fn toggle_redraws_immediately() {
        let (mut list, screen) = fruits();
        list.toggle_selected(0).unwrap();
        assert_eq!(screen.clears(), 1);
        assert!(screen.text().contains(">  [x] fig"));
        list.toggle_selected(9).unwrap();
        assert_eq!(screen.clears(), 1);
    }

    #[test]
    fn exit_hook_sees_final_selection() {
        let (mut list, _screen) = fruits();
        let picked = Rc::new(RefCell::new(Vec::new()));
        let out = picked.clone();
        list.on_exit(move |l| {
            out.borrow_mut()
                .extend(l.selected_items().into_iter().map(|s| s.to_string()));
        });
        list.display(ScriptedKeys::new([
            Key::SPACE,
            Key::UP,
            Key::SPACE,
            Key::INTERRUPT,
        ]))
        .unwrap();
        assert_eq!(*picked.borrow(), vec!["fig", "lime"]);
    }

    #[test]
    fn space_on_empty_list_is_dispatched() {
        let mut list = SelectableList::new(|s: &String, _: &str| s.clone());
        list.set_output(Screen::default());
        list.bind(Key::SPACE, |l| l.add_item("new".to_string()));
        list.display(ScriptedKeys::new([Key::SPACE, Key::ESC]))
            .unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.selection().is_empty());
    }

    #[test]
    fn removing_rows_renumbers_selection() {
        let (mut list, _screen) = fruits();
        list.bind_char('d', |l| {
            let cursor = l.cursor();
            l.remove_item(cursor);
        })
        .unwrap();
        list.select_item(0);
        list.select_item(2);
        list.display(ScriptedKeys::from_str_keys("d\x1b")).unwrap();
        assert_eq!(list.items(), &["kiwi", "lime"]);
        assert_eq!(list.selected_items(), vec![&"lime"]);
    }

    #[test]
    fn selection_follows_records_through_sort() {
        let mut list = SelectableList::new(|s: &&'static str, _: &str| s.to_string());
        list.set_output(Screen::default());
        for f in ["b", "a", "c"] {
            list.add_item(f);
        }
        list.select_item(0);
        list.sort_by_key(|s| *s);
        assert_eq!(list.items(), &["a", "b", "c"]);
        assert_eq!(list.selected_items(), vec![&"b"]);
        assert_eq!(list.selected_indices(), vec![1]);
        assert_eq!(list.current(), Some(&"b"));
    }

    #[test]
    fn selection_follows_records_through_swap() {
        let (mut list, _screen) = fruits();
        list.select_item(0);
        assert!(list.swap_items(0, 2));
        assert_eq!(list.items(), &["lime", "kiwi", "fig"]);
        assert_eq!(list.selected_items(), vec![&"fig"]);
        assert!(!list.swap_items(1, 5));
    }

    #[test]
    fn editing_a_record_keeps_its_selection() {
        let (mut list, _screen) = fruits();
        list.select_item(1);
        list.bind_char('e', |l| {
            let cursor = l.cursor();
            if let Some(item) = l.get_mut(cursor) {
                *item = "pear";
            }
        })
        .unwrap();
        list.display(ScriptedKeys::new([Key::DOWN, Key(b'e'), Key::ESC]))
            .unwrap();
        assert_eq!(list.selected_items(), vec![&"pear"]);
    }

    proptest! {
        #[test]
        fn sort_keeps_selected_records(
            values in proptest::collection::vec(0u8..16, 0..24),
            picks in proptest::collection::vec(any::<bool>(), 24),
        ) {
            let mut list = SelectableList::new(|v: &u8, _: &str| v.to_string());
            list.set_output(Screen::default());
            for v in &values {
                list.add_item(*v);
            }
            for (i, &pick) in picks.iter().take(values.len()).enumerate() {
                if pick {
                    list.select_item(i);
                }
            }
            let mut before: Vec<u8> = list.selected_items().into_iter().copied().collect();
            list.sort_by(|a, b| b.cmp(a));
            let mut after: Vec<u8> = list.selected_items().into_iter().copied().collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
            prop_assert_eq!(list.selection().len(), picks.iter().take(values.len()).filter(|&&p| p).count());
        }

        #[test]
        fn random_keys_keep_state_consistent(
            keys in proptest::collection::vec(
                prop_oneof![
                    Just(Key::UP),
                    Just(Key::DOWN),
                    Just(Key::SPACE),
                    Just(Key(b'd')),
                    Just(Key(b'a')),
                    Just(Key(b'?')),
                ],
                0..64,
            )
        ) {
            let (mut list, _screen) = fruits();
            list.bind_char('d', |l| {
                let cursor = l.cursor();
                l.remove_item(cursor);
            })
            .unwrap();
            list.bind_char('a', |l| l.add_item("pear")).unwrap();

            let mut script = ScriptedKeys::new(keys);
            script.push(Key::ESC);
            list.display(script).unwrap();

            prop_assert!(list.is_exited());
            if list.is_empty() {
                prop_assert_eq!(list.cursor(), 0);
            } else {
                prop_assert!(list.cursor() < list.len());
            }
            prop_assert!(list.selected_indices().iter().all(|&i| i < list.len()));
        }
    }
}
