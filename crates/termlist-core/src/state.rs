use crate::input::Direction;
use std::cmp::Ordering;

/// Records plus a cursor that wraps around at both ends.
///
/// Records are stored in display order. The cursor always points at an existing row when the
/// list is non-empty and sits at `0` otherwise.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    cursor: usize,
    exited: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            exited: false,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. The cursor does not move.
    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the record at `index`, keeping the cursor on the record it pointed at when
    /// possible.
    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        if index < self.cursor {
            self.cursor -= 1;
        }
        self.clamp_cursor();
        Some(item)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Edits one record in place. Rows are reordered only through [`ListState::swap_items`]
    /// and the sort methods, so positions stay meaningful to whoever tracks them.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Swaps two rows. The cursor stays on the record it pointed at. Returns `false` if either
    /// index is out of range.
    pub fn swap_items(&mut self, a: usize, b: usize) -> bool {
        if a >= self.items.len() || b >= self.items.len() {
            return false;
        }
        self.items.swap(a, b);
        if self.cursor == a {
            self.cursor = b;
        } else if self.cursor == b {
            self.cursor = a;
        }
        true
    }

    /// Stable sort of the rows. The cursor stays on the record it pointed at.
    ///
    /// Returns the new order as old row indices: entry `i` is the row that now sits at `i`.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&T, &T) -> Ordering) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| compare(&self.items[a], &self.items[b]));

        let mut slots: Vec<Option<T>> = self.items.drain(..).map(Some).collect();
        self.items = order.iter().filter_map(|&old| slots[old].take()).collect();
        if let Some(pos) = order.iter().position(|&old| old == self.cursor) {
            self.cursor = pos;
        }
        order
    }

    /// Like [`ListState::sort_by`], comparing the keys `key` extracts.
    pub fn sort_by_key<K: Ord>(&mut self, mut key: impl FnMut(&T) -> K) -> Vec<usize> {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.clamp_cursor();
    }

    /// The record under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.move_cursor_up(),
            Direction::Down => self.move_cursor_down(),
        }
    }

    pub fn move_cursor_up(&mut self) {
        let n = self.items.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + n - 1) % n;
    }

    pub fn move_cursor_down(&mut self) {
        let n = self.items.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % n;
    }

    pub fn is_exited(&self) -> bool {
        self.exited
    }

    /// Marks the list as finished. Returns `false` if it already was.
    pub fn mark_exited(&mut self) -> bool {
        !std::mem::replace(&mut self.exited, true)
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }
}
