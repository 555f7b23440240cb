//! Interactive, keyboard-driven list widgets for terminal applications.
//!
//! Two variants share one input loop:
//! - [`List`]: rows with a wrap-around cursor.
//! - [`SelectableList`]: adds a selection column toggled with space.
//!
//! Both render a fixed-width table, one record per row, and block on one keypress at a time.
//! Escape and ctrl-c exit; up and down move the cursor; every other key is dispatched to the
//! handler bound to it, after which the screen is redrawn.
//!
//! ## Getting started
//!
//! ```no_run
//! use termlist::SelectableList;
//!
//! struct Task {
//!     title: String,
//!     due: String,
//! }
//!
//! let mut list = SelectableList::new(|t: &Task, field: &str| match field {
//!     "Title" => t.title.clone(),
//!     _ => t.due.clone(),
//! });
//! list.show_field("Title");
//! list.show_field("Due");
//! list.set_field_width(20);
//! list.show_header(true);
//! list.add_item(Task { title: "write docs".into(), due: "friday".into() });
//! list.on_exit(|l| {
//!     for t in l.selected_items() {
//!         eprintln!("done: {}", t.title);
//!     }
//! });
//! list.display_terminal()?;
//! # Ok::<(), termlist::ListError>(())
//! ```
//!
//! Tests and headless hosts drive the same loop with [`reader::ScriptedKeys`] and
//! [`List::set_output`].
pub use termlist_core::error;
pub use termlist_core::field;
pub use termlist_core::input;
pub use termlist_core::keymap;
pub use termlist_core::options;
pub use termlist_core::reader;
pub use termlist_core::render;
pub use termlist_core::selection;
pub use termlist_core::state;

#[cfg(feature = "crossterm")]
pub use termlist_core::crossterm_input;

mod event_loop;
pub mod list;
pub mod selectable_list;
mod view;

pub use list::List;
pub use selectable_list::SelectableList;
pub use termlist_core::ListError;
pub use termlist_core::Result;
pub use termlist_core::field::Record;
pub use termlist_core::input::Key;
pub use termlist_core::options::DisplayOptions;
