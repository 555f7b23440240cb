//! `termlist-core` provides the building blocks behind `termlist`'s interactive lists.
//!
//! Everything here is plain state plus pure functions, so a host can drive a list from its own
//! event loop or test it without a terminal. The facade crate `termlist` wires these pieces into
//! the blocking `display` loop.
//!
//! ## Pieces
//!
//! - [`input::Key`] and [`input::Command`]: one-byte key codes and what they mean to a list.
//! - [`reader::KeyReader`]: the single blocking input source. [`reader::ScriptedKeys`] replays
//!   keys for tests; the `crossterm` feature adds a terminal reader and a raw-mode guard.
//! - [`keymap::KeyBindings`]: per-key handlers that receive the owning widget.
//! - [`state::ListState`] and [`selection::SelectionSet`]: records, cursor, and selected rows.
//! - [`render::render_frame`]: fixed-width, left-justified full-screen frames.
//!
//! ## Records
//!
//! Lists never look inside records. Columns are read through a [`field::FieldAccessor`], which
//! any `Fn(&T, &str) -> String` satisfies, or through [`field::RecordFields`] for types that
//! implement [`field::Record`].
pub mod error;

pub mod field;
pub mod input;
pub mod keymap;
pub mod options;
pub mod reader;
pub mod render;
pub mod selection;
pub mod state;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub use error::ListError;
pub use error::Result;
