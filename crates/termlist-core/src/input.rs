use crate::error::ListError;
use std::fmt;

/// A single logical keypress, reduced to one byte.
///
/// Multi-byte escape sequences (arrow keys) are resolved to their final byte before they
/// reach a widget, so `Up` and `Down` share the code space of `'A'` and `'B'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub u8);

impl Key {
    pub const INTERRUPT: Key = Key(3);
    pub const TAB: Key = Key(9);
    pub const RETURN: Key = Key(13);
    pub const ESC: Key = Key(27);
    pub const SPACE: Key = Key(32);
    pub const UP: Key = Key(65);
    pub const DOWN: Key = Key(66);
    pub const BACKSPACE: Key = Key(127);

    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns the key for an ASCII character.
    pub fn from_char(c: char) -> Result<Self, ListError> {
        if c.is_ascii() {
            Ok(Key(c as u8))
        } else {
            Err(ListError::NonAsciiKey(c))
        }
    }

    /// Returns the control code for `Ctrl` + an ASCII letter.
    pub fn ctrl(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Key((c.to_ascii_lowercase() as u8) - b'a' + 1))
    }

    pub fn is_exit(self) -> bool {
        self == Key::ESC || self == Key::INTERRUPT
    }
}

impl From<u8> for Key {
    fn from(code: u8) -> Self {
        Key(code)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::INTERRUPT => f.write_str("ctrl-c"),
            Key::TAB => f.write_str("tab"),
            Key::RETURN => f.write_str("enter"),
            Key::ESC => f.write_str("esc"),
            Key::SPACE => f.write_str("space"),
            Key::BACKSPACE => f.write_str("backspace"),
            Key(c) if c.is_ascii_graphic() => write!(f, "{}", c as char),
            Key(c) => write!(f, "0x{c:02x}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// What a keypress means to a list, before any state is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Navigate(Direction),
    ToggleSelect,
    Custom(Key),
}

impl Command {
    /// Interprets a key with fixed precedence: exit keys, then arrows and space (only when
    /// there is a row to act on), then everything else as a custom binding.
    ///
    /// Reserved keys always win over a custom binding on the same byte.
    pub fn interpret(key: Key, has_items: bool, selectable: bool) -> Self {
        if key.is_exit() {
            return Command::Exit;
        }
        if has_items {
            match key {
                Key::UP => return Command::Navigate(Direction::Up),
                Key::DOWN => return Command::Navigate(Direction::Down),
                Key::SPACE if selectable => return Command::ToggleSelect,
                _ => {}
            }
        }
        Command::Custom(key)
    }
}

/// Decodes the bytes of one raw terminal read.
///
/// A 3-byte read is an escape sequence (`ESC [ A`) and resolves to its last byte. Any other
/// non-empty read resolves to its first byte.
pub fn decode_raw(bytes: &[u8]) -> Option<Key> {
    match bytes {
        [] => None,
        [_, _, last] => Some(Key(*last)),
        [first, ..] => Some(Key(*first)),
    }
}
