//! Key sources.
//!
//! A widget never touches the terminal for input directly; it pulls one [`Key`] at a time from
//! a [`KeyReader`]. The read is the only place an interactive list blocks.

use crate::error::ListError;
use crate::error::Result;
use crate::input;
use crate::input::Key;
use std::collections::VecDeque;
use std::io::Read;

pub trait KeyReader {
    /// Blocks until one logical keypress is available.
    fn read_key(&mut self) -> Result<Key>;
}

impl<K: KeyReader + ?Sized> KeyReader for &mut K {
    fn read_key(&mut self) -> Result<Key> {
        (**self).read_key()
    }
}

impl<K: KeyReader + ?Sized> KeyReader for Box<K> {
    fn read_key(&mut self) -> Result<Key> {
        (**self).read_key()
    }
}

/// Replays a fixed sequence of keys, then reports [`ListError::InputClosed`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Scripts the bytes of `s` as individual keys.
    pub fn from_str_keys(s: &str) -> Self {
        Self::new(s.bytes().map(Key))
    }

    pub fn push(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeyReader for ScriptedKeys {
    fn read_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or(ListError::InputClosed)
    }
}

/// Reads raw bytes and decodes one key per read call.
///
/// Each `read` is expected to return exactly one keypress, which is how a terminal in raw mode
/// delivers input: a single byte, or a 3-byte escape sequence for arrow keys.
#[derive(Debug)]
pub struct RawKeyReader<R> {
    inner: R,
    #[cfg(feature = "crossterm")]
    raw_mode: bool,
}

impl<R: Read> RawKeyReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            #[cfg(feature = "crossterm")]
            raw_mode: false,
        }
    }

    /// Switches the terminal into raw mode around every read.
    #[cfg(feature = "crossterm")]
    pub fn with_raw_mode(mut self, raw_mode: bool) -> Self {
        self.raw_mode = raw_mode;
        self
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_once(&mut self) -> Result<Key> {
        let mut buf = [0u8; 3];
        let n = self.inner.read(&mut buf)?;
        input::decode_raw(&buf[..n]).ok_or(ListError::InputClosed)
    }

    #[cfg(feature = "crossterm")]
    fn read_guarded(&mut self) -> Result<Key> {
        if !self.raw_mode {
            return self.read_once();
        }
        let _guard = crate::crossterm_input::RawModeGuard::acquire()?;
        self.read_once()
    }

    #[cfg(not(feature = "crossterm"))]
    fn read_guarded(&mut self) -> Result<Key> {
        self.read_once()
    }
}

#[cfg(feature = "crossterm")]
impl RawKeyReader<std::fs::File> {
    /// Opens the controlling terminal for exclusive key input.
    pub fn tty() -> Result<Self> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .open("/dev/tty")
            .map_err(ListError::TerminalUnavailable)?;
        Ok(Self::new(file).with_raw_mode(true))
    }
}

impl<R: Read> KeyReader for RawKeyReader<R> {
    fn read_key(&mut self) -> Result<Key> {
        let key = self.read_guarded();
        log::trace!("key read: {key:?}");
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Hands out one chunk per `read` call, like a terminal in raw mode.
    struct Chunks(VecDeque<Vec<u8>>);

    impl Read for Chunks {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let Some(chunk) = self.0.pop_front() else {
                return Ok(0);
            };
            let n = chunk.len().min(buf.len());
            buf[..n].copy_from_slice(&chunk[..n]);
            Ok(n)
        }
    }

    #[test]
    fn scripted_keys_run_dry() {
        let mut keys = ScriptedKeys::from_str_keys("ab");
        assert_eq!(keys.read_key().ok(), Some(Key(b'a')));
        assert_eq!(keys.remaining(), 1);
        assert_eq!(keys.read_key().ok(), Some(Key(b'b')));
        assert!(matches!(keys.read_key(), Err(ListError::InputClosed)));
    }

    #[test]
    fn raw_reader_decodes_each_read() {
        let chunks = Chunks(VecDeque::from(vec![
            vec![27, 91, 66],
            vec![b'q'],
            vec![27],
        ]));
        let mut r = RawKeyReader::new(chunks);
        assert_eq!(r.read_key().ok(), Some(Key::DOWN));
        assert_eq!(r.read_key().ok(), Some(Key(b'q')));
        assert_eq!(r.read_key().ok(), Some(Key::ESC));
        assert!(matches!(r.read_key(), Err(ListError::InputClosed)));
    }

    #[test]
    fn read_errors_propagate() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("gone"))
            }
        }
        let mut r = RawKeyReader::new(Broken);
        assert!(matches!(r.read_key(), Err(ListError::Io(_))));
    }
}
