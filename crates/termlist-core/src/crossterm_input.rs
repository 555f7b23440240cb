use crate::error::ListError;
use crate::error::Result;
use crate::input::Key;
use crate::reader::KeyReader;

/// Holds the terminal in raw (unbuffered, no-echo) mode until dropped.
///
/// Dropping restores the previous mode on every path out of the scope, including `?` returns
/// and unwinding.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> Result<Self> {
        crossterm::terminal::enable_raw_mode().map_err(ListError::TerminalUnavailable)?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = crossterm::terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {err}");
        }
    }
}

/// Reads keys through crossterm's event stream.
///
/// Raw mode is acquired right before the blocking read and released right after it, so the
/// terminal behaves normally whenever the list is not waiting on a keypress (for example while
/// a key handler prompts for text).
#[derive(Debug, Default)]
pub struct CrosstermKeyReader {
    _private: (),
}

impl CrosstermKeyReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyReader for CrosstermKeyReader {
    fn read_key(&mut self) -> Result<Key> {
        let _guard = RawModeGuard::acquire()?;
        loop {
            let ev = crossterm::event::read()?;
            if let Some(key) = key_from_event(ev) {
                log::trace!("key read: {key}");
                return Ok(key);
            }
        }
    }
}

pub fn key_from_event(ev: crossterm::event::Event) -> Option<Key> {
    match ev {
        crossterm::event::Event::Key(key) => {
            if key.kind != crossterm::event::KeyEventKind::Press {
                return None;
            }
            key_from_crossterm(key)
        }
        _ => None,
    }
}

pub fn key_from_crossterm(key: crossterm::event::KeyEvent) -> Option<Key> {
    let ctrl = key
        .modifiers
        .contains(crossterm::event::KeyModifiers::CONTROL);
    match key.code {
        crossterm::event::KeyCode::Char(c) if ctrl => Key::ctrl(c),
        crossterm::event::KeyCode::Char(c) => Key::from_char(c).ok(),
        crossterm::event::KeyCode::Enter => Some(Key::RETURN),
        crossterm::event::KeyCode::Esc => Some(Key::ESC),
        crossterm::event::KeyCode::Tab => Some(Key::TAB),
        crossterm::event::KeyCode::Backspace => Some(Key::BACKSPACE),
        crossterm::event::KeyCode::Up => Some(Key::UP),
        crossterm::event::KeyCode::Down => Some(Key::DOWN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_navigation_and_exit_keys() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_from_crossterm(up), Some(Key::UP));
        assert_eq!(key_from_crossterm(esc), Some(Key::ESC));
        assert_eq!(key_from_crossterm(ctrl_c), Some(Key::INTERRUPT));
    }

    #[test]
    fn skips_releases_and_wide_chars() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_from_event(crossterm::event::Event::Key(release)), None);

        let wide = KeyEvent::new(KeyCode::Char('ü'), KeyModifiers::NONE);
        assert_eq!(key_from_crossterm(wide), None);
        assert_eq!(
            key_from_event(crossterm::event::Event::FocusGained),
            None
        );
    }
}
