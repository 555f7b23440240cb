use std::io;

/// Errors surfaced by list widgets and key readers.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// Writing a frame or reading input failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    /// The controlling terminal could not be opened or switched into raw mode.
    #[error("terminal unavailable: {0}")]
    TerminalUnavailable(#[source] io::Error),

    /// The key source has no more input.
    #[error("key input closed")]
    InputClosed,

    /// Key bindings are keyed by a single byte, so only ASCII characters can be bound.
    #[error("cannot bind non-ASCII key {0:?}")]
    NonAsciiKey(char),
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
