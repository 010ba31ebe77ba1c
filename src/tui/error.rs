use std::io;
use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal too small: {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        rows: u16,
        cols: u16,
        min_rows: u16,
        min_cols: u16,
    },

    #[error("Terminal supports {colors} colors, need {required}")]
    UnsupportedTerminal { colors: u16, required: u16 },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;
