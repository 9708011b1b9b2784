use std::path::PathBuf;
use thiserror::Error;
use crate::token::LexItem;

/// Errors raised by the driver around the scanner.
///
/// The scanner itself never fails; it reports bad input as `Err` items. The
/// driver turns the first such item into [`LexanError::Scan`].
#[derive(Error, Debug)]
pub enum LexanError {
    #[error("IOError: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSONError: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ConfigError: {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("LoggingError: {0}")]
    Logging(String),

    #[error("Error on line {line} ({lexeme})")]
    Scan { line: usize, lexeme: String },
}

impl LexanError {
    pub fn from_item(item: &LexItem) -> Self {
        LexanError::Scan {
            line: item.line,
            lexeme: item.lexeme.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LexanError>;
