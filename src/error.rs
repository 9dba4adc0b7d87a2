//! Global error handling for dirprompt
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for dirprompt operations
#[derive(Error, Debug)]
pub enum DirPromptError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    /// Config file is not valid JSON
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Scan root could not be read
    #[error("Failed to scan {path}: {source}")]
    Scan { path: PathBuf, source: io::Error },

    /// Output file could not be written
    #[error("Failed to write {path}: {source}")]
    Output { path: PathBuf, source: io::Error },

    /// Generated prompt file could not be removed
    #[error("Failed to remove {path}: {source}")]
    Cleanup { path: PathBuf, source: io::Error },

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for dirprompt operations
pub type Result<T> = std::result::Result<T, DirPromptError>;

/// Creates a DirPromptError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DirPromptError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow converting DirPromptError to io::Error so tests can stay on io::Result
impl From<DirPromptError> for io::Error {
    fn from(err: DirPromptError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
