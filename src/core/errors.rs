use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmaError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Directory walk error: {0}")]
    Walk(Box<walkdir::Error>),

    #[error("Note type '{0}' not found")]
    NoteTypeNotFound(String),

    #[error("'{}' is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("AnkiConnect action '{action}' failed: {message}")]
    AnkiConnect { action: String, message: String },

    #[error("BmaError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for BmaError {
    fn from(error: std::io::Error) -> Self {
        BmaError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for BmaError {
    fn from(error: reqwest::Error) -> Self {
        BmaError::Reqwest(Box::new(error))
    }
}

impl From<walkdir::Error> for BmaError {
    fn from(error: walkdir::Error) -> Self {
        BmaError::Walk(Box::new(error))
    }
}
