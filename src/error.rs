// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("record #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("unknown field `{field}` at line {line}")]
    UnknownField { line: usize, field: String },

    #[error("field `{field}` given twice at line {line}")]
    DuplicateField { line: usize, field: String },

    #[error("movie number {0} appears more than once")]
    DuplicateNumber(u32),

    #[error("JSON catalog error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("invalid range {min}..={max} (catalog has {size} movies)")]
    InvalidRange { min: i64, max: i64, size: u32 },

    #[error("a pick is already in progress")]
    Busy,

    #[error("no movie with number {0}")]
    NotFound(u32),
}

impl PickError {
    /// Text shown in the error region of the picker.
    pub fn user_message(&self) -> &'static str {
        use crate::config::consts::{MSG_GENERIC_ERROR, MSG_INVALID_RANGE, MSG_NOT_FOUND};
        match self {
            PickError::EmptyCatalog | PickError::InvalidRange { .. } => MSG_INVALID_RANGE,
            PickError::NotFound(_) => MSG_NOT_FOUND,
            PickError::Busy => MSG_GENERIC_ERROR,
        }
    }
}
