//! Error types for context decoding and the contextkit tooling surface.

use thiserror::Error;

/// Decode failures.
///
/// Every structural variant carries the JSON path of the offending value
/// (`$` is the document root, e.g. `$.children[1].displayOrder`).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Expected a context object at {path}, found {found}")]
    NotAnObject { path: String, found: &'static str },

    #[error("Missing required field `{field}` at {path}")]
    MissingField { path: String, field: &'static str },

    #[error("Invalid type at {path}: expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid universal link at {path}: {message}")]
    InvalidUrl { path: String, message: String },

    #[error("Failed to read context document: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// JSON path of the failure, if the error is structural.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::NotAnObject { path, .. }
            | DecodeError::MissingField { path, .. }
            | DecodeError::InvalidType { path, .. }
            | DecodeError::InvalidUrl { path, .. } => Some(path.as_str()),
            DecodeError::Syntax { .. } | DecodeError::Io(_) => None,
        }
    }

    /// Name of the offending field, if the failure points at one.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingField { field, .. } => Some(*field),
            DecodeError::InvalidType { path, .. } | DecodeError::InvalidUrl { path, .. } => {
                last_field_segment(path)
            }
            _ => None,
        }
    }

    /// True for everything except I/O failures while reading the source.
    pub fn is_structural(&self) -> bool {
        !matches!(self, DecodeError::Io(_))
    }
}

fn last_field_segment(path: &str) -> Option<&str> {
    let (_, tail) = path.rsplit_once('.')?;
    if tail.is_empty() || tail.ends_with(']') {
        None
    } else {
        Some(tail)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return DecodeError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                err.to_string(),
            ));
        }
        DecodeError::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Errors surfaced by the command-line tooling.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("Failed to read input {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
