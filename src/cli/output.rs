//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, DecodeError};

/// Map domain errors to a string for CLI output. Structural decode
/// failures get a hint naming the offending location.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Decode(decode) => match decode {
            DecodeError::MissingField { path, field } => format!(
                "{}\n  hint: add a `{}` value to the context at {}",
                e, field, path
            ),
            DecodeError::InvalidType { path, expected, .. } => {
                format!("{}\n  hint: the value at {} must be a JSON {}", e, path, expected)
            }
            _ => e.to_string(),
        },
        _ => e.to_string(),
    }
}
