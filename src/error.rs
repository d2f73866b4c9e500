//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Invalid MLP configuration.
    #[error("Invalid MLP configuration: {0}")]
    InvalidMlpConfig(String),
}
