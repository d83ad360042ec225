//! Error types for icsgen.

use thiserror::Error;

/// Errors that can occur while generating a calendar document.
///
/// Generation is fail-fast: the first error aborts the whole document and no
/// partial output is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IcsGenError {
    /// An event record (or the document itself) broke one of the input rules.
    #[error("{0}")]
    Validation(String),
}

impl IcsGenError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        IcsGenError::Validation(msg.into())
    }

    /// The human-readable message, without any prefix.
    pub fn message(&self) -> &str {
        match self {
            IcsGenError::Validation(msg) => msg,
        }
    }
}

/// Result type alias for icsgen operations.
pub type IcsGenResult<T> = Result<T, IcsGenError>;
