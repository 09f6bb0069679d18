//! Error types shared by the engine, reporter and parsers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Errors reported synchronously to the caller.
///
/// None of these are recovered internally: each one describes a request
/// the caller must correct before re-invoking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A parameter or process field is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// No processes were supplied.
    #[error("No processes supplied.")]
    EmptyInput,
    /// The algorithm selector was not recognized.
    #[error("Unknown algorithm '{0}'.")]
    UnknownAlgorithm(String),
    /// A timeline label could not be parsed.
    #[error("Invalid timeline label '{0}'.")]
    InvalidLabel(String),
}

impl SimError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
