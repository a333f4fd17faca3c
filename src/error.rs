//! Errors raised while configuring an easing function.

use thiserror::Error;

/// Result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, EaseError>;

/// Error raised while building an easing function.
///
/// Evaluation itself never fails, every check happens once at configuration time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EaseError {
    /// The configuration can't describe a curve
    #[error("Invalid easing configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the configuration
        reason: String,
    },
}

impl EaseError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        EaseError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
