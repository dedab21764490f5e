//! Domain-level errors.
//!
//! These errors represent malformed interaction payloads and other input
//! problems. They are independent of infrastructure concerns (HTTP,
//! database, Discord REST).

use thiserror::Error;

/// Domain-specific errors for payload and rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Interaction payload is missing a field its type requires
    #[error("Malformed interaction: {0}")]
    MalformedInteraction(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a malformed interaction error
    pub fn malformed(msg: impl Into<String>) -> Self {
        DomainError::MalformedInteraction(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
