//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers deterministic failures only (malformed declarations, broken catalog
/// invariants, bad identifiers). Nothing in the catalog performs IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank name, malformed config).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A catalog invariant was violated (e.g. a product referencing an unknown brand).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. blank or containing whitespace).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        assert_eq!(
            DomainError::validation("name cannot be empty").to_string(),
            "validation failed: name cannot be empty"
        );
        assert_eq!(
            DomainError::invariant("unknown brand").to_string(),
            "invariant violated: unknown brand"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
