//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SweetShopError`] via `#[from]` or a manual `From` impl.

use std::error::Error as StdError;

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum SweetShopError {
    /// A domain invariant was violated by caller input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Invariant violations detected before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("price cannot be negative, got {0}")]
    NegativePrice(i64),
}

/// A lookup by id that resolved to nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable entity name (`Vendor`, `Sweet`, `VendorSweet`).
    pub entity: &'static str,
    /// The identifier that was requested, as text.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_entity_name_in_not_found_message() {
        let err = NotFoundError {
            entity: "Vendor",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Vendor not found");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: SweetShopError = ValidationError::NegativePrice(-1).into();
        assert!(matches!(
            err,
            SweetShopError::Validation(ValidationError::NegativePrice(-1))
        ));
    }
}
