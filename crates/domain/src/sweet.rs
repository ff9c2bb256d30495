//! Sweet: a product that vendors can offer.

use serde::{Deserialize, Serialize};

use crate::error::{SweetShopError, ValidationError};
use crate::id::SweetId;

/// A persisted sweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
}

/// A sweet that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSweet {
    pub name: String,
}

impl NewSweet {
    /// Build a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, SweetShopError> {
        let draft = Self { name: name.into() };
        draft.validate()?;
        Ok(draft)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), SweetShopError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: SweetId) -> Sweet {
        Sweet {
            id,
            name: self.name,
        }
    }
}
