//! Vendor: a seller offering sweets at its own prices.

use serde::{Deserialize, Serialize};

use crate::error::{SweetShopError, ValidationError};
use crate::id::VendorId;
use crate::vendor_sweet::SweetOffering;

/// A persisted vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
}

/// A vendor that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVendor {
    pub name: String,
}

impl NewVendor {
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

    #[must_use]
    pub fn with_id(self, id: VendorId) -> Vendor {
        Vendor {
            id,
            name: self.name,
        }
    }
}

/// A vendor together with every sweet it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDetail {
    pub vendor: Vendor,
    pub offerings: Vec<SweetOffering>,
}
