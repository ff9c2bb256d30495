//! `VendorSweet`: one vendor's offering of one sweet at one price.
//!
//! This is the bridge of the many-to-many relation between
//! [`Vendor`](crate::vendor::Vendor) and [`Sweet`](crate::sweet::Sweet).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{SweetId, VendorId, VendorSweetId};
use crate::sweet::Sweet;
use crate::vendor::Vendor;

/// A non-negative price. The only way to obtain one is through
/// [`Price::new`] (or deserialization, which goes through it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    /// Validate and wrap a raw price.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativePrice`] when `value < 0`.
    pub const fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::NegativePrice(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Validate an optional raw price coming from caller input.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when the price is absent and
/// [`ValidationError::NegativePrice`] when it is below zero.
pub fn validate_price(price: Option<i64>) -> Result<Price, ValidationError> {
    price
        .ok_or(ValidationError::MissingField("price"))
        .and_then(Price::new)
}

/// A persisted vendor/sweet association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSweet {
    pub id: VendorSweetId,
    pub price: Price,
    pub vendor_id: VendorId,
    pub sweet_id: SweetId,
}

/// An association that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewVendorSweet {
    pub price: Price,
    pub vendor_id: VendorId,
    pub sweet_id: SweetId,
}

impl NewVendorSweet {
    /// Validate raw caller input into a draft.
    ///
    /// Field presence is checked first, then the price.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first absent field,
    /// or [`ValidationError::NegativePrice`].
    pub fn from_raw(
        price: Option<i64>,
        vendor_id: Option<i64>,
        sweet_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let vendor_id = vendor_id.ok_or(ValidationError::MissingField("vendor_id"))?;
        let sweet_id = sweet_id.ok_or(ValidationError::MissingField("sweet_id"))?;
        let price = validate_price(price)?;
        Ok(Self {
            price,
            vendor_id: VendorId::new(vendor_id),
            sweet_id: SweetId::new(sweet_id),
        })
    }

    #[must_use]
    pub fn with_id(self, id: VendorSweetId) -> VendorSweet {
        VendorSweet {
            id,
            price: self.price,
            vendor_id: self.vendor_id,
            sweet_id: self.sweet_id,
        }
    }
}

/// An association joined with the sweet it points at, as listed under a vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweetOffering {
    pub vendor_sweet: VendorSweet,
    pub sweet: Sweet,
}

/// An association joined with both of its parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorSweetDetail {
    pub vendor_sweet: VendorSweet,
    pub vendor: Vendor,
    pub sweet: Sweet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_zero_price() {
        assert_eq!(Price::new(0).unwrap().get(), 0);
    }

    #[test]
    fn should_reject_negative_price() {
        assert_eq!(Price::new(-1), Err(ValidationError::NegativePrice(-1)));
    }

    #[test]
    fn should_report_missing_price() {
        assert_eq!(
            validate_price(None),
            Err(ValidationError::MissingField("price"))
        );
    }

    #[test]
    fn should_reject_negative_price_during_deserialization() {
        let result: Result<Price, _> = serde_json::from_str("-5");
        assert!(result.is_err());
    }

    #[test]
    fn should_build_draft_when_all_fields_valid() {
        let draft = NewVendorSweet::from_raw(Some(10), Some(1), Some(2)).unwrap();
        assert_eq!(draft.price.get(), 10);
        assert_eq!(draft.vendor_id, VendorId::new(1));
        assert_eq!(draft.sweet_id, SweetId::new(2));
    }

    #[test]
    fn should_report_missing_field_before_checking_price() {
        let result = NewVendorSweet::from_raw(Some(-3), None, Some(2));
        assert_eq!(result, Err(ValidationError::MissingField("vendor_id")));
    }

    #[test]
    fn should_reject_draft_with_negative_price() {
        let result = NewVendorSweet::from_raw(Some(-3), Some(1), Some(2));
        assert_eq!(result, Err(ValidationError::NegativePrice(-3)));
    }
}
