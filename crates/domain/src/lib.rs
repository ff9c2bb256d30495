//! # sweetshop-domain
//!
//! Pure domain model for the sweetshop catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Sweets** (products) and **Vendors** (sellers)
//! - Define **`VendorSweets`** (one vendor's priced offering of one sweet)
//! - Contain all invariant enforcement (non-empty names, non-negative prices)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod sweet;
pub mod vendor;
pub mod vendor_sweet;
