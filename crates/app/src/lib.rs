//! # sweetshop-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SweetRepository`: insert, lookup, list, cascading delete for sweets
//!   - `VendorRepository`: insert, lookup, list, cascading delete for vendors
//!   - `VendorSweetRepository`: insert, lookup, list, join, delete for offerings
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SweetService`, `VendorService`, `VendorSweetService`
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `sweetshop-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
