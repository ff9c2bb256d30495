//! # sweetshop-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON resources `/vendors`, `/sweets`, and `/vendor_sweets`
//! - Serve a tiny HTML banner at `/` and a `/health` probe
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `sweetshop-app` (for port traits and services) and
//! `sweetshop-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
