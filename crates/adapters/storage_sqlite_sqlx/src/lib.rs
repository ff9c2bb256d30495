//! # sweetshop-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `sweetshop-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run the embedded schema migration on startup
//! - Map between domain types and database rows, resolving relations with joins
//! - Delete parents and their `vendor_sweets` rows inside one transaction
//!
//! ## Dependency rule
//! Depends on `sweetshop-app` (for port traits) and `sweetshop-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod sweet_repo;
mod vendor_repo;
mod vendor_sweet_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use sweet_repo::SqliteSweetRepository;
pub use vendor_repo::SqliteVendorRepository;
pub use vendor_sweet_repo::SqliteVendorSweetRepository;
