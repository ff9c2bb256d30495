//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod sweet_service;
pub mod vendor_service;
pub mod vendor_sweet_service;

#[cfg(test)]
mod in_memory;
