//! JSON resource handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod sweets;
#[allow(clippy::missing_errors_doc)]
pub mod vendor_sweets;
#[allow(clippy::missing_errors_doc)]
pub mod vendors;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use sweetshop_app::ports::{SweetRepository, VendorRepository, VendorSweetRepository};
use sweetshop_domain::error::NotFoundError;

use crate::state::AppState;

/// Build the resource sub-router.
pub fn routes<SR, VR, OR>() -> Router<AppState<SR, VR, OR>>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    Router::new()
        // Vendors
        .route(
            "/vendors",
            get(vendors::list::<SR, VR, OR>).post(vendors::create::<SR, VR, OR>),
        )
        .route(
            "/vendors/{id}",
            get(vendors::get::<SR, VR, OR>).delete(vendors::delete::<SR, VR, OR>),
        )
        // Sweets
        .route(
            "/sweets",
            get(sweets::list::<SR, VR, OR>).post(sweets::create::<SR, VR, OR>),
        )
        .route(
            "/sweets/{id}",
            get(sweets::get::<SR, VR, OR>).delete(sweets::delete::<SR, VR, OR>),
        )
        // Vendor sweets
        .route(
            "/vendor_sweets",
            get(vendor_sweets::list::<SR, VR, OR>).post(vendor_sweets::create::<SR, VR, OR>),
        )
        .route(
            "/vendor_sweets/{id}",
            get(vendor_sweets::get::<SR, VR, OR>).delete(vendor_sweets::delete::<SR, VR, OR>),
        )
}

/// Parse a path segment into a typed id.
///
/// A segment that is not an integer can never name a row, so it is reported
/// the same way as an id that does not resolve.
fn parse_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, NotFoundError> {
    raw.parse().map_err(|_| NotFoundError {
        entity,
        id: raw.to_string(),
    })
}
