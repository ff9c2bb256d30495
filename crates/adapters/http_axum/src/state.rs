//! Shared application state for axum handlers.

use std::sync::Arc;

use sweetshop_app::ports::{SweetRepository, VendorRepository, VendorSweetRepository};
use sweetshop_app::services::sweet_service::SweetService;
use sweetshop_app::services::vendor_service::VendorService;
use sweetshop_app::services::vendor_sweet_service::VendorSweetService;

/// Application state shared across all axum handlers.
///
/// Generic over the sweet, vendor, and vendor-sweet repository types to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<SR, VR, OR> {
    /// Sweet CRUD service.
    pub sweet_service: Arc<SweetService<SR>>,
    /// Vendor CRUD service, including vendor detail with offerings.
    pub vendor_service: Arc<VendorService<VR, OR>>,
    /// Vendor/sweet association service.
    pub vendor_sweet_service: Arc<VendorSweetService<OR, VR, SR>>,
}

impl<SR, VR, OR> Clone for AppState<SR, VR, OR> {
    fn clone(&self) -> Self {
        Self {
            sweet_service: Arc::clone(&self.sweet_service),
            vendor_service: Arc::clone(&self.vendor_service),
            vendor_sweet_service: Arc::clone(&self.vendor_sweet_service),
        }
    }
}

impl<SR, VR, OR> AppState<SR, VR, OR>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        sweet_service: SweetService<SR>,
        vendor_service: VendorService<VR, OR>,
        vendor_sweet_service: VendorSweetService<OR, VR, SR>,
    ) -> Self {
        Self {
            sweet_service: Arc::new(sweet_service),
            vendor_service: Arc::new(vendor_service),
            vendor_sweet_service: Arc::new(vendor_sweet_service),
        }
    }
}
