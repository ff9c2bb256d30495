//! Storage port: repository traits for persistence.
//!
//! Every listing is ordered by id ascending. `delete` returns `true` when a
//! row was removed and `false` when the id did not resolve.

use std::future::Future;

use sweetshop_domain::error::SweetShopError;
use sweetshop_domain::id::{SweetId, VendorId, VendorSweetId};
use sweetshop_domain::sweet::{NewSweet, Sweet};
use sweetshop_domain::vendor::{NewVendor, Vendor};
use sweetshop_domain::vendor_sweet::{NewVendorSweet, SweetOffering, VendorSweet};

/// Persistence for [`Sweet`] rows.
pub trait SweetRepository {
    fn create(&self, sweet: NewSweet) -> impl Future<Output = Result<Sweet, SweetShopError>> + Send;

    fn get_by_id(
        &self,
        id: SweetId,
    ) -> impl Future<Output = Result<Option<Sweet>, SweetShopError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sweet>, SweetShopError>> + Send;

    /// Remove the sweet and every association referencing it, atomically.
    fn delete(&self, id: SweetId) -> impl Future<Output = Result<bool, SweetShopError>> + Send;
}

/// Persistence for [`Vendor`] rows.
pub trait VendorRepository {
    fn create(
        &self,
        vendor: NewVendor,
    ) -> impl Future<Output = Result<Vendor, SweetShopError>> + Send;

    fn get_by_id(
        &self,
        id: VendorId,
    ) -> impl Future<Output = Result<Option<Vendor>, SweetShopError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Vendor>, SweetShopError>> + Send;

    /// Remove the vendor and every association referencing it, atomically.
    fn delete(&self, id: VendorId) -> impl Future<Output = Result<bool, SweetShopError>> + Send;
}

/// Persistence for [`VendorSweet`] rows.
pub trait VendorSweetRepository {
    fn create(
        &self,
        vendor_sweet: NewVendorSweet,
    ) -> impl Future<Output = Result<VendorSweet, SweetShopError>> + Send;

    fn get_by_id(
        &self,
        id: VendorSweetId,
    ) -> impl Future<Output = Result<Option<VendorSweet>, SweetShopError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<VendorSweet>, SweetShopError>> + Send;

    /// All associations of a vendor, joined with their sweet.
    fn find_by_vendor(
        &self,
        vendor_id: VendorId,
    ) -> impl Future<Output = Result<Vec<SweetOffering>, SweetShopError>> + Send;

    fn delete(
        &self,
        id: VendorSweetId,
    ) -> impl Future<Output = Result<bool, SweetShopError>> + Send;
}
