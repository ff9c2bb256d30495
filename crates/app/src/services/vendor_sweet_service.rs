//! Vendor-sweet service: use-cases for pricing a sweet at a vendor.

use sweetshop_domain::error::{NotFoundError, SweetShopError};
use sweetshop_domain::id::VendorSweetId;
use sweetshop_domain::vendor_sweet::{NewVendorSweet, VendorSweet, VendorSweetDetail};

use crate::ports::{SweetRepository, VendorRepository, VendorSweetRepository};

/// Application service for vendor/sweet associations.
pub struct VendorSweetService<OR, VR, SR> {
    repo: OR,
    vendors: VR,
    sweets: SR,
}

impl<OR, VR, SR> VendorSweetService<OR, VR, SR>
where
    OR: VendorSweetRepository,
    VR: VendorRepository,
    SR: SweetRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: OR, vendors: VR, sweets: SR) -> Self {
        Self {
            repo,
            vendors,
            sweets,
        }
    }

    /// Record that a vendor sells a sweet at a price.
    ///
    /// The draft has already passed price validation. Both parents are
    /// resolved before anything is written, so a missing vendor or sweet
    /// leaves storage untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when the vendor or the sweet does
    /// not exist, or a storage error from the repositories.
    #[tracing::instrument(skip(self, draft), fields(vendor_id = %draft.vendor_id, sweet_id = %draft.sweet_id))]
    pub async fn create_vendor_sweet(
        &self,
        draft: NewVendorSweet,
    ) -> Result<VendorSweetDetail, SweetShopError> {
        let vendor = self
            .vendors
            .get_by_id(draft.vendor_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Vendor",
                id: draft.vendor_id.to_string(),
            })?;
        let sweet = self
            .sweets
            .get_by_id(draft.sweet_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Sweet",
                id: draft.sweet_id.to_string(),
            })?;

        let vendor_sweet = self.repo.create(draft).await?;
        tracing::debug!(id = %vendor_sweet.id, "vendor sweet created");

        Ok(VendorSweetDetail {
            vendor_sweet,
            vendor,
            sweet,
        })
    }

    /// Look up an association by id.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when no association with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_vendor_sweet(&self, id: VendorSweetId) -> Result<VendorSweet, SweetShopError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all associations.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_vendor_sweets(&self) -> Result<Vec<VendorSweet>, SweetShopError> {
        self.repo.get_all().await
    }

    /// Delete an association by id.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when no association with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_vendor_sweet(&self, id: VendorSweetId) -> Result<(), SweetShopError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: VendorSweetId) -> SweetShopError {
    NotFoundError {
        entity: "VendorSweet",
        id: id.to_string(),
    }
    .into()
}
