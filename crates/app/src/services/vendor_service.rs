//! Vendor service: use-cases for managing vendors and reading their offerings.

use sweetshop_domain::error::{NotFoundError, SweetShopError};
use sweetshop_domain::id::VendorId;
use sweetshop_domain::vendor::{NewVendor, Vendor, VendorDetail};

use crate::ports::{VendorRepository, VendorSweetRepository};

/// Application service for vendor CRUD operations.
///
/// Holds the offering repository as well so that a vendor can be returned
/// together with the sweets it sells.
pub struct VendorService<VR, OR> {
    repo: VR,
    offerings: OR,
}

impl<VR, OR> VendorService<VR, OR>
where
    VR: VendorRepository,
    OR: VendorSweetRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: VR, offerings: OR) -> Self {
        Self { repo, offerings }
    }

    /// Create a new vendor after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, vendor), fields(vendor_name = %vendor.name))]
    pub async fn create_vendor(&self, vendor: NewVendor) -> Result<Vendor, SweetShopError> {
        vendor.validate()?;
        self.repo.create(vendor).await
    }

    /// Look up a vendor by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when no vendor with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_vendor(&self, id: VendorId) -> Result<Vendor, SweetShopError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Look up a vendor together with each sweet it offers and at what price.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when no vendor with `id` exists,
    /// or a storage error from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_vendor_detail(&self, id: VendorId) -> Result<VendorDetail, SweetShopError> {
        let vendor = self.get_vendor(id).await?;
        let offerings = self.offerings.find_by_vendor(id).await?;
        Ok(VendorDetail { vendor, offerings })
    }

    /// List all vendors.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, SweetShopError> {
        self.repo.get_all().await
    }

    /// Delete a vendor and every offering it carries.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when no vendor with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_vendor(&self, id: VendorId) -> Result<(), SweetShopError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: VendorId) -> SweetShopError {
    NotFoundError {
        entity: "Vendor",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{SweetRepository, VendorSweetRepository};
    use crate::services::in_memory::InMemoryStore;
    use sweetshop_domain::sweet::NewSweet;
    use sweetshop_domain::vendor_sweet::{NewVendorSweet, Price};

    fn make_service(store: &InMemoryStore) -> VendorService<InMemoryStore, InMemoryStore> {
        VendorService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn should_create_vendor_when_valid() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);

        let created = svc
            .create_vendor(NewVendor::new("Insomnia Cookies").unwrap())
            .await
            .unwrap();

        let fetched = svc.get_vendor(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_with_vendor_entity_name() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);

        let err = svc.get_vendor_detail(VendorId::new(12)).await.unwrap_err();
        assert_eq!(err.to_string(), "Vendor not found");
    }

    #[tokio::test]
    async fn should_include_offerings_in_detail() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);
        let vendor = svc
            .create_vendor(NewVendor::new("Cookie Jar").unwrap())
            .await
            .unwrap();
        let sweet = SweetRepository::create(&store, NewSweet::new("Brownie").unwrap())
            .await
            .unwrap();
        VendorSweetRepository::create(
            &store,
            NewVendorSweet {
                price: Price::new(250).unwrap(),
                vendor_id: vendor.id,
                sweet_id: sweet.id,
            },
        )
        .await
        .unwrap();

        let detail = svc.get_vendor_detail(vendor.id).await.unwrap();
        assert_eq!(detail.vendor, vendor);
        assert_eq!(detail.offerings.len(), 1);
        assert_eq!(detail.offerings[0].sweet, sweet);
        assert_eq!(detail.offerings[0].vendor_sweet.price.get(), 250);
    }

    #[tokio::test]
    async fn should_cascade_offerings_when_vendor_deleted() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);
        let vendor = svc
            .create_vendor(NewVendor::new("Cookie Jar").unwrap())
            .await
            .unwrap();
        let sweet = SweetRepository::create(&store, NewSweet::new("Brownie").unwrap())
            .await
            .unwrap();
        VendorSweetRepository::create(
            &store,
            NewVendorSweet {
                price: Price::new(1).unwrap(),
                vendor_id: vendor.id,
                sweet_id: sweet.id,
            },
        )
        .await
        .unwrap();

        svc.delete_vendor(vendor.id).await.unwrap();

        assert_eq!(store.vendor_sweet_count(), 0);
        assert!(matches!(
            svc.get_vendor(vendor.id).await,
            Err(SweetShopError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_list_vendors_in_id_order() {
        let store = InMemoryStore::default();
        let svc = make_service(&store);
        let first = svc
            .create_vendor(NewVendor::new("A").unwrap())
            .await
            .unwrap();
        let second = svc
            .create_vendor(NewVendor::new("B").unwrap())
            .await
            .unwrap();

        let all = svc.list_vendors().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }
}
