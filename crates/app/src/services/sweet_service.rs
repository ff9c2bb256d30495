//! Sweet service: use-cases for managing sweets.

use sweetshop_domain::error::{NotFoundError, SweetShopError};
use sweetshop_domain::id::SweetId;
use sweetshop_domain::sweet::{NewSweet, Sweet};

use crate::ports::SweetRepository;

/// Application service for sweet CRUD operations.
pub struct SweetService<R> {
    repo: R,
}

impl<R: SweetRepository> SweetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new sweet after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, sweet), fields(sweet_name = %sweet.name))]
    pub async fn create_sweet(&self, sweet: NewSweet) -> Result<Sweet, SweetShopError> {
        sweet.validate()?;
        self.repo.create(sweet).await
    }

    /// Look up a sweet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when no sweet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_sweet(&self, id: SweetId) -> Result<Sweet, SweetShopError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all sweets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sweets(&self) -> Result<Vec<Sweet>, SweetShopError> {
        self.repo.get_all().await
    }

    /// Delete a sweet and, with it, every vendor offering of that sweet.
    ///
    /// # Errors
    ///
    /// Returns [`SweetShopError::NotFound`] when no sweet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_sweet(&self, id: SweetId) -> Result<(), SweetShopError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: SweetId) -> SweetShopError {
    NotFoundError {
        entity: "Sweet",
        id: id.to_string(),
    }
    .into()
}
