//! `SQLite` implementation of [`VendorRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sweetshop_app::ports::VendorRepository;
use sweetshop_domain::error::SweetShopError;
use sweetshop_domain::id::VendorId;
use sweetshop_domain::vendor::{NewVendor, Vendor};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Vendor`].
struct Wrapper(Vendor);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Vendor> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Vendor {
            id: VendorId::new(id),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO vendors (name) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT id, name FROM vendors WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name FROM vendors ORDER BY id";
const DELETE_OFFERINGS: &str = "DELETE FROM vendor_sweets WHERE vendor_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM vendors WHERE id = ?";

/// `SQLite`-backed vendor repository.
pub struct SqliteVendorRepository {
    pool: SqlitePool,
}

impl SqliteVendorRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl VendorRepository for SqliteVendorRepository {
    fn create(
        &self,
        vendor: NewVendor,
    ) -> impl Future<Output = Result<Vendor, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&vendor.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(vendor.with_id(VendorId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: VendorId,
    ) -> impl Future<Output = Result<Option<Vendor>, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Vendor>, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: VendorId) -> impl Future<Output = Result<bool, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(DELETE_OFFERINGS)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
