//! `SQLite` implementation of [`VendorSweetRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sweetshop_app::ports::VendorSweetRepository;
use sweetshop_domain::error::SweetShopError;
use sweetshop_domain::id::{SweetId, VendorId, VendorSweetId};
use sweetshop_domain::sweet::Sweet;
use sweetshop_domain::vendor_sweet::{NewVendorSweet, Price, SweetOffering, VendorSweet};

use crate::error::StorageError;

fn decode_vendor_sweet(row: &SqliteRow) -> Result<VendorSweet, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    let price: i64 = row.try_get("price")?;
    let vendor_id: i64 = row.try_get("vendor_id")?;
    let sweet_id: i64 = row.try_get("sweet_id")?;

    let price = Price::new(price).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

    Ok(VendorSweet {
        id: VendorSweetId::new(id),
        price,
        vendor_id: VendorId::new(vendor_id),
        sweet_id: SweetId::new(sweet_id),
    })
}

/// Wrapper for converting database rows into domain [`VendorSweet`].
struct Wrapper(VendorSweet);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<VendorSweet> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        decode_vendor_sweet(row).map(Self)
    }
}

/// Wrapper for rows of the `vendor_sweets ⋈ sweets` join.
struct OfferingWrapper(SweetOffering);

impl<'r> FromRow<'r, SqliteRow> for OfferingWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let vendor_sweet = decode_vendor_sweet(row)?;
        let sweet_name: String = row.try_get("sweet_name")?;

        Ok(Self(SweetOffering {
            sweet: Sweet {
                id: vendor_sweet.sweet_id,
                name: sweet_name,
            },
            vendor_sweet,
        }))
    }
}

const INSERT: &str = "INSERT INTO vendor_sweets (price, vendor_id, sweet_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, price, vendor_id, sweet_id FROM vendor_sweets WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, price, vendor_id, sweet_id FROM vendor_sweets ORDER BY id";
const SELECT_BY_VENDOR: &str = "SELECT vs.id, vs.price, vs.vendor_id, vs.sweet_id, s.name AS sweet_name \
     FROM vendor_sweets vs \
     INNER JOIN sweets s ON s.id = vs.sweet_id \
     WHERE vs.vendor_id = ? \
     ORDER BY vs.id";
const DELETE_BY_ID: &str = "DELETE FROM vendor_sweets WHERE id = ?";

/// `SQLite`-backed vendor/sweet association repository.
pub struct SqliteVendorSweetRepository {
    pool: SqlitePool,
}

impl SqliteVendorSweetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl VendorSweetRepository for SqliteVendorSweetRepository {
    fn create(
        &self,
        vendor_sweet: NewVendorSweet,
    ) -> impl Future<Output = Result<VendorSweet, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(vendor_sweet.price.get())
                .bind(vendor_sweet.vendor_id.get())
                .bind(vendor_sweet.sweet_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(vendor_sweet.with_id(VendorSweetId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: VendorSweetId,
    ) -> impl Future<Output = Result<Option<VendorSweet>, SweetShopError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<VendorSweet>, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_vendor(
        &self,
        vendor_id: VendorId,
    ) -> impl Future<Output = Result<Vec<SweetOffering>, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<OfferingWrapper> = sqlx::query_as(SELECT_BY_VENDOR)
                .bind(vendor_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(
        &self,
        id: VendorSweetId,
    ) -> impl Future<Output = Result<bool, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
