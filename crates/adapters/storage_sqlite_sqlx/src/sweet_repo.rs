//! `SQLite` implementation of [`SweetRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sweetshop_app::ports::SweetRepository;
use sweetshop_domain::error::SweetShopError;
use sweetshop_domain::id::SweetId;
use sweetshop_domain::sweet::{NewSweet, Sweet};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Sweet`].
struct Wrapper(Sweet);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Sweet> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Sweet {
            id: SweetId::new(id),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO sweets (name) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT id, name FROM sweets WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name FROM sweets ORDER BY id";
const DELETE_OFFERINGS: &str = "DELETE FROM vendor_sweets WHERE sweet_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM sweets WHERE id = ?";

/// `SQLite`-backed sweet repository.
pub struct SqliteSweetRepository {
    pool: SqlitePool,
}

impl SqliteSweetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SweetRepository for SqliteSweetRepository {
    fn create(&self, sweet: NewSweet) -> impl Future<Output = Result<Sweet, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&sweet.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(sweet.with_id(SweetId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: SweetId,
    ) -> impl Future<Output = Result<Option<Sweet>, SweetShopError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sweet>, SweetShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: SweetId) -> impl Future<Output = Result<bool, SweetShopError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;

    async fn setup() -> (SqlitePool, SqliteSweetRepository) {
        let pool = memory_pool().await;
        (pool.clone(), SqliteSweetRepository::new(pool))
    }

    #[tokio::test]
    async fn should_create_and_retrieve_sweet_when_valid() {
        let (_pool, repo) = setup().await;

        let created = repo.create(NewSweet::new("Brownie").unwrap()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Brownie");
    }

    #[tokio::test]
    async fn should_return_none_when_sweet_not_found() {
        let (_pool, repo) = setup().await;
        let result = repo.get_by_id(SweetId::new(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_sweets_in_id_order() {
        let (_pool, repo) = setup().await;
        let first = repo.create(NewSweet::new("Brownie").unwrap()).await.unwrap();
        let second = repo.create(NewSweet::new("Cupcake").unwrap()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn should_report_false_when_deleting_missing_sweet() {
        let (_pool, repo) = setup().await;
        assert!(!repo.delete(SweetId::new(3)).await.unwrap());
    }

    #[tokio::test]
    async fn should_cascade_vendor_sweets_when_sweet_deleted() {
        let (pool, repo) = setup().await;
        let sweet = repo.create(NewSweet::new("Brownie").unwrap()).await.unwrap();
        sqlx::query("INSERT INTO vendors (id, name) VALUES (1, 'Cookie Jar')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO vendor_sweets (price, vendor_id, sweet_id) VALUES (5, 1, ?)")
            .bind(sweet.id.get())
            .execute(&pool)
            .await
            .unwrap();

        assert!(repo.delete(sweet.id).await.unwrap());

        let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vendor_sweets")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
        assert!(repo.get_by_id(sweet.id).await.unwrap().is_none());
    }
}
