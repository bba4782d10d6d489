use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::{AppError, Result};
use crate::modules::products::models::{CreateProductRequest, Product, ProductChanges};

const PRODUCT_COLUMNS: &str = "id, name, price, available, created_at, updated_at";

/// Repository for product database operations.
///
/// Availability filtering is part of the contract: every read except
/// `find_by_ids` sees only `available = true` rows. `find_by_ids` deliberately
/// matches soft-deleted rows as well, for the batch existence check.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product; `available` starts true.
    async fn insert(&self, input: &CreateProductRequest) -> Result<Product>;

    /// Count rows with `available = true`.
    async fn count_available(&self) -> Result<i64>;

    /// Fetch up to `limit` available rows, skipping `offset`, in datastore
    /// default order.
    async fn list_available(&self, limit: i64, offset: i64) -> Result<Vec<Product>>;

    /// Fetch one row by id with `available = true`.
    async fn find_available(&self, id: i64) -> Result<Option<Product>>;

    /// Apply a partial field update and return the updated row.
    async fn update_fields(&self, id: i64, changes: &ProductChanges) -> Result<Product>;

    /// Flip `available` to false and return the updated row.
    async fn set_unavailable(&self, id: i64) -> Result<Product>;

    /// Fetch all rows matching the given ids, regardless of availability.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>>;
}

pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch a row by id without the availability filter. Used after writes,
    /// where the row is known to exist.
    async fn fetch_row(&self, id: i64) -> Result<Product> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?");

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::internal(format!("Product {id} vanished after write")))
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn insert(&self, input: &CreateProductRequest) -> Result<Product> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO products (name, price, available, created_at, updated_at) \
             VALUES (?, ?, TRUE, ?, ?)",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.fetch_row(result.last_insert_id() as i64).await
    }

    async fn count_available(&self) -> Result<i64> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE available = TRUE")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    async fn list_available(&self, limit: i64, offset: i64) -> Result<Vec<Product>> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE available = TRUE LIMIT ? OFFSET ?"
        );

        let products = sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn find_available(&self, id: i64) -> Result<Option<Product>> {
        let query =
            format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ? AND available = TRUE");

        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn update_fields(&self, id: i64, changes: &ProductChanges) -> Result<Product> {
        // Callers guarantee at least one field is set; updated_at always moves.
        let mut builder: QueryBuilder<MySql> = QueryBuilder::new("UPDATE products SET updated_at = ");
        builder.push_bind(Utc::now());

        if let Some(name) = &changes.name {
            builder.push(", name = ");
            builder.push_bind(name);
        }
        if let Some(price) = &changes.price {
            builder.push(", price = ");
            builder.push_bind(price);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);

        builder.build().execute(&self.pool).await?;

        self.fetch_row(id).await
    }

    async fn set_unavailable(&self, id: i64) -> Result<Product> {
        sqlx::query("UPDATE products SET available = FALSE, updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.fetch_row(id).await
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // No availability filter here: soft-deleted products still count as
        // existing for batch validation.
        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id IN ("));

        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let products = builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}
