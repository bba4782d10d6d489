use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog product row.
///
/// Products are never physically erased: `available = false` marks a record as
/// logically deleted and hides it from list/get reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product. `id` and `available` are system-owned.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
}

/// Partial update payload.
///
/// An `id` field may arrive in the body (RPC callers bundle it into the
/// payload); it is always discarded, since the identifier is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl UpdateProductRequest {
    /// Strip the identifier and keep only the updatable fields.
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name,
            price: self.price,
        }
    }
}

/// The updatable subset of a product, after id stripping.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// Result of an update call: either the updated row, or the no-op marker
/// returned when the payload carried nothing to write.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UpdateOutcome {
    Updated(Product),
    Noop { message: String },
}

/// Query parameters for paginated listing
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationQuery {
    /// Rows to skip: pages are 1-based.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub total: i64,
    pub last_page: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, total: i64, limit: i64) -> Self {
        Self {
            page,
            total,
            last_page: last_page(total, limit),
        }
    }
}

/// `ceil(total / limit)` without going through floats.
pub fn last_page(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedProducts {
    pub data: Vec<Product>,
    pub meta: PaginationMeta,
}

/// Body of the batch existence check exposed to other services.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateProductsRequest {
    pub ids: Vec<i64>,
}
