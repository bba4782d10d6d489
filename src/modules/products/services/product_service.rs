use std::collections::HashSet;
use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::products::models::{
    CreateProductRequest, PaginatedProducts, PaginationMeta, PaginationQuery, Product,
    UpdateOutcome, UpdateProductRequest,
};
use crate::modules::products::repositories::ProductRepository;

/// The core catalog operation set, shared by the HTTP and RPC controllers.
///
/// Every operation is a single-shot pass-through to the repository; the only
/// consistency check in the system is the availability read that `find_one`
/// performs and that `update`/`remove` re-run before mutating. That check and
/// the subsequent write are two independent round trips, matching the original
/// contract.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Insert a new product and return it with its generated id.
    pub async fn create(&self, input: CreateProductRequest) -> Result<Product> {
        let product = self.repo.insert(&input).await?;

        tracing::debug!(id = product.id, "product created");

        Ok(product)
    }

    /// List available products, one page at a time.
    ///
    /// A page past the end returns an empty `data` without error.
    pub async fn find_all(&self, pagination: PaginationQuery) -> Result<PaginatedProducts> {
        let total = self.repo.count_available().await?;

        let data = self
            .repo
            .list_available(pagination.limit, pagination.offset())
            .await?;

        Ok(PaginatedProducts {
            data,
            meta: PaginationMeta::new(pagination.page, total, pagination.limit),
        })
    }

    /// Fetch one available product by id.
    pub async fn find_one(&self, id: i64) -> Result<Product> {
        self.repo
            .find_available(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with id: [{id}] not founded.")))
    }

    /// Apply a partial update. The identifier field in the payload is ignored;
    /// an effectively empty payload short-circuits without issuing a write.
    pub async fn update(&self, id: i64, input: UpdateProductRequest) -> Result<UpdateOutcome> {
        self.find_one(id).await?;

        let changes = input.into_changes();
        if changes.is_empty() {
            return Ok(UpdateOutcome::Noop {
                message: "nothing for update".to_string(),
            });
        }

        let product = self.repo.update_fields(id, &changes).await?;

        Ok(UpdateOutcome::Updated(product))
    }

    /// Soft-delete: flip `available` to false. The row stays in the datastore.
    pub async fn remove(&self, id: i64) -> Result<Product> {
        self.find_one(id).await?;

        self.repo.set_unavailable(id).await
    }

    /// Batch existence check for other services.
    ///
    /// Duplicated ids are collapsed before matching. Availability is NOT
    /// filtered: soft-deleted products count as found.
    pub async fn validate_products(&self, ids: Vec<i64>) -> Result<Vec<Product>> {
        let mut seen = HashSet::new();
        let distinct: Vec<i64> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

        let products = self.repo.find_by_ids(&distinct).await?;

        if products.len() != distinct.len() {
            return Err(AppError::validation("Some products were not found"));
        }

        Ok(products)
    }
}
