//! HTTP-facing product endpoints.
//!
//! Errors surface through `AppError`'s `ResponseError` impl: NotFound maps to
//! 404 with a JSON error body.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::{
    CreateProductRequest, PaginationQuery, UpdateProductRequest,
};
use crate::modules::products::services::ProductService;

/// Create a new product
/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}

/// List available products with pagination
/// GET /products?page=1&limit=10
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.find_all(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Get one available product by id
/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.find_one(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Partially update a product
/// PATCH /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = service
        .update(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// Soft-delete a product
/// DELETE /products/{id}
pub async fn remove_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.remove(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::post().to(create_product))
            .route("", web::get().to(list_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::patch().to(update_product))
            .route("/{id}", web::delete().to(remove_product)),
    );
}
