//! Service-to-service product endpoints.
//!
//! Same operation set as the HTTP controller plus the batch existence check,
//! but with the remote-call error convention: every domain failure (NotFound,
//! ValidationFailed) becomes a 400 response with a flat `{status, message}`
//! body that the calling service can re-raise. Datastore failures are left to
//! the framework's default handling.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::{AppError, RpcErrorBody};
use crate::modules::products::models::{
    CreateProductRequest, PaginationQuery, UpdateProductRequest, ValidateProductsRequest,
};
use crate::modules::products::services::ProductService;

/// Translate a domain error into the RPC envelope; infra errors propagate.
fn rpc_error(err: AppError) -> Result<HttpResponse, AppError> {
    match err {
        AppError::NotFound(_) | AppError::Validation(_) => {
            Ok(HttpResponse::BadRequest().json(RpcErrorBody::from(&err)))
        }
        other => Err(other),
    }
}

/// POST /rpc/products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    match service.create(request.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Created().json(product)),
        Err(err) => rpc_error(err),
    }
}

/// GET /rpc/products?page=1&limit=10
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    match service.find_all(query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(err) => rpc_error(err),
    }
}

/// GET /rpc/products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    match service.find_one(path.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Ok().json(product)),
        Err(err) => rpc_error(err),
    }
}

/// PATCH /rpc/products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    match service.update(path.into_inner(), request.into_inner()).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(outcome)),
        Err(err) => rpc_error(err),
    }
}

/// DELETE /rpc/products/{id}
pub async fn remove_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    match service.remove(path.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Ok().json(product)),
        Err(err) => rpc_error(err),
    }
}

/// Batch existence check used by other services before referencing products.
/// POST /rpc/products/validate
pub async fn validate_products(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<ValidateProductsRequest>,
) -> Result<HttpResponse, AppError> {
    match service.validate_products(request.into_inner().ids).await {
        Ok(products) => Ok(HttpResponse::Ok().json(products)),
        Err(err) => rpc_error(err),
    }
}

/// Configure RPC-style product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rpc/products")
            .route("", web::post().to(create_product))
            .route("", web::get().to(list_products))
            .route("/validate", web::post().to(validate_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::patch().to(update_product))
            .route("/{id}", web::delete().to(remove_product)),
    );
}
