// Contract tests for the service-to-service (RPC-style) product endpoints.
//
// Same operation set as the HTTP contract, but domain failures come back as a
// 400 response with a flat {status, message} envelope, and the batch
// existence check is exposed.

#[path = "../helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use serde_json::json;

use catalog_service::products::controllers::configure_rpc;
use catalog_service::products::ProductService;
use helpers::{product, MemoryProductRepository};

async fn spawn_app(
    repo: Arc<MemoryProductRepository>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    let service = Arc::new(ProductService::new(repo));
    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(configure_rpc),
    )
    .await
}

#[actix_web::test]
async fn test_missing_product_is_flat_bad_request_envelope() {
    let repo = Arc::new(MemoryProductRepository::new());
    let app = spawn_app(repo).await;

    let req = test::TestRequest::get().uri("/rpc/products/7").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"status": 400, "message": "Product with id: [7] not founded."})
    );
}

#[actix_web::test]
async fn test_remove_missing_product_uses_same_envelope() {
    let repo = Arc::new(MemoryProductRepository::new());
    let app = spawn_app(repo).await;

    let req = test::TestRequest::delete()
        .uri("/rpc/products/7")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(400));
}

#[actix_web::test]
async fn test_create_and_list_share_core_behavior() {
    let repo = Arc::new(MemoryProductRepository::new());
    let app = spawn_app(repo).await;

    let req = test::TestRequest::post()
        .uri("/rpc/products")
        .set_json(json!({"name": "Keyboard", "price": "25.00"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/rpc/products?page=1&limit=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["meta"], json!({"page": 1, "total": 1, "last_page": 1}));
}

#[actix_web::test]
async fn test_validate_returns_each_product_once() {
    let repo = Arc::new(MemoryProductRepository::new());
    repo.seed(product(1, "Keyboard", true));
    repo.seed(product(2, "Removed mouse", false));
    let app = spawn_app(repo).await;

    // Duplicates collapse, and the soft-deleted product still validates
    let req = test::TestRequest::post()
        .uri("/rpc/products/validate")
        .set_json(json!({"ids": [1, 1, 2]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_validate_fails_when_any_id_is_unmatched() {
    let repo = Arc::new(MemoryProductRepository::new());
    repo.seed(product(1, "Keyboard", true));
    let app = spawn_app(repo).await;

    let req = test::TestRequest::post()
        .uri("/rpc/products/validate")
        .set_json(json!({"ids": [1, 999]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"status": 400, "message": "Some products were not found"})
    );
}
