pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    CreateProductRequest, PaginatedProducts, PaginationMeta, PaginationQuery, Product,
    ProductChanges, UpdateOutcome, UpdateProductRequest, ValidateProductsRequest,
};
pub use repositories::{MySqlProductRepository, ProductRepository};
pub use services::ProductService;
