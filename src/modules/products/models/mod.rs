pub mod product;

pub use product::{
    last_page, CreateProductRequest, PaginatedProducts, PaginationMeta, PaginationQuery, Product,
    ProductChanges, UpdateOutcome, UpdateProductRequest, ValidateProductsRequest,
};
