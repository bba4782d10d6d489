//! Product Catalog Service Library
//!
//! This library provides the core functionality for the product catalog microservice.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::products;
