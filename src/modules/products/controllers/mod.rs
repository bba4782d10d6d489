pub mod product_controller;
pub mod rpc_controller;

pub use product_controller::configure as configure_http;
pub use rpc_controller::configure as configure_rpc;
