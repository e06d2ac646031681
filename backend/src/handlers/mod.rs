//! HTTP handlers for the LogiBot backend

pub mod analysis;
pub mod health;
pub mod route;
pub mod shipment;

pub use analysis::analyze_shipment;
pub use health::hello;
pub use route::optimize_route;
pub use shipment::query_shipment;
