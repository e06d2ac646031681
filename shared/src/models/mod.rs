//! Domain models for the LogiBot logistics assistant

mod route;
mod shipment;
mod weather;

pub use route::*;
pub use shipment::*;
pub use weather::*;
