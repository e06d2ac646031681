//! Business logic services for the LogiBot backend

pub mod analysis;
pub mod route;
pub mod shipment;

pub use analysis::AnalysisService;
pub use route::RouteService;
pub use shipment::{ShipmentRegistry, ShipmentService};
