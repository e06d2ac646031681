//! Shipment query service
//!
//! Resolves free-text queries against the in-memory shipment registry.
//! Classification and lookup are pure functions in the `shared` crate; this
//! service owns the registry wiring and request logging.

use std::sync::Arc;

use shared::{process_query, QueryResult, ShipmentRecord};

/// Read-only registry of known shipments
///
/// Sourced from a static fixture and reset on every process restart. The
/// registry is injected so tests can substitute their own records.
#[derive(Clone)]
pub struct ShipmentRegistry {
    records: Arc<Vec<ShipmentRecord>>,
}

impl ShipmentRegistry {
    /// Create a registry from explicit records
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Create the demo fixture registry
    pub fn with_fixture() -> Self {
        Self::new(vec![
            ShipmentRecord::new("123", "In Transit", "Chicago", "March 16, 2025"),
            ShipmentRecord::new("456", "Delivered", "Los Angeles", "March 14, 2025"),
        ])
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }
}

/// Shipment query service
#[derive(Clone)]
pub struct ShipmentService {
    registry: ShipmentRegistry,
}

impl ShipmentService {
    pub fn new(registry: ShipmentRegistry) -> Self {
        Self { registry }
    }

    /// Classify a query and resolve any shipment reference it carries
    pub fn process_query(&self, query: &str) -> QueryResult {
        tracing::info!("Processing query: {}", query);
        process_query(query, self.registry.records())
    }
}
