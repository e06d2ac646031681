//! Delivery stops and route ranking

use serde::{Deserialize, Serialize};

/// A delivery stop supplied by the caller for route optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStop {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl DeliveryStop {
    /// Effective priority, defaulting to 0 when absent
    pub fn priority_or_default(&self) -> u8 {
        self.priority.unwrap_or(0)
    }
}

/// Rank delivery stops by priority, highest first
///
/// The sort is stable: stops with equal priority keep their input order.
/// This is a stand-in ordering, not a distance- or time-optimized route.
pub fn rank_stops(stops: &[DeliveryStop]) -> Vec<DeliveryStop> {
    let mut ranked = stops.to_vec();
    ranked.sort_by_key(|stop| std::cmp::Reverse(stop.priority_or_default()));
    ranked
}
