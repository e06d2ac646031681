//! Shipment records and free-text query classification

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A tracked shipment
///
/// Records come from a fixed in-process registry and are always fully
/// populated; no partial records exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub id: String,
    pub status: String,
    pub location: String,
    pub eta: String,
}

impl ShipmentRecord {
    pub fn new(id: &str, status: &str, location: &str, eta: &str) -> Self {
        Self {
            id: id.to_string(),
            status: status.to_string(),
            location: location.to_string(),
            eta: eta.to_string(),
        }
    }
}

/// Outcome of classifying and resolving a free-text query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryResult {
    /// Query referenced a known shipment id
    Shipment { data: ShipmentRecord },
    /// Query referenced a shipment id not in the registry
    Error { message: String },
    /// Query did not reference a shipment at all
    Text { message: String },
}

fn shipment_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#(\d+)").expect("valid shipment id pattern"))
}

/// Extract a shipment identifier from a free-text query
///
/// Matches the first `#<digits>` occurrence; later occurrences are ignored
/// (first-match-wins, multi-reference queries are intentionally unresolved).
pub fn extract_shipment_id(query: &str) -> Option<&str> {
    shipment_id_pattern()
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify a query and resolve it against a shipment registry
///
/// Queries carrying a `#<digits>` id are looked up by exact string equality
/// (O(n) scan, the registry is small and static). Everything else is echoed
/// back as a plain text response.
pub fn process_query(query: &str, registry: &[ShipmentRecord]) -> QueryResult {
    match extract_shipment_id(query) {
        Some(shipment_id) => match registry.iter().find(|s| s.id == shipment_id) {
            Some(shipment) => QueryResult::Shipment {
                data: shipment.clone(),
            },
            None => QueryResult::Error {
                message: format!("Shipment #{} not found", shipment_id),
            },
        },
        None => QueryResult::Text {
            message: format!("You asked: {}", query),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_id_only() {
        assert_eq!(extract_shipment_id("where is #123 and #456?"), Some("123"));
        assert_eq!(extract_shipment_id("no id here"), None);
        assert_eq!(extract_shipment_id("order #7"), Some("7"));
    }

    #[test]
    fn test_hash_without_digits_is_text() {
        assert_eq!(extract_shipment_id("what is #? exactly"), None);
    }

    #[test]
    fn test_query_result_wire_format() {
        let result = QueryResult::Error {
            message: "Shipment #999 not found".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "Shipment #999 not found");

        let result = QueryResult::Shipment {
            data: ShipmentRecord::new("123", "In Transit", "Chicago", "March 16, 2025"),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "shipment");
        assert_eq!(json["data"]["id"], "123");
    }
}
