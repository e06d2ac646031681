//! Validation utilities for request payloads

use crate::models::DeliveryStop;

/// Validate that a string has non-whitespace content
pub fn validate_non_blank(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Value must not be blank");
    }
    Ok(())
}

/// Validate a delivery stop has a usable name and address
pub fn validate_delivery_stop(stop: &DeliveryStop) -> Result<(), &'static str> {
    if stop.name.trim().is_empty() {
        return Err("Delivery location name must not be blank");
    }
    if stop.address.trim().is_empty() {
        return Err("Delivery location address must not be blank");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert!(validate_non_blank("Chicago").is_ok());
        assert!(validate_non_blank("").is_err());
        assert!(validate_non_blank("   ").is_err());
    }

    #[test]
    fn test_delivery_stop_requires_name_and_address() {
        let mut stop = DeliveryStop {
            id: "1".to_string(),
            name: "Warehouse".to_string(),
            address: "200 Canal St".to_string(),
            time_window: None,
            priority: None,
        };
        assert!(validate_delivery_stop(&stop).is_ok());

        stop.address = "  ".to_string();
        assert!(validate_delivery_stop(&stop).is_err());
    }
}
