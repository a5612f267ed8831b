//! Pure functions for serializing/deserializing cached values.
//!
//! Values are stored as JSON bytes, which keeps cache contents readable when
//! logged and makes snapshots byte-comparable.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{CacheError, Result};

/// Serializes a value to JSON bytes for storage in the cache.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Deserializes JSON bytes read from the cache.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::{ManagedRestaurant, MonthOrdersAmount};

    #[test]
    fn test_encode_uses_camel_case_fields() {
        let restaurant = ManagedRestaurant::new("r-1", "Cafe A").with_manager("m-1");
        let bytes = encode(&restaurant).unwrap();
        let json = String::from_utf8(bytes).unwrap();

        assert!(json.contains("\"managerId\":\"m-1\""));
        assert!(json.contains("\"description\":null"));
    }

    #[test]
    fn test_decode_restaurant() {
        let bytes = br#"{"id":"r-1","name":"Cafe A","description":"desc","managerId":null}"#;
        let restaurant: ManagedRestaurant = decode(bytes).unwrap();

        assert_eq!(restaurant.name, "Cafe A");
        assert_eq!(restaurant.description.as_deref(), Some("desc"));
        assert_eq!(restaurant.manager_id, None);
    }

    #[test]
    fn test_decode_metric() {
        let metric: MonthOrdersAmount =
            decode(br#"{"amount":42,"diffFromLastMonth":-3.5}"#).unwrap();
        assert_eq!(metric.amount, 42);
        assert_eq!(metric.diff_from_last_month, -3.5);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result: Result<ManagedRestaurant> = decode(b"not json");
        assert!(matches!(result, Err(CacheError::Serialization(_))));
    }

    #[test]
    fn test_decode_wrong_shape() {
        let result: Result<ManagedRestaurant> = decode(br#"{"amount":1}"#);
        assert!(result.is_err());
    }
}
