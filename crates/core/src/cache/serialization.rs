//! Pure functions for serializing/deserializing employee projections to/from
//! cache bytes.
//!
//! Cache values are JSON, so the cached shape is exactly the HTTP response
//! shape and easy to inspect with `redis-cli GET employee:<id>`.

use crate::employee::EmployeeView;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an employee projection to JSON bytes.
pub fn serialize_view(view: &EmployeeView) -> Result<Vec<u8>> {
    serde_json::to_vec(view).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an employee projection.
pub fn deserialize_view(bytes: &[u8]) -> Result<EmployeeView> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{Employee, NewEmployee};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn fixed_employee() -> Employee {
        Employee::from_new(
            12,
            NewEmployee::new(
                "Grace",
                "Admiral",
                9000,
                NaiveDate::from_ymd_opt(1943, 7, 1).unwrap(),
            ),
            Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_created_view_survives_cache() {
        let view = EmployeeView::created(&fixed_employee());

        let bytes = serialize_view(&view).expect("serialize should succeed");
        let cached = deserialize_view(&bytes).expect("deserialize should succeed");

        assert_eq!(view, cached);
        assert!(cached.updated_at.is_none());
    }

    #[test]
    fn test_updated_view_keeps_only_updated_at() {
        let view = EmployeeView::updated(&fixed_employee());

        let bytes = serialize_view(&view).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();

        assert!(text.contains("\"updated_at\""));
        assert!(!text.contains("\"created_at\""));
        assert_eq!(deserialize_view(&bytes).unwrap(), view);
    }

    #[test]
    fn test_field_names_are_stable() {
        let bytes = serialize_view(&EmployeeView::created(&fixed_employee())).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            ["created_at", "hired_date", "id", "name", "position", "salary"]
        );
    }

    #[test]
    fn test_deserialize_malformed_json() {
        let result = deserialize_view(b"{ not valid json }");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let result = deserialize_view(br#"{"id": 1, "name": "Ada"}"#);

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
