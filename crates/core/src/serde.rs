//! Serde helper functions for request deserialization.
//!
//! Partial updates use zero values as "not provided" sentinels: empty
//! strings and a zero salary both deserialize to `None`.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional salary, treating zero as None.
pub fn deserialize_optional_salary<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let n: Option<u64> = Option::deserialize(deserializer)?;
    Ok(n.filter(|n| *n != 0))
}
