//! Extraction identifiers
//!
//! One id correlates everything produced for a single intercepted
//! document: log lines, the validation report, and the history entry.

use std::fmt;

/// Unique identifier for one extraction pass, based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability, so history stays in arrival order
/// - 128-bit uniqueness with no coordination
/// - A standard string form for logs and snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtractionId(u128);

impl ExtractionId {
    /// Generate a new UUIDv7-based id
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an id from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an id from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for ExtractionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExtractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl serde::Serialize for ExtractionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ExtractionId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_chronological() {
        let first = ExtractionId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = ExtractionId::new();

        assert!(first < second);
        assert!(first.timestamp() <= second.timestamp());
    }

    #[test]
    fn test_id_display_and_parse() {
        let id = ExtractionId::new();
        let text = id.to_string();

        assert_eq!(text.len(), 36);
        assert_eq!(ExtractionId::from_string(&text).unwrap(), id);
    }

    #[test]
    fn test_id_invalid_string() {
        assert!(ExtractionId::from_string("not-a-uuid").is_err());
        assert!(ExtractionId::from_string("").is_err());
    }

    #[test]
    fn test_id_serde_as_string() {
        let id = ExtractionId::new();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, format!("\"{}\"", id));
        let back: ExtractionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: id ordering matches u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = ExtractionId::from_value(a);
            let id_b = ExtractionId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: round-trip through string representation preserves the id
        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = ExtractionId::from_value(value);
            let text = id.to_string();

            match ExtractionId::from_string(&text) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }
    }
}
