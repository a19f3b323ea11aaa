//! Hex serialization for register-width integers.
//!
//! Register-width quantities render as `0x`-prefixed uppercase hex strings
//! (`"0x4D2"`) rather than JSON numbers, so 64-bit values survive consumers
//! with 53-bit number precision. Use with `#[serde(with = "serde_hex")]`.

use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:#X}", value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    // Owned String rather than &str: flattened structs deserialize out of a
    // buffered content tree where borrowed strings are unavailable.
    let text = String::deserialize(deserializer)?;
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .ok_or_else(|| D::Error::custom(format!("expected 0x-prefixed hex string, got {text:?}")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| D::Error::custom(format!("invalid hex string {text:?}: {e}")))
}

/// Same rendering for `Option<u64>` fields that are skipped when `None`.
pub mod option {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<u64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        // Absent fields never reach here; `#[serde(default)]` supplies None.
        super::deserialize(deserializer).map(Some)
    }
}
