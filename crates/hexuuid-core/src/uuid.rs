//! Canonical UUID value type

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A normalized 128-bit UUID value.
///
/// Stored as raw bytes; the canonical textual form is the 32-character
/// uppercase hex string returned by [`compact`](Self::compact). All four
/// output formats are derived from the same 16 bytes, so rendering is
/// lossless in every direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedUuid([u8; 16]);

impl NormalizedUuid {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Parse from a hyphen-free hex string.
    ///
    /// The string must be exactly 32 hex digits; case is accepted either
    /// way since the value is stored as bytes.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        if hex_str.len() != 32 {
            return Err(Error::InvalidCandidate(hex_str.to_string()));
        }
        let decoded = hex::decode(hex_str)?;
        // Length is guaranteed by the check above (32 hex digits = 16 bytes)
        let bytes: [u8; 16] = decoded
            .try_into()
            .map_err(|_| Error::WrongByteCount(hex_str.len() / 2))?;
        Ok(Self(bytes))
    }

    /// The raw 16 bytes
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The canonical 32-character uppercase hex form
    pub fn compact(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Display for NormalizedUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}

impl Serialize for NormalizedUuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.compact())
    }
}

impl<'de> Deserialize<'de> for NormalizedUuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
