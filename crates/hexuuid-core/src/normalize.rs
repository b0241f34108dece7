//! Candidate normalization
//!
//! Reduces a located candidate to its canonical 128-bit value. Hyphen
//! placement, case, and a leading `0x` prefix are all immaterial.

use crate::error::{Error, Result};
use crate::extract::Candidate;
use crate::uuid::NormalizedUuid;

/// Normalize one candidate to its canonical value.
///
/// Byte-literal-derived candidates already carry the decoded bytes and
/// pass through; text candidates go through [`normalize_text`].
pub fn normalize(candidate: &Candidate) -> Result<NormalizedUuid> {
    match candidate {
        Candidate::Bytes(bytes) => Ok(NormalizedUuid::from_bytes(*bytes)),
        Candidate::Text(text) => normalize_text(text),
    }
}

/// Normalize a raw text token.
///
/// Trims surrounding whitespace, uppercases, strips a leading `0X`,
/// removes all hyphens, then requires exactly 32 hex digits. Anything
/// else is [`Error::InvalidCandidate`]; this re-validation catches
/// wrong-length fragments regardless of where hyphens sat.
pub fn normalize_text(input: &str) -> Result<NormalizedUuid> {
    let mut clean = input.trim().to_uppercase();
    if let Some(stripped) = clean.strip_prefix("0X") {
        clean = stripped.to_string();
    }
    let clean = clean.replace('-', "");

    if clean.len() != 32 || !clean.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidCandidate(input.trim().to_string()));
    }
    NormalizedUuid::from_hex(&clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: &str = "550E8400E29B41D4A716446655440000";

    #[test]
    fn test_normalize_hyphenated() {
        let uuid = normalize_text("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(uuid.compact(), COMPACT);
    }

    #[test]
    fn test_case_and_hyphens_immaterial() {
        let forms = [
            "550e8400e29b41d4a716446655440000",
            "550E8400E29B41D4A716446655440000",
            "550e8400-e29b-41d4-a716-446655440000",
            "550E8400-E29B-41D4-A716-446655440000",
        ];
        for form in forms {
            assert_eq!(normalize_text(form).unwrap().compact(), COMPACT);
        }
    }

    #[test]
    fn test_normalize_0x_prefix() {
        assert_eq!(normalize_text("0X550E8400E29B41D4A716446655440000").unwrap().compact(), COMPACT);
        assert_eq!(normalize_text("0x550e8400e29b41d4a716446655440000").unwrap().compact(), COMPACT);
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_text("  550e8400-e29b-41d4-a716-446655440000\n").unwrap().compact(), COMPACT);
    }

    #[test]
    fn test_normalize_idempotent_on_compact() {
        let once = normalize_text(COMPACT).unwrap();
        let twice = normalize_text(&once.compact()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_rejects_wrong_length() {
        assert!(normalize_text("550e8400").is_err());
        assert!(normalize_text("550e8400-e29b-41d4-a716-4466554400001").is_err());
        assert!(normalize_text("").is_err());
    }

    #[test]
    fn test_normalize_rejects_non_hex() {
        assert!(normalize_text("550g8400-e29b-41d4-a716-446655440000").is_err());
        assert!(normalize_text("not a uuid").is_err());
    }

    #[test]
    fn test_normalize_byte_candidate_passes_through() {
        let bytes = [0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4,
                     0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00, 0x00];
        let uuid = normalize(&Candidate::Bytes(bytes)).unwrap();
        assert_eq!(uuid.compact(), COMPACT);
    }
}
