//! Candidate extraction
//!
//! Locates UUID-like tokens in raw input text: either the whole input as
//! a byte-string literal, or every non-overlapping hex run shaped
//! 8-4-4-4-12 with optional hyphens between groups.

use crate::byte_literal;
use once_cell::sync::Lazy;
use regex::Regex;

/// Hex runs shaped 8-4-4-4-12, hyphens optional between groups
static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[0-9a-fA-F]{8}-?[0-9a-fA-F]{4}-?[0-9a-fA-F]{4}-?[0-9a-fA-F]{4}-?[0-9a-fA-F]{12}",
    )
    .expect("invalid UUID pattern")
});

/// A candidate UUID token located in the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A regex-matched hex run, kept verbatim
    Text(String),
    /// The 16 bytes decoded from a whole-input byte-string literal
    Bytes([u8; 16]),
}

/// Locate candidate tokens in order of first appearance.
///
/// When the trimmed input starts like a byte-string literal, the entire
/// input is tried as one; a literal that parses to exactly 16 bytes is
/// the single candidate. A parse failure or any other length falls back
/// to the regex scan. No candidates is an empty result, not an error.
pub fn extract_candidates(text: &str) -> Vec<Candidate> {
    if byte_literal::looks_like_byte_literal(text) {
        if let Ok(bytes) = byte_literal::parse_byte_literal(text) {
            if let Ok(uuid_bytes) = <[u8; 16]>::try_from(bytes.as_slice()) {
                return vec![Candidate::Bytes(uuid_bytes)];
            }
        }
    }

    UUID_PATTERN
        .find_iter(text)
        .map(|m| Candidate::Text(m.as_str().to_string()))
        .collect()
}
