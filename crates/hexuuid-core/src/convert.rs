//! Batch conversion orchestration
//!
//! Runs extraction, normalization and rendering over arbitrary input
//! text and collects one ordered output column per format.

use crate::extract::extract_candidates;
use crate::format::{format_all, FormatKind};
use crate::normalize::normalize;
use serde::Serialize;

/// Result of one batch conversion.
///
/// Every column holds one rendered string per successfully normalized
/// candidate, in discovery order; the columns move in lockstep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub hyphenated: Vec<String>,
    pub compact: Vec<String>,
    pub hex_prefixed: Vec<String>,
    pub byte_literal: Vec<String>,
}

impl Conversion {
    /// The output column for one format kind
    pub fn column(&self, kind: FormatKind) -> &[String] {
        match kind {
            FormatKind::Hyphenated => &self.hyphenated,
            FormatKind::Compact => &self.compact,
            FormatKind::HexPrefixed => &self.hex_prefixed,
            FormatKind::ByteLiteral => &self.byte_literal,
        }
    }

    /// Number of successfully converted values
    pub fn len(&self) -> usize {
        self.hyphenated.len()
    }

    /// True when nothing converted; callers should present the
    /// "no valid UUIDs found" state rather than an error.
    pub fn is_empty(&self) -> bool {
        self.hyphenated.is_empty()
    }
}

/// Convert every UUID found in `text`.
///
/// Candidates that fail normalization are skipped, not fatal. An input
/// with no usable candidates yields empty columns.
pub fn convert(text: &str) -> Conversion {
    let mut result = Conversion::default();
    for candidate in extract_candidates(text) {
        let Ok(uuid) = normalize(&candidate) else {
            continue;
        };
        let formatted = format_all(&uuid);
        result.hyphenated.push(formatted.hyphenated);
        result.compact.push(formatted.compact);
        result.hex_prefixed.push(formatted.hex_prefixed);
        result.byte_literal.push(formatted.byte_literal);
    }
    result
}
