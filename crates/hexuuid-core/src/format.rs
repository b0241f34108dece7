//! Output rendering
//!
//! The four deterministic renderings of a normalized UUID. Each is a
//! lossless transform of the same 16 bytes.

use crate::byte_literal;
use crate::uuid::NormalizedUuid;
use serde::{Deserialize, Serialize};

/// The four output representations, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, lowercase
    Hyphenated,
    /// The 32 uppercase hex characters
    Compact,
    /// `0x` followed by the compact form
    HexPrefixed,
    /// `b'\xHH...'` with every byte escaped
    ByteLiteral,
}

impl FormatKind {
    /// All kinds in display order
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Hyphenated,
        FormatKind::Compact,
        FormatKind::HexPrefixed,
        FormatKind::ByteLiteral,
    ];

    /// Human-readable panel label
    pub fn label(&self) -> &'static str {
        match self {
            FormatKind::Hyphenated => "Original (with hyphens)",
            FormatKind::Compact => "Uppercase (no hyphens)",
            FormatKind::HexPrefixed => "Hex format (0x)",
            FormatKind::ByteLiteral => "Byte string",
        }
    }
}

/// All four renderings of one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedUuid {
    pub hyphenated: String,
    pub compact: String,
    pub hex_prefixed: String,
    pub byte_literal: String,
}

impl FormattedUuid {
    /// The rendering for one format kind
    pub fn get(&self, kind: FormatKind) -> &str {
        match kind {
            FormatKind::Hyphenated => &self.hyphenated,
            FormatKind::Compact => &self.compact,
            FormatKind::HexPrefixed => &self.hex_prefixed,
            FormatKind::ByteLiteral => &self.byte_literal,
        }
    }
}

/// Render every output format for one value.
pub fn format_all(uuid: &NormalizedUuid) -> FormattedUuid {
    FormattedUuid {
        hyphenated: render(FormatKind::Hyphenated, uuid),
        compact: render(FormatKind::Compact, uuid),
        hex_prefixed: render(FormatKind::HexPrefixed, uuid),
        byte_literal: render(FormatKind::ByteLiteral, uuid),
    }
}

/// Render a single output format.
pub fn render(kind: FormatKind, uuid: &NormalizedUuid) -> String {
    match kind {
        FormatKind::Hyphenated => hyphenated(uuid),
        FormatKind::Compact => uuid.compact(),
        FormatKind::HexPrefixed => format!("0x{}", uuid.compact()),
        FormatKind::ByteLiteral => byte_literal::render_byte_literal(uuid.as_bytes()),
    }
}

/// Lowercase hex grouped 8-4-4-4-12
fn hyphenated(uuid: &NormalizedUuid) -> String {
    let hex = hex::encode(uuid.as_bytes());
    format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..]
    )
}
