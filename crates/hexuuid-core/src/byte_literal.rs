//! Byte-string literal parsing and rendering
//!
//! Pasted byte strings (the `b'\x90L...'` form produced by `repr()`) are
//! decoded with an explicit, restricted parser instead of any dynamic
//! evaluation. Only quote-bounded literals with backslash escapes
//! (`\xHH`, 1-3 digit octal, single-character escapes) and literal ASCII
//! bytes are recognized; everything else is a parse error.
//!
//! The renderer emits every byte as a lowercase `\xHH` pair inside
//! `b'...'`, which round-trips through the parser unchanged.

use crate::error::{Error, Result};
use std::fmt::Write;

/// Returns true if the input starts like a byte-string literal (`b'` or
/// `b"`), ignoring leading whitespace.
pub fn looks_like_byte_literal(text: &str) -> bool {
    let t = text.trim_start();
    t.starts_with("b'") || t.starts_with("b\"")
}

/// Parse a byte-string literal into raw bytes.
///
/// The literal must be the entire input apart from surrounding
/// whitespace: a `b` prefix, a matching quote pair, and nothing after
/// the closing quote.
pub fn parse_byte_literal(text: &str) -> Result<Vec<u8>> {
    let rest = text
        .trim()
        .strip_prefix('b')
        .ok_or_else(|| Error::ByteLiteral("missing b prefix".to_string()))?;

    let bytes = rest.as_bytes();
    let quote = match bytes.first() {
        Some(q @ (b'\'' | b'"')) => *q,
        _ => return Err(Error::ByteLiteral("missing opening quote".to_string())),
    };

    let mut out = Vec::new();
    let mut i = 1;
    let mut closed = false;

    while i < bytes.len() {
        match bytes[i] {
            b if b == quote => {
                closed = true;
                i += 1;
                break;
            }
            b'\\' => {
                let (byte, consumed) = parse_escape(&bytes[i + 1..])?;
                out.push(byte);
                i += 1 + consumed;
            }
            b if b.is_ascii() => {
                out.push(b);
                i += 1;
            }
            _ => {
                return Err(Error::ByteLiteral(
                    "non-ASCII character outside an escape".to_string(),
                ))
            }
        }
    }

    if !closed {
        return Err(Error::ByteLiteral("unterminated literal".to_string()));
    }
    if i != bytes.len() {
        return Err(Error::ByteLiteral(
            "trailing content after closing quote".to_string(),
        ));
    }
    Ok(out)
}

/// Decode one backslash escape (the bytes after the `\`), returning the
/// byte value and how many input bytes the escape body consumed.
fn parse_escape(body: &[u8]) -> Result<(u8, usize)> {
    let first = *body
        .first()
        .ok_or_else(|| Error::ByteLiteral("truncated escape".to_string()))?;

    match first {
        b'x' => {
            if body.len() < 3 {
                return Err(Error::ByteLiteral("truncated \\x escape".to_string()));
            }
            let hi = hex_digit(body[1])?;
            let lo = hex_digit(body[2])?;
            Ok((hi << 4 | lo, 3))
        }
        b'0'..=b'7' => {
            // Up to three octal digits, greedy
            let mut value: u32 = 0;
            let mut consumed = 0;
            while consumed < 3 {
                match body.get(consumed) {
                    Some(d @ b'0'..=b'7') => {
                        value = value * 8 + u32::from(d - b'0');
                        consumed += 1;
                    }
                    _ => break,
                }
            }
            let byte = u8::try_from(value)
                .map_err(|_| Error::ByteLiteral(format!("octal escape out of range: {value}")))?;
            Ok((byte, consumed))
        }
        b'n' => Ok((b'\n', 1)),
        b'r' => Ok((b'\r', 1)),
        b't' => Ok((b'\t', 1)),
        b'a' => Ok((0x07, 1)),
        b'b' => Ok((0x08, 1)),
        b'f' => Ok((0x0c, 1)),
        b'v' => Ok((0x0b, 1)),
        b'\\' => Ok((b'\\', 1)),
        b'\'' => Ok((b'\'', 1)),
        b'"' => Ok((b'"', 1)),
        other => Err(Error::ByteLiteral(format!(
            "unrecognized escape: \\{}",
            char::from(other)
        ))),
    }
}

fn hex_digit(b: u8) -> Result<u8> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(Error::ByteLiteral(format!(
            "invalid hex digit in \\x escape: {}",
            char::from(b)
        ))),
    }
}

/// Render raw bytes as a byte-string literal, escaping every byte as a
/// lowercase `\xHH` pair.
pub fn render_byte_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(3 + bytes.len() * 4);
    out.push_str("b'");
    for b in bytes {
        // String formatting never fails
        let _ = write!(out, "\\x{b:02x}");
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_byte_literal() {
        assert!(looks_like_byte_literal("b'\\x00'"));
        assert!(looks_like_byte_literal("  b\"abc\""));
        assert!(!looks_like_byte_literal("550e8400"));
        assert!(!looks_like_byte_literal("'abc'"));
    }

    #[test]
    fn test_parse_hex_escapes() {
        let bytes = parse_byte_literal("b'\\x00\\xff\\x7f'").unwrap();
        assert_eq!(bytes, vec![0x00, 0xff, 0x7f]);
    }

    #[test]
    fn test_parse_literal_ascii() {
        let bytes = parse_byte_literal("b'abc'").unwrap();
        assert_eq!(bytes, b"abc");
    }

    #[test]
    fn test_parse_mixed_repr_output() {
        // What Python's repr() produces for bytes with printable runs
        let bytes = parse_byte_literal("b'\\x90L\\x0e!'").unwrap();
        assert_eq!(bytes, vec![0x90, b'L', 0x0e, b'!']);
    }

    #[test]
    fn test_parse_single_char_escapes() {
        let bytes = parse_byte_literal("b'\\n\\r\\t\\\\\\'\\\"'").unwrap();
        assert_eq!(bytes, vec![b'\n', b'\r', b'\t', b'\\', b'\'', b'"']);
    }

    #[test]
    fn test_parse_octal_escapes() {
        assert_eq!(parse_byte_literal("b'\\0'").unwrap(), vec![0]);
        assert_eq!(parse_byte_literal("b'\\377'").unwrap(), vec![0xff]);
        // Non-octal digit ends the escape
        assert_eq!(parse_byte_literal("b'\\08'").unwrap(), vec![0, b'8']);
    }

    #[test]
    fn test_parse_octal_out_of_range() {
        assert!(parse_byte_literal("b'\\777'").is_err());
    }

    #[test]
    fn test_parse_double_quoted() {
        let bytes = parse_byte_literal("b\"\\x01'\\x02\"").unwrap();
        assert_eq!(bytes, vec![0x01, b'\'', 0x02]);
    }

    #[test]
    fn test_parse_rejects_unterminated() {
        assert!(parse_byte_literal("b'\\x00").is_err());
        assert!(parse_byte_literal("b'").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_content() {
        assert!(parse_byte_literal("b'\\x00' extra").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_escape() {
        assert!(parse_byte_literal("b'\\q'").is_err());
    }

    #[test]
    fn test_parse_rejects_truncated_hex_escape() {
        assert!(parse_byte_literal("b'\\x0'").is_err());
        assert!(parse_byte_literal("b'\\xg0'").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        assert!(parse_byte_literal("b'é'").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert!(parse_byte_literal("'abc'").is_err());
        assert!(parse_byte_literal("babc").is_err());
    }

    #[test]
    fn test_render_all_escaped() {
        assert_eq!(
            render_byte_literal(&[0x00, 0x4c, 0xff]),
            "b'\\x00\\x4c\\xff'"
        );
    }

    #[test]
    fn test_render_parse_roundtrip() {
        let original: Vec<u8> = (0..=255).collect();
        let rendered = render_byte_literal(&original);
        assert_eq!(parse_byte_literal(&rendered).unwrap(), original);
    }
}
