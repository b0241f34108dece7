//! UUID Format Converter Core Library
//!
//! Pure text-transformation logic for locating UUID-like tokens in pasted
//! text and re-rendering them in canonical formats.
//!
//! This crate provides:
//! - Candidate extraction (hyphenated or compact hex runs, whole-input
//!   byte-string literals)
//! - Normalization to a canonical 128-bit value
//! - Rendering in four output formats
//! - Batch conversion over arbitrary input text
//!
//! All operations are synchronous, in-memory and side-effect-free; a
//! failed candidate is skipped, never fatal.

pub mod byte_literal;
pub mod convert;
pub mod error;
pub mod extract;
pub mod format;
pub mod normalize;
pub mod uuid;

pub use convert::{convert, Conversion};
pub use error::{Error, Result};
pub use extract::{extract_candidates, Candidate};
pub use format::{format_all, render, FormatKind, FormattedUuid};
pub use normalize::{normalize, normalize_text};
pub use uuid::NormalizedUuid;
