//! UUID Converter GUI Common Library
//!
//! Shared presentation-layer state for building converter front ends.
//!
//! This library provides:
//! - Per-format output panels with stored values and a join toggle
//! - The "No valid UUIDs found" empty state
//! - Clipboard export for copy-all actions
//!
//! The state here is deliberately separate from `hexuuid-core`: the core
//! `convert` function stays pure, and a front end owns one
//! [`OutputPanels`] that it refreshes after each conversion.

pub mod clipboard;
pub mod output_state;

pub use output_state::{JoinMode, OutputPanel, OutputPanels, EMPTY_MESSAGE};
