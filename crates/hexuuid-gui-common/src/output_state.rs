//! Output panel state for converter front ends
//!
//! One panel per output format, each holding its stored value list and
//! its newline/comma join toggle. The panels are refreshed wholesale
//! from a fresh [`Conversion`], so repeated conversions never leave
//! stale output behind.

use hexuuid_core::{Conversion, FormatKind};

/// Message shown when a conversion produced nothing
pub const EMPTY_MESSAGE: &str = "No valid UUIDs found";

/// How a panel joins its stored values for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinMode {
    /// One value per line
    #[default]
    Lines,
    /// Comma-and-space separated
    Commas,
}

impl JoinMode {
    /// The opposite mode, for toggle buttons
    pub fn toggled(self) -> Self {
        match self {
            JoinMode::Lines => JoinMode::Commas,
            JoinMode::Commas => JoinMode::Lines,
        }
    }

    fn separator(self) -> &'static str {
        match self {
            JoinMode::Lines => "\n",
            JoinMode::Commas => ", ",
        }
    }
}

/// Stored values and join toggle for one output format
#[derive(Debug, Clone, Default)]
pub struct OutputPanel {
    pub values: Vec<String>,
    pub join: JoinMode,
}

impl OutputPanel {
    /// Text to show in the panel: the joined values, or the empty-state
    /// message when the last conversion yielded nothing.
    ///
    /// Joining is pure display concatenation and carries no parsing
    /// semantics.
    pub fn display_text(&self) -> String {
        if self.values.is_empty() {
            EMPTY_MESSAGE.to_string()
        } else {
            self.values.join(self.join.separator())
        }
    }

    /// Flip between newline and comma joining
    pub fn toggle_join(&mut self) {
        self.join = self.join.toggled();
    }
}

/// One panel per output format
#[derive(Debug, Clone, Default)]
pub struct OutputPanels {
    hyphenated: OutputPanel,
    compact: OutputPanel,
    hex_prefixed: OutputPanel,
    byte_literal: OutputPanel,
}

impl OutputPanels {
    pub fn panel(&self, kind: FormatKind) -> &OutputPanel {
        match kind {
            FormatKind::Hyphenated => &self.hyphenated,
            FormatKind::Compact => &self.compact,
            FormatKind::HexPrefixed => &self.hex_prefixed,
            FormatKind::ByteLiteral => &self.byte_literal,
        }
    }

    pub fn panel_mut(&mut self, kind: FormatKind) -> &mut OutputPanel {
        match kind {
            FormatKind::Hyphenated => &mut self.hyphenated,
            FormatKind::Compact => &mut self.compact,
            FormatKind::HexPrefixed => &mut self.hex_prefixed,
            FormatKind::ByteLiteral => &mut self.byte_literal,
        }
    }

    /// Replace every panel's stored values from a fresh conversion,
    /// keeping each panel's join toggle as the user set it.
    pub fn refresh(&mut self, conversion: &Conversion) {
        for kind in FormatKind::ALL {
            self.panel_mut(kind).values = conversion.column(kind).to_vec();
        }
    }
}
