//! Output format selection.
//!
//! A closed set of output modes, each carrying a lowercase alias used for
//! case-insensitive matching against user input. Created once from static
//! definitions; never mutated.

use crate::error::{Result, WmtError};

/// Output representation for a command's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Pretty-printed JSON written to a file.
    Json,
    /// Placeholder; not implemented by the writer.
    Csv,
    /// Pretty-printed text on stdout.
    Console,
}

impl Format {
    /// All formats in display order.
    pub const ALL: &'static [Self] = &[Self::Console, Self::Json, Self::Csv];

    /// Lowercase alias matched against user input.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Console => "console",
        }
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Console => "CONSOLE",
        }
    }

    /// Parse from user input, matching each member's name or alias
    /// case-insensitively. Input is trimmed first.
    pub fn from_arg(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Self::invalid(value));
        }
        Self::ALL
            .iter()
            .find(|f| normalized == f.alias() || normalized == f.name().to_lowercase())
            .copied()
            .ok_or_else(|| Self::invalid(value))
    }

    fn invalid(value: &str) -> WmtError {
        let valid = Self::ALL
            .iter()
            .map(|f| f.alias())
            .collect::<Vec<_>>()
            .join(", ");
        WmtError::InvalidArgument(format!("invalid format '{value}', valid formats: {valid}"))
    }

    /// Whether this format writes JSON to a file.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Whether this format writes to stdout.
    #[must_use]
    pub const fn is_console(self) -> bool {
        matches!(self, Self::Console)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
