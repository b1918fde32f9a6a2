//! Built-in rule documents.
//!
//! The documents are plain data compiled in from `rules/*.md`; nothing here
//! knows how they render.

use std::fmt;
use std::str::FromStr;

const CLAUDE_RULES: &str = include_str!("../../rules/claude.md");
const UNIVERSAL_RULES: &str = include_str!("../../rules/universal.md");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown rule variant '{0}' (expected one of: claude, universal)")]
pub struct UnknownVariant(pub String);

/// Which built-in rule document is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleVariant {
    #[default]
    Claude,
    Universal,
}

impl RuleVariant {
    /// All variants, in display order.
    pub const ALL: [RuleVariant; 2] = [RuleVariant::Claude, RuleVariant::Universal];

    pub fn document(self) -> &'static str {
        match self {
            RuleVariant::Claude => CLAUDE_RULES,
            RuleVariant::Universal => UNIVERSAL_RULES,
        }
    }

    /// Human-readable name shown in panel titles.
    pub fn label(self) -> &'static str {
        match self {
            RuleVariant::Claude => "Claude Code",
            RuleVariant::Universal => "Universal Agent",
        }
    }

    /// Lowercase identifier used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            RuleVariant::Claude => "claude",
            RuleVariant::Universal => "universal",
        }
    }

    /// Confirmation text shown after the document has been copied.
    pub fn copied_message(self) -> String {
        let name = match self {
            RuleVariant::Claude => "Claude Code",
            RuleVariant::Universal => "Universal",
        };
        format!("{name} rules copied to clipboard!")
    }
}

impl FromStr for RuleVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleVariant::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
