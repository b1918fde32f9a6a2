use std::sync::OnceLock;

use regex::Regex;

/// Ordered list marker: ASCII digits, a period, then whitespace.
pub struct OrderedMarker;

impl OrderedMarker {
    pub fn pattern() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX.get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid ordered list regex"))
    }

    /// Returns the item text with the ordinal prefix removed.
    pub fn strip(line: &str) -> Option<&str> {
        Self::pattern().find(line).map(|m| &line[m.end()..])
    }
}

/// Bullet marker: optional leading whitespace, `-` or `*`, then whitespace.
pub struct BulletMarker;

impl BulletMarker {
    /// Base left margin, in margin units, of a top-level bullet.
    pub const BASE_MARGIN: usize = 6;
    /// Margin units added per character of leading whitespace.
    pub const MARGIN_PER_INDENT: usize = 2;
    /// Pixels per margin unit.
    pub const PX_PER_UNIT: usize = 4;

    pub fn pattern() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| Regex::new(r"^(\s*)[-*]\s").expect("Invalid bullet regex"))
    }

    /// Returns the leading whitespace width (in characters) and the item text.
    pub fn strip(line: &str) -> Option<(usize, &str)> {
        let caps = Self::pattern().captures(line)?;
        let full = caps.get(0)?;
        let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
        Some((indent, &line[full.end()..]))
    }

    /// Margin units for a bullet with `indent` characters of leading whitespace.
    pub fn indent_level(indent: usize) -> usize {
        Self::BASE_MARGIN + Self::MARGIN_PER_INDENT * indent
    }
}
