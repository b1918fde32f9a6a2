use std::sync::OnceLock;

use regex::Regex;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other substitution happens inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Non-empty run of non-backticks between a pair of backticks.
    pub fn pattern() -> &'static Regex {
        static CODE_SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_SPAN_REGEX.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
    }
}
