use std::sync::OnceLock;

use regex::Regex;

/// Strong emphasis inline type with owned delimiter constant.
pub struct Strong;

impl Strong {
    /// Double asterisk that opens and closes a strong span.
    pub const DELIM: &'static str = "**";

    /// Shortest match between two `**` delimiters. The inner text may be empty.
    pub fn pattern() -> &'static Regex {
        static STRONG_REGEX: OnceLock<Regex> = OnceLock::new();
        STRONG_REGEX.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid strong regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_match_stops_at_first_closer() {
        let found: Vec<_> = Strong::pattern()
            .captures_iter("**a** and **b**")
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(found, vec!["a", "b"]);
    }

    #[test]
    fn empty_inner_matches() {
        let caps = Strong::pattern().captures("****").unwrap();
        assert_eq!(&caps[1], "");
    }
}
