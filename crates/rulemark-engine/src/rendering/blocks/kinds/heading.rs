/// ATX-style heading prefixes, levels one to three only.
pub struct Heading;

impl Heading {
    /// Prefixes in precedence order, paired with their level.
    pub const PREFIXES: [(&'static str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];

    /// Returns the level and remaining text if `line` opens a heading.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|&(prefix, level)| line.strip_prefix(prefix).map(|rest| (level, rest)))
    }
}
