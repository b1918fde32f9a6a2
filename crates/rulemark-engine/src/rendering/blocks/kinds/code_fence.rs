pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the trimmed language tag if `line` is a fence marker.
    ///
    /// A marker is any line starting with three backticks, opener or closer alike.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS).map(str::trim)
    }
}
