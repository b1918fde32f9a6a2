/// A line wrapped entirely in `**` delimiters.
pub struct BoldParagraph;

impl BoldParagraph {
    pub const DELIM: &'static str = "**";

    /// Returns the inner text when the line starts and ends with `**` and is
    /// longer than four bytes.
    ///
    /// `****` is exactly four and does not qualify.
    pub fn strip(line: &str) -> Option<&str> {
        if line.len() > 2 * Self::DELIM.len()
            && line.starts_with(Self::DELIM)
            && line.ends_with(Self::DELIM)
        {
            Some(&line[Self::DELIM.len()..line.len() - Self::DELIM.len()])
        } else {
            None
        }
    }
}
