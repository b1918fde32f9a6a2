pub mod io;
pub mod output;
pub mod rendering;
pub mod rules;

// Re-export key types for easier usage
pub use io::*;
pub use output::{to_html, to_plain_text};
pub use rendering::{blocks::RenderBlock, inline::Inline, render};
pub use rules::{RuleVariant, UnknownVariant};
