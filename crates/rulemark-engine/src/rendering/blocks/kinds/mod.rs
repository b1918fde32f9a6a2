pub mod bold_paragraph;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use bold_paragraph::BoldParagraph;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{BulletMarker, OrderedMarker};
