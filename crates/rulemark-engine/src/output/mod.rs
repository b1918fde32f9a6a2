//! Presentation mappings from [`RenderBlock`](crate::RenderBlock)s to text formats.

pub mod html;
pub mod plain;

pub use html::{inline_html, to_html};
pub use plain::to_plain_text;
