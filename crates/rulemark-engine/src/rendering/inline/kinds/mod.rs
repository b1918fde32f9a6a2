pub mod code_span;
pub mod strong;

pub use code_span::CodeSpan;
pub use strong::Strong;
