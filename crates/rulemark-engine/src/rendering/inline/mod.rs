//! # Inline Substitution
//!
//! Turns the text of list items and code-bearing paragraphs into structured
//! spans instead of markup strings.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Strong, Code)
//! - **`kinds`**: delimiter owners (`Strong`, `CodeSpan`) with cached patterns
//! - **`parser`**: `parse_inline()` (strong then code) and `parse_code_spans()`
//!
//! ## Ordering
//!
//! Strong spans are resolved first over the raw text. Code spans are then
//! resolved inside each resulting text run, so `**run `make`**` yields a
//! strong span containing a code span.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_code_spans, parse_inline};
pub use types::{Inline, plain_text};
