//! # Block Rendering
//!
//! Line-by-line classification into [`RenderBlock`]s.
//!
//! ## Phases
//!
//! 1. **Fence tracking** (`builder`): a `BlockBuilder` checks every line for a
//!    fence marker first. While a fence is open, lines are buffered verbatim.
//!
//! 2. **Line classification** (`classify`): every other line goes through
//!    `MarkdownLineClassifier`, which picks exactly one block kind.
//!
//! ## Modules
//!
//! - **`types`**: `RenderBlock`
//! - **`kinds`**: per-kind delimiter owners (CodeFence, Heading, BoldParagraph, list markers)
//! - **`classify`**: `MarkdownLineClassifier` and its precedence order
//! - **`builder`**: `BlockBuilder` fence state machine
//!
//! ## Key Invariants
//!
//! - One block per line outside fences
//! - Fenced code blocks are raw zones: no classification inside
//! - An unterminated fence produces no block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::MarkdownLineClassifier;
pub use types::RenderBlock;
