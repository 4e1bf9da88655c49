//! Source file parsers.
//!
//! - `vue`: Vue single-file component templates (uses tree-sitter for the syntax tree)

pub mod vue;
