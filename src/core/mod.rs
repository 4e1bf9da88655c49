//! Core localization engine.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Directory traversal with extension and ignore filtering
//! - `parsers`: Span location in template sources
//! - `filter`: Dropping spans that are not translatable text
//! - `keys`: Slugs, key counter and key assignment
//! - `rewrite`: Byte-level replacement with `$t()` calls
//! - `catalog`: Merging keys into the locale JSON file
//! - `context`: The scan pipeline tying the above together

pub mod catalog;
pub mod context;
pub mod file_scanner;
pub mod filter;
pub mod keys;
pub mod parsers;
pub mod rewrite;
pub mod span;

pub use catalog::{Catalog, MergeStats, merge_and_write, read_catalog};
pub use context::{ScanContext, ScanOptions, ScanOutcome};
pub use filter::SpanFilter;
pub use keys::{KeyCounter, assign_keys, generate_key, slugify};
pub use rewrite::{FileRewrite, apply_rewrites, format_replacement, rewrite};
pub use span::{Span, sort_for_rewrite};
