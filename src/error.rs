//! Typed failures reported by the localization pipeline.
//!
//! Per-file failures (`FileRead`, `Parse`, `FileWrite`, `StaleSource`) are
//! collected and reported without stopping the run. Catalog failures abort
//! before any source file is rewritten.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = LocalizeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LocalizeError {
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("cannot write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} changed since it was scanned (expected {expected:?} at byte {offset})", path.display())]
    StaleSource {
        path: PathBuf,
        offset: usize,
        expected: String,
    },

    #[error("span {start}..{end} is outside a buffer of {len} bytes")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error("cannot read locale file {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse existing locale file {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write locale file {}: {source}", path.display())]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {reason}", path.display())]
    InvalidTarget { path: PathBuf, reason: String },
}

impl LocalizeError {
    /// True for failures caused by I/O rather than by file content.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::CatalogRead { .. }
                | Self::CatalogWrite { .. }
        )
    }
}
