//! Scan pipeline: discover files, locate and filter spans, assign keys.
//!
//! Reading and parsing run in parallel; key assignment runs afterwards as a
//! single sequential pass over the collected spans in traversal order, so
//! the same tree always produces the same keys.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use super::{
    file_scanner::scan_files,
    filter::SpanFilter,
    keys::{KeyCounter, assign_keys},
    parsers::vue::locate_spans,
    span::Span,
};
use crate::{
    config::Config,
    error::{LocalizeError, Result},
};

/// Settings that shape a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub max_slug: usize,
    pub filter: SpanFilter,
}

impl ScanOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extensions: config.extensions.clone(),
            ignores: config.ignores.clone(),
            max_slug: config.max_slug,
            filter: SpanFilter::new(config.skip_symbol_only, config.ignore_texts.iter().cloned()),
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Everything a scan found.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Keyed spans in traversal order.
    pub spans: Vec<Span>,
    /// Files that could not be read or parsed. They contribute no spans.
    pub failures: Vec<LocalizeError>,
    pub files_scanned: usize,
    /// Directory entries the traversal could not access.
    pub skipped_paths: usize,
}

impl ScanOutcome {
    /// Number of distinct files with at least one span.
    pub fn file_count(&self) -> usize {
        let mut files: Vec<&str> = self.spans.iter().map(|s| s.file_path.as_str()).collect();
        files.dedup();
        files.len()
    }
}

pub struct ScanContext {
    base: PathBuf,
    options: ScanOptions,
    files: Vec<String>,
    skipped_paths: usize,
}

impl ScanContext {
    /// Discover the files under `target`, which must be an existing directory.
    pub fn new(target: &Path, options: ScanOptions) -> Result<Self> {
        let metadata = fs::metadata(target).map_err(|e| LocalizeError::InvalidTarget {
            path: target.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(LocalizeError::InvalidTarget {
                path: target.to_path_buf(),
                reason: "path must be a directory".to_string(),
            });
        }

        let scan = scan_files(target, &options.extensions, &options.ignores);

        Ok(Self {
            base: target.to_path_buf(),
            options,
            files: scan.files,
            skipped_paths: scan.skipped_count,
        })
    }

    /// Locate, filter and key every span of every discovered file.
    pub fn collect(&self) -> ScanOutcome {
        let per_file: Vec<Result<Vec<Span>>> = self
            .files
            .par_iter()
            .map(|file_path| self.extract_file(file_path))
            .collect();

        let mut spans = Vec::new();
        let mut failures = Vec::new();
        for result in per_file {
            match result {
                Ok(file_spans) => spans.extend(file_spans),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping file");
                    failures.push(e);
                }
            }
        }

        let mut counter = KeyCounter::new();
        assign_keys(&mut spans, &self.base, self.options.max_slug, &mut counter);

        ScanOutcome {
            spans,
            failures,
            files_scanned: self.files.len(),
            skipped_paths: self.skipped_paths,
        }
    }

    fn extract_file(&self, file_path: &str) -> Result<Vec<Span>> {
        let content = fs::read(file_path).map_err(|source| LocalizeError::FileRead {
            path: file_path.into(),
            source,
        })?;

        let located = locate_spans(file_path, &content)?;
        let spans = self.options.filter.apply(located);
        tracing::debug!(file = file_path, spans = spans.len(), "extracted spans");
        Ok(spans)
    }
}
