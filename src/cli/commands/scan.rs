//! Scan command - find hard-coded template text and replace it with `$t()` calls.
//!
//! Three modes, from least to most invasive:
//!
//! - discovery (default): list every span, exit 1 when anything is found
//! - `--replace`: dry-run preview of each replacement and the new keys
//! - `--replace --write`: rewrite source files and merge keys into the locale file
//!
//! The locale file is loaded before any source file is touched, so a
//! malformed catalog aborts the run without rewriting anything.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::super::{
    args::ScanArgs,
    exit_status::ExitStatus,
    report::{self, DryRunSummary},
};
use crate::{
    config::{Config, load_config},
    core::{Catalog, FileRewrite, ScanContext, ScanOptions, Span, apply_rewrites},
    error::LocalizeError,
};

pub fn scan(args: ScanArgs) -> Result<ExitStatus> {
    let verbose = args.common.verbose;
    let (config, output) = resolve_config(&args)?;

    let ctx = ScanContext::new(&args.path, ScanOptions::from_config(&config))?;
    let outcome = ctx.collect();

    report::print_skipped_paths(outcome.skipped_paths, verbose);
    report::print_scan_failures(&outcome.failures);
    let read_failed = outcome.failures.iter().any(LocalizeError::is_io);

    if outcome.spans.is_empty() {
        report::print_no_findings(outcome.files_scanned);
        return Ok(ExitStatus::Success.or_error(read_failed));
    }

    report::print_empty_slug_warnings(&outcome.spans);

    if !args.replace {
        report::print_findings(&outcome.spans, outcome.file_count());
        return Ok(ExitStatus::Failure.or_error(read_failed));
    }

    let mut catalog = Catalog::load(&output)?;

    if !args.write {
        let new_keys = outcome
            .spans
            .iter()
            .filter(|span| !catalog.contains_key(&span.key))
            .count();
        let summary = DryRunSummary {
            replacements: outcome.spans.len(),
            files: outcome.file_count(),
            new_keys,
            existing_keys: outcome.spans.len() - new_keys,
        };
        report::print_dry_run(&outcome.spans, &summary, &output);
        return Ok(ExitStatus::Success.or_error(read_failed));
    }

    let rewrites = apply_rewrites(&outcome.spans);
    report::print_rewrites(&rewrites);

    let (entries, write_failed) = rewritten_entries(&outcome.spans, &rewrites);
    if entries.is_empty() {
        return Ok(ExitStatus::Error);
    }

    let stats = catalog.merge(entries);
    catalog.save()?;
    report::print_catalog_written(
        catalog.file_path(),
        !catalog.existed(),
        catalog.len(),
        &stats,
    );

    Ok(ExitStatus::Success.or_error(read_failed || write_failed))
}

/// Catalog entries for the spans of successfully rewritten files.
///
/// Keys of files that could not be rewritten are left out so the catalog
/// only describes calls that exist in the sources. The flag is true when
/// any file failed.
fn rewritten_entries<'a>(
    spans: &'a [Span],
    rewrites: &[FileRewrite],
) -> (Vec<(&'a str, &'a str)>, bool) {
    let rewritten: HashSet<&Path> = rewrites
        .iter()
        .filter(|r| r.result.is_ok())
        .map(|r| r.file_path.as_path())
        .collect();
    let failed = rewritten.len() < rewrites.len();

    let entries = spans
        .iter()
        .filter(|span| rewritten.contains(Path::new(&span.file_path)))
        .map(|span| (span.key.as_str(), span.text.as_str()))
        .collect();

    (entries, failed)
}

/// Load configuration and apply command-line overrides.
///
/// Returns the config and the locale file path. A relative `output` from a
/// config file is resolved against that file's directory; `--output` is
/// taken as given.
fn resolve_config(args: &ScanArgs) -> Result<(Config, PathBuf)> {
    let loaded = load_config(&args.path, args.common.config.as_deref())?;
    let mut config = loaded.config;

    if let Some(max_slug) = args.max_slug {
        config.max_slug = usize::from(max_slug);
    }
    if args.skip_symbols {
        config.skip_symbol_only = true;
    }

    let output = match &args.output {
        Some(output) => output.clone(),
        None => resolve_output(loaded.source.as_deref(), &config.output),
    };

    Ok((config, output))
}

fn resolve_output(config_file: Option<&Path>, output: &str) -> PathBuf {
    let output = Path::new(output);
    if output.is_absolute() {
        return output.to_path_buf();
    }
    match config_file.and_then(Path::parent) {
        Some(config_dir) => config_dir.join(output),
        None => output.to_path_buf(),
    }
}
