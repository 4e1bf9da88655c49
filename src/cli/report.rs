//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow the engine to be used as a library.
//! Every printer has a `_to` variant taking a writer for testing.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{FileRewrite, MergeStats, Span, format_replacement, keys::has_empty_slug};
use crate::error::LocalizeError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Counts shown at the end of a dry run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DryRunSummary {
    pub replacements: usize,
    pub files: usize,
    /// Keys not yet present in the locale file.
    pub new_keys: usize,
    /// Keys the locale file already has; their values would be kept.
    pub existing_keys: usize,
}

pub fn print_no_findings(files_scanned: usize) {
    print_no_findings_to(files_scanned, &mut io::stdout().lock());
}

pub fn print_no_findings_to<W: Write>(files_scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "No un-localized text found ({} {} checked).",
            files_scanned,
            plural(files_scanned, "file", "files")
        )
        .green()
    );
}

/// Discovery mode listing: one `path:line  "text"` line per span.
pub fn print_findings(spans: &[Span], file_count: usize) {
    print_findings_to(spans, file_count, &mut io::stdout().lock());
}

pub fn print_findings_to<W: Write>(spans: &[Span], file_count: usize, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Encountered un-localized text!".bold());
    for span in spans {
        let _ = writeln!(
            writer,
            "{}:{}  {:?}",
            span.file_path,
            span.line,
            span.text
        );
    }
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} Found {} un-localized {} in {} {}.",
        FAILURE_MARK.red(),
        spans.len(),
        plural(spans.len(), "text", "texts"),
        file_count,
        plural(file_count, "file", "files")
    );
    let _ = writeln!(
        writer,
        "Run with {} to preview replacements.",
        "--replace".cyan()
    );
}

/// Dry-run preview: a small diff per span followed by a summary.
pub fn print_dry_run(spans: &[Span], summary: &DryRunSummary, output: &Path) {
    print_dry_run_to(spans, summary, output, &mut io::stdout().lock());
}

pub fn print_dry_run_to<W: Write>(
    spans: &[Span],
    summary: &DryRunSummary,
    output: &Path,
    writer: &mut W,
) {
    let _ = writeln!(writer, "{}", "=== DRY RUN ===".bold());
    for span in spans {
        let _ = writeln!(
            writer,
            "{} {}:{}",
            "-->".blue(),
            span.file_path,
            span.line
        );
        let _ = writeln!(writer, "  {} {}", "-".red(), span.text.red());
        let _ = writeln!(
            writer,
            "  {} {}",
            "+".green(),
            format_replacement(&span.key).green()
        );
        let _ = writeln!(writer);
    }

    let _ = writeln!(writer, "---");
    let _ = writeln!(writer, "Summary:");
    let _ = writeln!(
        writer,
        "  {} {} across {} {}",
        summary.replacements,
        plural(summary.replacements, "replacement", "replacements"),
        summary.files,
        plural(summary.files, "file", "files")
    );
    let _ = writeln!(
        writer,
        "  {} new {} for {} ({} already present)",
        summary.new_keys,
        plural(summary.new_keys, "key", "keys"),
        output.display(),
        summary.existing_keys
    );
    let _ = writeln!(writer);
    let _ = writeln!(writer, "Run with {} to apply changes.", "--write".cyan());
}

/// One line per rewritten file on stdout, failures on stderr.
pub fn print_rewrites(results: &[FileRewrite]) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_rewrites_to(results, &mut stdout, &mut stderr);
}

pub fn print_rewrites_to<W: Write, E: Write>(results: &[FileRewrite], out: &mut W, err: &mut E) {
    for rewrite in results {
        match &rewrite.result {
            Ok(count) => {
                let _ = writeln!(
                    out,
                    "{} {} ({} {})",
                    "Updated:".green().bold(),
                    rewrite.file_path.display(),
                    count,
                    plural(*count, "replacement", "replacements")
                );
            }
            Err(e) => print_error_to(e, err),
        }
    }
}

/// `created` is true when the locale file did not exist before this run.
pub fn print_catalog_written(output: &Path, created: bool, total_keys: usize, stats: &MergeStats) {
    print_catalog_written_to(output, created, total_keys, stats, &mut io::stdout().lock());
}

pub fn print_catalog_written_to<W: Write>(
    output: &Path,
    created: bool,
    total_keys: usize,
    stats: &MergeStats,
    writer: &mut W,
) {
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "Locale file {}: {} ({} {}, {} added)",
        if created { "created" } else { "updated" },
        output.display(),
        total_keys,
        plural(total_keys, "key", "keys"),
        stats.added
    );
    if stats.kept > 0 {
        let _ = writeln!(
            writer,
            "  - kept {} existing {} unchanged",
            stats.kept,
            plural(stats.kept, "value", "values")
        );
    }
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), "Done!".green());
}

/// Warn about files that were skipped during the scan.
pub fn print_scan_failures(failures: &[LocalizeError]) {
    print_scan_failures_to(failures, &mut io::stderr().lock());
}

pub fn print_scan_failures_to<W: Write>(failures: &[LocalizeError], writer: &mut W) {
    for failure in failures {
        let _ = writeln!(writer, "{} {} (skipped)", "warning:".bold().yellow(), failure);
    }
}

/// Flag spans whose text has nothing to build a slug from.
///
/// Such keys end in a bare `.` (or `.-N`); they are kept but worth a look.
pub fn print_empty_slug_warnings(spans: &[Span]) {
    print_empty_slug_warnings_to(spans, &mut io::stderr().lock());
}

pub fn print_empty_slug_warnings_to<W: Write>(spans: &[Span], writer: &mut W) {
    for span in spans.iter().filter(|s| has_empty_slug(&s.text)) {
        let _ = writeln!(
            writer,
            "{} {:?} at {}:{} has no ASCII letters or digits for a key slug; using \"{}\"",
            "warning:".bold().yellow(),
            span.text,
            span.file_path,
            span.line,
            span.key
        );
    }
}

pub fn print_skipped_paths(count: usize, verbose: bool) {
    print_skipped_paths_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_paths_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} skipped due to access errors{}",
            "warning:".bold().yellow(),
            count,
            plural(count, "path", "paths"),
            if verbose { "" } else { " (use -v for details)" }
        );
    }
}

fn print_error_to<W: Write>(error: &LocalizeError, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
}
