//! Byte-level replacement of located spans with `$t()` calls.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use super::span::{Span, sort_for_rewrite};
use crate::{
    error::{LocalizeError, Result},
    utils::write_atomic,
};

/// The template expression that replaces a span.
pub fn format_replacement(key: &str) -> String {
    format!("{{{{ $t('{}') }}}}", key)
}

/// Replace every span in `content` with its translation call.
///
/// `spans` must be sorted by `start` in descending order and must not
/// overlap; later replacements are applied to the buffer produced by
/// earlier ones. Bytes outside the spans are copied unchanged.
pub fn rewrite(content: &[u8], spans: &[Span]) -> Result<Vec<u8>> {
    let mut content = content.to_vec();

    for span in spans {
        if span.start > span.end || span.end > content.len() {
            return Err(LocalizeError::InvalidSpan {
                start: span.start,
                end: span.end,
                len: content.len(),
            });
        }

        let replacement = format_replacement(&span.key);
        let mut next = Vec::with_capacity(content.len() - span.len() + replacement.len());
        next.extend_from_slice(&content[..span.start]);
        next.extend_from_slice(replacement.as_bytes());
        next.extend_from_slice(&content[span.end..]);
        content = next;
    }

    Ok(content)
}

/// Outcome of rewriting one file.
#[derive(Debug)]
pub struct FileRewrite {
    pub file_path: PathBuf,
    pub result: Result<usize>,
}

/// Rewrite every file that has spans, one writer per file.
///
/// Each file is re-read and every span's bytes are checked against the
/// text recorded at scan time before anything is written. A file that fails
/// any step is left untouched; the other files are still processed.
/// Results come back sorted by path.
pub fn apply_rewrites(spans: &[Span]) -> Vec<FileRewrite> {
    let mut by_file: BTreeMap<&str, Vec<Span>> = BTreeMap::new();
    for span in spans {
        by_file
            .entry(span.file_path.as_str())
            .or_default()
            .push(span.clone());
    }

    by_file
        .into_par_iter()
        .map(|(file_path, mut file_spans)| {
            sort_for_rewrite(&mut file_spans);
            let path = Path::new(file_path);
            FileRewrite {
                file_path: path.to_path_buf(),
                result: rewrite_file(path, &file_spans),
            }
        })
        .collect()
}

fn rewrite_file(path: &Path, spans: &[Span]) -> Result<usize> {
    let content = fs::read(path).map_err(|source| LocalizeError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    for span in spans {
        let current = content.get(span.start..span.end);
        if current != Some(span.text.as_bytes()) {
            return Err(LocalizeError::StaleSource {
                path: path.to_path_buf(),
                offset: span.start,
                expected: span.text.clone(),
            });
        }
    }

    let updated = rewrite(&content, spans)?;
    write_atomic(path, &updated).map_err(|source| LocalizeError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(file = %path.display(), replacements = spans.len(), "rewrote file");
    Ok(spans.len())
}
