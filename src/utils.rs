//! Common utility functions shared across the codebase.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

/// Checks if the text is empty or made of whitespace only.
///
/// # Examples
///
/// ```
/// use vue_localize::utils::is_whitespace_only;
///
/// assert!(is_whitespace_only("  \n\t "));
/// assert!(is_whitespace_only(""));
/// assert!(!is_whitespace_only(" a "));
/// ```
pub fn is_whitespace_only(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Checks if the text contains at least one Unicode alphanumeric character.
///
/// Returns false for empty strings, pure symbols and pure punctuation.
///
/// # Examples
///
/// ```
/// use vue_localize::utils::contains_alphanumeric;
///
/// assert!(contains_alphanumeric("Hello"));
/// assert!(contains_alphanumeric("你好"));
/// assert!(contains_alphanumeric("42"));
/// assert!(!contains_alphanumeric("---"));
/// assert!(!contains_alphanumeric("→ ©"));
/// assert!(!contains_alphanumeric(""));
/// ```
pub fn contains_alphanumeric(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// Replace the content of `path` as a whole.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers never see a partial file. Permissions of
/// an existing file are carried over. Missing parent directories are created.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
