//! Translation key generation.
//!
//! A key is `<path stem>.<slug>`, where the path stem is the file path
//! relative to the scanned directory (extension removed, lower-cased,
//! separators turned into dots) and the slug is a bounded kebab-case form
//! of the text. Repeated candidates get `-2`, `-3`, ... in first-seen order.

use std::{
    collections::{HashMap, HashSet},
    path::{self, Path},
    sync::LazyLock,
};

use regex::Regex;

use super::span::Span;

static NON_SLUG_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Run-scoped occurrence counter for candidate keys.
///
/// One counter must live for a whole run so that the same text found in
/// several places (or several files) yields distinct keys.
#[derive(Debug, Default, Clone)]
pub struct KeyCounter {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl KeyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `candidate` and return the final key.
    ///
    /// The first occurrence keeps the bare candidate, later ones get the
    /// occurrence number appended. A suffixed form that was already handed
    /// out (e.g. text `"Save 2"` after two `"Save"`) bumps the count again.
    pub fn claim(&mut self, candidate: String) -> String {
        let count = self.counts.entry(candidate.clone()).or_insert(0);
        *count += 1;

        let mut key = if *count == 1 {
            candidate.clone()
        } else {
            format!("{}-{}", candidate, count)
        };
        while self.issued.contains(&key) {
            *count += 1;
            key = format!("{}-{}", candidate, count);
        }

        self.issued.insert(key.clone());
        key
    }
}

/// Convert text to a lower-case, hyphen-delimited slug of at most `max_len` chars.
///
/// Over-long slugs are cut back to the last hyphen inside the limit when one
/// exists past the first character, otherwise hard-truncated.
///
/// # Examples
///
/// ```
/// use vue_localize::core::keys::slugify;
///
/// assert_eq!(slugify("Hello, World!", 30), "hello-world");
/// assert_eq!(slugify("hello world wonderful", 8), "hello");
/// assert_eq!(slugify("abcdefgh", 5), "abcde");
/// ```
pub fn slugify(text: &str, max_len: usize) -> String {
    let lowered: String = text.chars().map(lower_char).collect();
    let replaced = NON_SLUG_CHARS_REGEX.replace_all(&lowered, "-");
    let mut slug = replaced.trim_matches('-').to_string();

    // Slug is ASCII-only here, so byte and char positions agree.
    if slug.len() > max_len {
        slug.truncate(max_len);
        if let Some(last_hyphen) = slug.rfind('-') {
            if last_hyphen > 0 {
                slug.truncate(last_hyphen);
            }
        }
    }

    slug
}

/// Lower-case one char to exactly one char, so `İ` becomes `i` and not
/// `i` followed by a combining dot.
fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// True when `text` has nothing to slugify (only symbols or non-ASCII letters).
pub fn has_empty_slug(text: &str) -> bool {
    slugify(text, usize::MAX).is_empty()
}

/// Dotted, lower-cased form of `file_path` without its extension.
///
/// Uses the path relative to `base_path` when `file_path` lies under it and
/// falls back to the path as given otherwise.
pub fn path_stem(file_path: &Path, base_path: &Path) -> String {
    let relative = file_path.strip_prefix(base_path).unwrap_or(file_path);
    let without_extension = relative.with_extension("");

    without_extension
        .to_string_lossy()
        .chars()
        .map(|c| if path::is_separator(c) { '.' } else { lower_char(c) })
        .collect()
}

/// Build the final key for one occurrence of `text` in `file_path`.
pub fn generate_key(
    file_path: &Path,
    base_path: &Path,
    text: &str,
    max_slug_len: usize,
    counter: &mut KeyCounter,
) -> String {
    let candidate = format!(
        "{}.{}",
        path_stem(file_path, base_path),
        slugify(text, max_slug_len)
    );
    counter.claim(candidate)
}

/// Assign keys to already collected spans, in order.
///
/// This is the only place keys are created. It must run sequentially over
/// the full, ordered span list so that the same tree always gets the same keys.
pub fn assign_keys(
    spans: &mut [Span],
    base_path: &Path,
    max_slug_len: usize,
    counter: &mut KeyCounter,
) {
    for span in spans.iter_mut() {
        span.key = generate_key(
            Path::new(&span.file_path),
            base_path,
            &span.text,
            max_slug_len,
            counter,
        );
    }
}
