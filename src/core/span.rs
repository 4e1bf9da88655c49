//! A located piece of literal template text.

/// One literal text region found inside a template.
///
/// `start` and `end` are byte offsets into the file content the span was
/// located in. They stay valid only against that original buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub file_path: String,
    /// 1-based line of `start`.
    pub line: usize,
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// Empty until key assignment runs.
    pub key: String,
}

impl Span {
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        text: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            text: text.into(),
            start,
            end,
            key: String::new(),
        }
    }

    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }

    /// Length of the replaced region in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Order spans by start offset, highest first, as required by
/// [`rewrite`](super::rewrite::rewrite).
pub fn sort_for_rewrite(spans: &mut [Span]) {
    spans.sort_by(|a, b| b.start.cmp(&a.start));
}
