//! Dropping located spans that are not translatable content.

use std::collections::HashSet;

use super::span::Span;
use crate::utils::{contains_alphanumeric, is_whitespace_only};

/// Decides which located spans are real text.
///
/// Whitespace-only spans are always dropped. Symbol-only spans (no letter or
/// digit anywhere) and texts listed in `ignoreTexts` are dropped on request.
#[derive(Debug, Clone, Default)]
pub struct SpanFilter {
    skip_symbol_only: bool,
    ignore_texts: HashSet<String>,
}

impl SpanFilter {
    pub fn new(skip_symbol_only: bool, ignore_texts: impl IntoIterator<Item = String>) -> Self {
        Self {
            skip_symbol_only,
            ignore_texts: ignore_texts.into_iter().collect(),
        }
    }

    pub fn accepts(&self, text: &str) -> bool {
        if is_whitespace_only(text) {
            return false;
        }
        if self.skip_symbol_only && !contains_alphanumeric(text) {
            return false;
        }
        !self.ignore_texts.contains(text.trim())
    }

    pub fn apply(&self, spans: Vec<Span>) -> Vec<Span> {
        spans
            .into_iter()
            .filter(|span| self.accepts(&span.text))
            .collect()
    }
}
