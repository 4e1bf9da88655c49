//! Locate literal text inside the `<template>` of a Vue single-file component.
//!
//! The file is parsed with the tree-sitter HTML grammar. Only `text` nodes
//! below the first top-level `<template>` element are considered. Mustache
//! interpolations (`{{ ... }}`) inside a text node are expressions, not
//! literal text, so each node is split around them; this is also why
//! already rewritten `{{ $t('...') }}` calls are never found again.

use std::str;

use tree_sitter::{Node, Parser};

use crate::{
    core::span::Span,
    error::{LocalizeError, Result},
};

const TEMPLATE_TAG: &str = "template";
const INTERPOLATION_OPEN: &[u8] = b"{{";
const INTERPOLATION_CLOSE: &[u8] = b"}}";

/// Find the literal text spans of one file.
///
/// A file without a template region yields no spans. Whitespace-only
/// segments are returned unchanged so that filtering can decide about them;
/// every other segment is narrowed to exclude surrounding whitespace.
pub fn locate_spans(file_path: &str, content: &[u8]) -> Result<Vec<Span>> {
    let parse_error = |reason: String| LocalizeError::Parse {
        path: file_path.into(),
        reason,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_html::LANGUAGE.into())
        .map_err(|e| parse_error(e.to_string()))?;
    let tree = parser
        .parse(content, None)
        .ok_or_else(|| parse_error("parser produced no syntax tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        tracing::debug!(file = file_path, "syntax errors found, skipping affected regions");
    }

    let Some(template) = find_template(root, content) else {
        return Ok(Vec::new());
    };

    let mut text_nodes = Vec::new();
    collect_text_nodes(template, &mut text_nodes);

    let line_index = build_line_index(content);
    let mut spans = Vec::new();

    for node in text_nodes {
        for (start, end) in literal_segments(content, node.start_byte(), node.end_byte()) {
            let Ok(raw) = str::from_utf8(&content[start..end]) else {
                tracing::warn!(file = file_path, offset = start, "skipping text that is not valid UTF-8");
                continue;
            };

            let trimmed = raw.trim();
            let span = if trimmed.is_empty() {
                Span::new(file_path, offset_to_line(&line_index, start), raw, start, end)
            } else {
                let lead = raw.len() - raw.trim_start().len();
                let trimmed_start = start + lead;
                Span::new(
                    file_path,
                    offset_to_line(&line_index, trimmed_start),
                    trimmed,
                    trimmed_start,
                    trimmed_start + trimmed.len(),
                )
            };
            spans.push(span);
        }
    }

    Ok(spans)
}

/// The first top-level `<template>` element.
fn find_template<'tree>(root: Node<'tree>, content: &[u8]) -> Option<Node<'tree>> {
    let mut cursor = root.walk();
    root.named_children(&mut cursor).find(|child| {
        child.kind() == "element"
            && tag_name(*child, content).is_some_and(|name| name.eq_ignore_ascii_case(TEMPLATE_TAG))
    })
}

fn tag_name<'a>(element: Node<'_>, content: &'a [u8]) -> Option<&'a str> {
    let mut cursor = element.walk();
    let start_tag = element
        .named_children(&mut cursor)
        .find(|child| child.kind() == "start_tag")?;

    let mut cursor = start_tag.walk();
    let name = start_tag
        .named_children(&mut cursor)
        .find(|child| child.kind() == "tag_name")?;
    name.utf8_text(content).ok()
}

/// Text nodes in document order. Script, style and error subtrees are skipped.
fn collect_text_nodes<'tree>(node: Node<'tree>, out: &mut Vec<Node<'tree>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.is_error() {
            continue;
        }
        match child.kind() {
            "text" => out.push(child),
            "script_element" | "style_element" => {}
            _ => collect_text_nodes(child, out),
        }
    }
}

/// Byte ranges of `content[start..end]` that lie outside `{{ ... }}`.
///
/// An unterminated `{{` hides the rest of the range.
fn literal_segments(content: &[u8], start: usize, end: usize) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut pos = start;

    while pos < end {
        let Some(open) = find_bytes(&content[pos..end], INTERPOLATION_OPEN) else {
            segments.push((pos, end));
            break;
        };

        let open = pos + open;
        if open > pos {
            segments.push((pos, open));
        }

        let after_open = open + INTERPOLATION_OPEN.len();
        match find_bytes(&content[after_open..end], INTERPOLATION_CLOSE) {
            Some(close) => pos = after_open + close + INTERPOLATION_CLOSE.len(),
            None => break,
        }
    }

    segments
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &[u8]) -> Vec<usize> {
    let mut offsets = vec![0];
    offsets.extend(
        content
            .iter()
            .enumerate()
            .filter(|(_, byte)| **byte == b'\n')
            .map(|(i, _)| i + 1),
    );
    offsets
}

/// 1-based line number of a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
