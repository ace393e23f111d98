//! XML documentation comment scanning
//!
//! Doc comments are scanned in place over the original source text so every
//! tag keeps its exact byte span, which the rewriter needs for splicing.
//! A DOM style XML parser cannot provide that because the `///` markers sit
//! in the middle of the XML payload. The scanner is therefore hand rolled
//! and tolerant: anything that does not scan as markup is treated as plain
//! text, and structural problems are collected as defects instead of
//! aborting the scan.

use std::ops::Range;

use tree_sitter::Node;

use crate::syntax::position::byte_to_line_col;

/// How a doc comment block is written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocStyle {
    /// One or more consecutive `///` line comments.
    TripleSlash,
    /// A single `/** ... */` block comment.
    MultiLine,
}

/// One tag occurrence inside a doc comment, in document order.
#[derive(Debug, Clone)]
pub struct DocTag {
    pub name: String,
    /// Attribute name/value pairs in source order.
    pub attributes: Vec<(String, String)>,
    /// Byte span of the whole element, from `<` through the final `>`.
    /// For an unclosed tag this covers the opening tag only.
    pub span: Range<usize>,
    /// Byte span between the opening and closing tags. None for
    /// self-closing and unclosed tags.
    pub inner: Option<Range<usize>>,
    pub self_closing: bool,
    /// 1-based position of the `<` in the file.
    pub line: u32,
    pub column: u32,
}

impl DocTag {
    /// Value of the given attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Raw source text between the opening and closing tags.
    pub fn inner_text<'a>(&self, source: &'a str) -> Option<&'a str> {
        self.inner.clone().map(|inner| &source[inner])
    }
}

/// A structural problem found while scanning a doc comment.
#[derive(Debug, Clone)]
pub struct DocDefect {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

/// A scanned doc comment block.
#[derive(Debug, Clone)]
pub struct DocComment {
    pub style: DocStyle,
    /// Byte span of the whole block in the file.
    pub span: Range<usize>,
    /// Tag occurrences in document order.
    pub tags: Vec<DocTag>,
    pub defects: Vec<DocDefect>,
}

impl DocComment {
    /// True when `outer` contains `tag` at any depth.
    fn contains(&self, outer: &DocTag, tag: &DocTag) -> bool {
        match &outer.inner {
            Some(inner) => tag.span.start >= inner.start && tag.span.end <= inner.end,
            None => false,
        }
    }

    /// True when `tag` contains at least one other tag.
    pub fn has_nested_tags(&self, tag: &DocTag) -> bool {
        self.tags.iter().any(|other| self.contains(tag, other))
    }

    /// Indices of tags not contained in any other tag of this block.
    pub fn top_level_tags(&self) -> Vec<usize> {
        (0..self.tags.len())
            .filter(|&index| {
                !self
                    .tags
                    .iter()
                    .enumerate()
                    .any(|(other, outer)| other != index && self.contains(outer, &self.tags[index]))
            })
            .collect()
    }

    /// Indices of tags nested directly inside the tag at `index`.
    pub fn child_tags(&self, index: usize) -> Vec<usize> {
        let parent = &self.tags[index];
        (0..self.tags.len())
            .filter(|&candidate| candidate != index && self.contains(parent, &self.tags[candidate]))
            .filter(|&candidate| {
                !(0..self.tags.len()).any(|middle| {
                    middle != candidate
                        && middle != index
                        && self.contains(parent, &self.tags[middle])
                        && self.contains(&self.tags[middle], &self.tags[candidate])
                })
            })
            .collect()
    }

    /// True when the element has text beyond comment markers and whitespace,
    /// or contains nested tags. Self-closing and unclosed tags never do.
    pub fn has_meaningful_content(&self, tag: &DocTag, source: &str) -> bool {
        if self.has_nested_tags(tag) {
            return true;
        }
        match tag.inner_text(source) {
            Some(text) => !strip_doc_exterior(text).trim().is_empty(),
            None => false,
        }
    }
}

/// Removes the per-line comment exterior from doc comment interior text:
/// leading whitespace plus `///` (or a leading `*` inside `/** */` blocks)
/// and one following space. Lines without a marker are kept as they are.
pub fn strip_doc_exterior(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let mut lines = Vec::new();

    for line in normalized.split('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("///") {
            lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
        } else if trimmed.starts_with('*') && !trimmed.starts_with("*/") {
            let rest = &trimmed[1..];
            lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
        } else {
            lines.push(line.to_string());
        }
    }

    lines.join("\n")
}

/// Collapses all whitespace runs to single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Scans the doc comment block made of the given comment node spans.
/// Spans must be in document order; the scan covers the bytes from the
/// first span's start to the last span's end.
pub fn parse_doc_block(source: &str, comment_spans: &[Range<usize>], style: DocStyle) -> DocComment {
    let span = match (comment_spans.first(), comment_spans.last()) {
        (Some(first), Some(last)) => first.start..last.end,
        _ => 0..0,
    };

    let (events, scan_defects) = BlockScanner::new(source, &span).scan();
    let (tags, mut defects) = build_tags(events, source);

    for (message, offset) in scan_defects {
        let (line, column) = byte_to_line_col(offset, source);
        defects.push(DocDefect {
            message,
            line,
            column,
        });
    }

    // a <param> or <typeparam> that names nothing is a structural defect;
    // the name checks skip such tags and rely on this
    for tag in &tags {
        if !matches!(tag.name.as_str(), "param" | "typeparam") {
            continue;
        }
        let named = tag
            .attribute("name")
            .is_some_and(|name| !name.trim().is_empty());
        if !named {
            defects.push(DocDefect {
                message: format!("tag <{}> has no name attribute", tag.name),
                line: tag.line,
                column: tag.column,
            });
        }
    }

    defects.sort_by_key(|defect| (defect.line, defect.column));

    DocComment {
        style,
        span,
        tags,
        defects,
    }
}

/// The doc comment block attached to `node`: the closest run of `///`
/// comments on consecutive lines directly among its preceding siblings,
/// or a single `/** */` comment.
pub fn doc_block_for_node(node: Node, source: &str) -> Option<DocComment> {
    let mut spans: Vec<Range<usize>> = Vec::new();
    let mut expected_row: Option<usize> = None;
    let mut current = node;

    while let Some(prev) = current.prev_sibling() {
        if prev.kind() != "comment" {
            break;
        }
        let text = prev.utf8_text(source.as_bytes()).unwrap_or("");
        let trimmed = text.trim_start();
        if trimmed.starts_with("///") {
            let row = prev.start_position().row;
            if let Some(expected) = expected_row {
                if row + 1 != expected {
                    // a blank line splits the block, keep the closest run
                    break;
                }
            }
            spans.push(prev.start_byte()..prev.end_byte());
            expected_row = Some(row);
        } else if trimmed.starts_with("/**") && spans.is_empty() {
            return Some(parse_doc_block(
                source,
                &[prev.start_byte()..prev.end_byte()],
                DocStyle::MultiLine,
            ));
        } else {
            break;
        }
        current = prev;
    }

    if spans.is_empty() {
        return None;
    }
    spans.reverse();
    Some(parse_doc_block(source, &spans, DocStyle::TripleSlash))
}

/// Collects and scans every doc comment block in the tree, attached to a
/// declaration or not. The rewriter works from this list.
pub fn collect_doc_blocks(root: Node, source: &str) -> Vec<DocComment> {
    let mut comments = Vec::new();
    collect_comment_nodes(root, source, &mut comments);

    let mut blocks = Vec::new();
    let mut run: Vec<Range<usize>> = Vec::new();
    let mut last_row = 0usize;

    for comment in comments {
        if comment.multi_line_doc {
            flush_run(&mut run, source, &mut blocks);
            blocks.push(parse_doc_block(
                source,
                &[comment.span.clone()],
                DocStyle::MultiLine,
            ));
            continue;
        }
        if !comment.doc_line {
            flush_run(&mut run, source, &mut blocks);
            continue;
        }
        if !run.is_empty() && comment.row != last_row + 1 {
            flush_run(&mut run, source, &mut blocks);
        }
        run.push(comment.span.clone());
        last_row = comment.row;
    }
    flush_run(&mut run, source, &mut blocks);

    blocks
}

struct CommentInfo {
    span: Range<usize>,
    row: usize,
    doc_line: bool,
    multi_line_doc: bool,
}

fn collect_comment_nodes(node: Node, source: &str, out: &mut Vec<CommentInfo>) {
    if node.kind() == "comment" {
        let text = node.utf8_text(source.as_bytes()).unwrap_or("");
        let trimmed = text.trim_start();
        out.push(CommentInfo {
            span: node.start_byte()..node.end_byte(),
            row: node.start_position().row,
            doc_line: trimmed.starts_with("///"),
            multi_line_doc: trimmed.starts_with("/**"),
        });
        return;
    }
    for child in node.children(&mut node.walk()) {
        collect_comment_nodes(child, source, out);
    }
}

fn flush_run(run: &mut Vec<Range<usize>>, source: &str, blocks: &mut Vec<DocComment>) {
    if !run.is_empty() {
        let spans = std::mem::take(run);
        blocks.push(parse_doc_block(source, &spans, DocStyle::TripleSlash));
    }
}

enum RawEvent {
    Open {
        name: String,
        attributes: Vec<(String, String)>,
        span: Range<usize>,
        self_closing: bool,
    },
    Close {
        name: String,
        span: Range<usize>,
    },
}

/// Byte scanner over one doc comment block. Works on bytes because all
/// markup is ASCII; multi-byte UTF-8 content never contains ASCII bytes,
/// so spans stay correct.
struct BlockScanner<'a> {
    source: &'a [u8],
    pos: usize,
    end: usize,
    events: Vec<RawEvent>,
    defects: Vec<(String, usize)>,
}

impl<'a> BlockScanner<'a> {
    fn new(source: &'a str, span: &Range<usize>) -> Self {
        BlockScanner {
            source: source.as_bytes(),
            pos: span.start,
            end: span.end,
            events: Vec::new(),
            defects: Vec::new(),
        }
    }

    fn scan(mut self) -> (Vec<RawEvent>, Vec<(String, usize)>) {
        while self.pos < self.end {
            if self.source[self.pos] == b'<' {
                self.scan_angle();
            } else {
                self.pos += 1;
            }
        }
        (self.events, self.defects)
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        if index < self.end {
            Some(self.source[index])
        } else {
            None
        }
    }

    fn rest_starts_with(&self, index: usize, needle: &[u8]) -> bool {
        index <= self.end && self.source[index..self.end].starts_with(needle)
    }

    fn find_bytes(&self, needle: &[u8], from: usize) -> Option<usize> {
        if from > self.end {
            return None;
        }
        self.source[from..self.end]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|found| from + found)
    }

    fn find_byte(&self, needle: u8, from: usize) -> Option<usize> {
        if from > self.end {
            return None;
        }
        self.source[from..self.end]
            .iter()
            .position(|&b| b == needle)
            .map(|found| from + found)
    }

    /// On a malformed tag, resync after the next `>` so one mistake
    /// produces one defect instead of a cascade.
    fn recover(&mut self, start: usize) {
        self.pos = match self.find_byte(b'>', start + 1) {
            Some(found) => found + 1,
            None => self.end,
        };
    }

    fn scan_angle(&mut self) {
        let start = self.pos;

        if self.rest_starts_with(start, b"<!--") {
            match self.find_bytes(b"-->", start + 4) {
                Some(found) => self.pos = found + 3,
                None => {
                    self.defects
                        .push(("unterminated XML comment".to_string(), start));
                    self.pos = self.end;
                }
            }
            return;
        }

        // declarations, CDATA and processing instructions are skipped
        if self.rest_starts_with(start, b"<!") || self.rest_starts_with(start, b"<?") {
            match self.find_byte(b'>', start + 2) {
                Some(found) => self.pos = found + 1,
                None => {
                    self.defects.push(("unterminated markup".to_string(), start));
                    self.pos = self.end;
                }
            }
            return;
        }

        if self.rest_starts_with(start, b"</") {
            self.scan_close_tag(start);
            return;
        }

        self.scan_open_tag(start);
    }

    fn scan_open_tag(&mut self, start: usize) {
        let mut i = start + 1;
        let name = self.read_name(&mut i);
        if name.is_empty() {
            // a bare '<' in text, not markup
            self.pos = start + 1;
            return;
        }

        let mut attributes = Vec::new();
        loop {
            self.skip_tag_whitespace(&mut i);
            let Some(byte) = self.byte_at(i) else {
                self.defects
                    .push((format!("unterminated tag <{name}>"), start));
                self.pos = self.end;
                return;
            };

            match byte {
                b'>' => {
                    self.events.push(RawEvent::Open {
                        name,
                        attributes,
                        span: start..i + 1,
                        self_closing: false,
                    });
                    self.pos = i + 1;
                    return;
                }
                b'/' if self.byte_at(i + 1) == Some(b'>') => {
                    self.events.push(RawEvent::Open {
                        name,
                        attributes,
                        span: start..i + 2,
                        self_closing: true,
                    });
                    self.pos = i + 2;
                    return;
                }
                _ => {
                    let attr_start = i;
                    let attr = self.read_name(&mut i);
                    if attr.is_empty() {
                        self.defects
                            .push((format!("unexpected character in tag <{name}>"), attr_start));
                        self.recover(start);
                        return;
                    }
                    self.skip_tag_whitespace(&mut i);
                    if self.byte_at(i) != Some(b'=') {
                        self.defects.push((
                            format!("attribute '{attr}' in <{name}> has no value"),
                            attr_start,
                        ));
                        self.recover(start);
                        return;
                    }
                    i += 1;
                    self.skip_tag_whitespace(&mut i);
                    let quote = match self.byte_at(i) {
                        Some(q @ (b'"' | b'\'')) => q,
                        _ => {
                            self.defects.push((
                                format!("attribute '{attr}' in <{name}> has an unquoted value"),
                                attr_start,
                            ));
                            self.recover(start);
                            return;
                        }
                    };
                    i += 1;
                    let value_start = i;
                    match self.find_byte(quote, i) {
                        Some(close) => {
                            let value = String::from_utf8_lossy(&self.source[value_start..close])
                                .into_owned();
                            attributes.push((attr, value));
                            i = close + 1;
                        }
                        None => {
                            self.defects.push((
                                format!("unterminated value for attribute '{attr}' in <{name}>"),
                                attr_start,
                            ));
                            self.recover(start);
                            return;
                        }
                    }
                }
            }
        }
    }

    fn scan_close_tag(&mut self, start: usize) {
        let mut i = start + 2;
        self.skip_tag_whitespace(&mut i);
        let name = self.read_name(&mut i);
        if name.is_empty() {
            self.defects
                .push(("malformed closing tag".to_string(), start));
            self.recover(start);
            return;
        }
        self.skip_tag_whitespace(&mut i);
        if self.byte_at(i) == Some(b'>') {
            self.events.push(RawEvent::Close {
                name,
                span: start..i + 1,
            });
            self.pos = i + 1;
        } else {
            self.defects
                .push((format!("malformed closing tag </{name}>"), start));
            self.recover(start);
        }
    }

    fn read_name(&mut self, i: &mut usize) -> String {
        let start = *i;
        if matches!(self.byte_at(*i), Some(b) if b.is_ascii_alphabetic() || b == b'_') {
            *i += 1;
            while let Some(b) = self.byte_at(*i) {
                if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b':') {
                    *i += 1;
                } else {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&self.source[start..*i]).into_owned()
    }

    /// Skips whitespace inside a tag. A tag may continue on the next
    /// comment line, so newlines followed by indentation and the line
    /// marker (`///` or `*`) count as whitespace here.
    fn skip_tag_whitespace(&mut self, i: &mut usize) {
        loop {
            while matches!(self.byte_at(*i), Some(b' ') | Some(b'\t')) {
                *i += 1;
            }
            if matches!(self.byte_at(*i), Some(b'\r') | Some(b'\n')) {
                while matches!(self.byte_at(*i), Some(b'\r') | Some(b'\n')) {
                    *i += 1;
                }
                while matches!(self.byte_at(*i), Some(b' ') | Some(b'\t')) {
                    *i += 1;
                }
                if self.rest_starts_with(*i, b"///") {
                    *i += 3;
                } else if self.byte_at(*i) == Some(b'*') && self.byte_at(*i + 1) != Some(b'/') {
                    *i += 1;
                }
                continue;
            }
            break;
        }
    }
}

fn build_tags(events: Vec<RawEvent>, source: &str) -> (Vec<DocTag>, Vec<DocDefect>) {
    let mut tags: Vec<DocTag> = Vec::new();
    let mut defects: Vec<DocDefect> = Vec::new();
    let mut open_stack: Vec<usize> = Vec::new();

    for event in events {
        match event {
            RawEvent::Open {
                name,
                attributes,
                span,
                self_closing,
            } => {
                let (line, column) = byte_to_line_col(span.start, source);
                let index = tags.len();
                tags.push(DocTag {
                    name,
                    attributes,
                    span,
                    inner: None,
                    self_closing,
                    line,
                    column,
                });
                if !self_closing {
                    open_stack.push(index);
                }
            }
            RawEvent::Close { name, span } => {
                match open_stack.iter().rposition(|&idx| tags[idx].name == name) {
                    Some(position) => {
                        // opens above the match never got their closing tag
                        for &abandoned in &open_stack[position + 1..] {
                            defects.push(unclosed_defect(&tags[abandoned]));
                        }
                        let index = open_stack[position];
                        open_stack.truncate(position);
                        let inner_start = tags[index].span.end;
                        tags[index].inner = Some(inner_start..span.start);
                        tags[index].span = tags[index].span.start..span.end;
                    }
                    None => {
                        let (line, column) = byte_to_line_col(span.start, source);
                        defects.push(DocDefect {
                            message: format!("closing tag </{name}> without matching opening tag"),
                            line,
                            column,
                        });
                    }
                }
            }
        }
    }

    for &index in &open_stack {
        defects.push(unclosed_defect(&tags[index]));
    }

    (tags, defects)
}

fn unclosed_defect(tag: &DocTag) -> DocDefect {
    DocDefect {
        message: format!("unclosed tag <{}>", tag.name),
        line: tag.line,
        column: tag.column,
    }
}

#[cfg(test)]
#[path = "doc_comment_tests.rs"]
mod tests;
