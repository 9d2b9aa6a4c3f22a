use std::ops::Range;

use bstr::ByteSlice;

use super::style::{one_based, Span, Style};
use crate::toolchain::source::SourceBuffer;

/// The host's view of a text buffer and its per-character style table.
///
/// Positions are character offsets. Reading past the end returns `'\0'` instead of failing, the
/// lexer relies on that for its lookahead.
pub trait Document {
    fn length(&self) -> usize;

    fn char_at(&self, position: usize) -> char;

    fn style_at(&self, position: usize) -> Style;

    /// Writes `style` for every character in `range`.
    fn set_styles(&mut self, range: Range<usize>, style: Style);

    /// Zero-based line containing `position`. Positions past the end belong to the last line.
    fn line_from_position(&self, position: usize) -> usize;

    /// Position of the first character of a zero-based line.
    fn line_start(&self, line: usize) -> usize;

    fn name(&self) -> &str {
        ""
    }
}

/// An in-memory [Document] that owns its text and style table.
pub struct StyledDocument {
    name: String,
    text: String,
    // Byte offset of every character, plus one trailing entry for the end of the text.
    offsets: Vec<usize>,
    chars: Vec<char>,
    styles: Vec<Style>,
    line_starts: Vec<usize>,
}

impl StyledDocument {
    pub fn new(name: &str, text: &str) -> StyledDocument {
        let mut doc = StyledDocument {
            name: name.to_string(),
            text: text.to_string(),
            offsets: Vec::new(),
            chars: Vec::new(),
            styles: Vec::new(),
            line_starts: Vec::new(),
        };
        doc.reindex();
        doc.styles = vec![Style::Neutral; doc.chars.len()];
        doc
    }

    /// Decodes a source buffer, replacing invalid utf-8 sequences with U+FFFD.
    pub fn from_source(source: &SourceBuffer) -> StyledDocument {
        let text: String = source.bytes().chars().collect();
        StyledDocument::new(source.file_name(), &text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// The text of a range of characters.
    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.text[self.offsets[range.start]..self.offsets[range.end]]
    }

    /// Splits the document into maximal runs of equally styled characters.
    pub fn spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        let mut start = 0;
        while start < self.styles.len() {
            let style = self.styles[start];
            let end = self.styles[start..]
                .iter()
                .position(|s| *s != style)
                .map_or(self.styles.len(), |n| start + n);
            let line = self.line_from_position(start);
            spans.push(Span::new(
                style,
                self.slice(start..end),
                start,
                one_based(line),
                one_based(start - self.line_starts[line]),
            ));
            start = end;
        }
        spans
    }

    /// Replaces a range of characters. Inserted characters start out [Style::Neutral] and the
    /// styles of the characters after the edit move with them.
    pub fn replace(&mut self, range: Range<usize>, replacement: &str) {
        let bytes = self.offsets[range.start]..self.offsets[range.end];
        self.text.replace_range(bytes, replacement);
        let inserted = replacement.chars().count();
        self.styles.splice(range, std::iter::repeat(Style::Neutral).take(inserted));
        self.reindex();
        debug_assert_eq!(self.styles.len(), self.chars.len());
    }

    fn reindex(&mut self) {
        self.offsets.clear();
        self.chars.clear();
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut iter = self.text.char_indices().peekable();
        while let Some((offset, c)) = iter.next() {
            self.offsets.push(offset);
            self.chars.push(c);
            // A lone '\r' ends a line as well as '\n' does.
            let ends_line = c == '\n' || (c == '\r' && !matches!(iter.peek(), Some((_, '\n'))));
            if ends_line {
                self.line_starts.push(self.chars.len());
            }
        }
        self.offsets.push(self.text.len());
    }
}

impl Document for StyledDocument {
    fn length(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, position: usize) -> char {
        self.chars.get(position).copied().unwrap_or('\0')
    }

    fn style_at(&self, position: usize) -> Style {
        self.styles.get(position).copied().unwrap_or_default()
    }

    fn set_styles(&mut self, range: Range<usize>, style: Style) {
        let end = range.end.min(self.styles.len());
        let start = range.start.min(end);
        self.styles[start..end].fill(style);
    }

    fn line_from_position(&self, position: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= position) - 1
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts.get(line).copied().unwrap_or(self.chars.len())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
