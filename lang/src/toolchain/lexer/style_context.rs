use super::document::Document;
use super::style::{one_based, Style};
use crate::toolchain::diagnostics::DiagnosticLocation;

/// Forward-only cursor over a range of a [Document] that colours the text behind it.
///
/// The cursor keeps one pending span, from `style_start` up to the current position, labelled
/// with the current state. [StyleContext::set_state] writes the pending span to the document and
/// starts a new one at the cursor. [StyleContext::change_state] relabels the pending span
/// without writing anything.
///
/// When the range reaches the end of the document the cursor visits one extra position past the
/// last character, reading `'\0'` and reporting the end of a line there, so that whatever token is
/// pending at the end of the text gets closed like any other.
pub struct StyleContext<'d> {
    doc: &'d mut dyn Document,
    current_pos: usize,
    end_pos: usize,
    style_start: usize,
    state: Style,

    ch_prev: char,
    ch: char,
    ch_next: char,
    at_line_start: bool,
    at_line_end: bool,
}

impl<'d> StyleContext<'d> {
    pub fn new(
        doc: &'d mut dyn Document,
        start: usize,
        length: usize,
        init_style: Style,
    ) -> StyleContext<'d> {
        let doc_length = doc.length();
        let start = start.min(doc_length);
        let mut end_pos = start.saturating_add(length).min(doc_length);
        if end_pos == doc_length && length > 0 {
            end_pos += 1;
        }

        let at_line_start = doc.line_start(doc.line_from_position(start)) == start;
        let ch_prev = if start > 0 { doc.char_at(start - 1) } else { '\0' };
        let ch = doc.char_at(start);
        let ch_next = doc.char_at(start + 1);

        let mut context = StyleContext {
            doc,
            current_pos: start,
            end_pos,
            style_start: start,
            state: init_style,
            ch_prev,
            ch,
            ch_next,
            at_line_start,
            at_line_end: false,
        };
        context.at_line_end = context.compute_at_line_end();
        context
    }

    pub fn more(&self) -> bool {
        self.current_pos < self.end_pos
    }

    pub fn forward(&mut self) {
        if self.current_pos < self.end_pos {
            self.at_line_start = self.at_line_end;
            self.ch_prev = self.ch;
            self.current_pos += 1;
            self.ch = self.ch_next;
            self.ch_next = self.doc.char_at(self.current_pos + 1);
            self.at_line_end = self.compute_at_line_end();
        } else {
            self.at_line_start = false;
            self.ch_prev = ' ';
            self.ch = ' ';
            self.ch_next = ' ';
            self.at_line_end = true;
        }
    }

    pub fn forward_by(&mut self, count: usize) {
        for _ in 0..count {
            self.forward();
        }
    }

    /// Closes the pending span and opens a new one with `state` at the cursor.
    pub fn set_state(&mut self, state: Style) {
        self.colour_to(self.current_pos);
        self.style_start = self.current_pos;
        self.state = state;
    }

    /// Relabels the pending span.
    pub fn change_state(&mut self, state: Style) {
        self.state = state;
    }

    pub fn forward_set_state(&mut self, state: Style) {
        self.forward();
        self.set_state(state);
    }

    /// Writes the pending span. Must be called once the scan loop ends.
    pub fn complete(&mut self) {
        self.colour_to(self.current_pos);
        self.style_start = self.current_pos;
    }

    pub fn state(&self) -> Style {
        self.state
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn ch_prev(&self) -> char {
        self.ch_prev
    }

    pub fn ch_next(&self) -> char {
        self.ch_next
    }

    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn at_line_end(&self) -> bool {
        self.at_line_end
    }

    pub fn position(&self) -> usize {
        self.current_pos
    }

    pub fn span_start(&self) -> usize {
        self.style_start
    }

    pub fn match_char(&self, c: char) -> bool {
        self.ch == c
    }

    pub fn match_pair(&self, first: char, second: char) -> bool {
        self.ch == first && self.ch_next == second
    }

    /// True if the text at the cursor starts with `s`.
    pub fn match_str(&self, s: &str) -> bool {
        s.chars().enumerate().all(|(i, c)| self.doc.char_at(self.current_pos + i) == c)
    }

    /// The lowercased text of the pending span.
    pub fn current_lowered(&self) -> String {
        let end = self.current_pos.min(self.doc.length());
        (self.style_start..end).flat_map(|i| self.doc.char_at(i).to_lowercase()).collect()
    }

    /// Translates a position into a location for diagnostics.
    pub fn location(&self, position: usize) -> DiagnosticLocation {
        let line = self.doc.line_from_position(position);
        let column = position - self.doc.line_start(line);
        DiagnosticLocation {
            file_name: self.doc.name().to_string(),
            line_number: one_based(line),
            column_number: one_based(column),
            position,
        }
    }

    fn colour_to(&mut self, end: usize) {
        let end = end.min(self.doc.length());
        if end > self.style_start {
            self.doc.set_styles(self.style_start..end, self.state);
        }
    }

    fn compute_at_line_end(&self) -> bool {
        (self.ch == '\r' && self.ch_next != '\n')
            || self.ch == '\n'
            || self.current_pos >= self.doc.length()
    }
}
