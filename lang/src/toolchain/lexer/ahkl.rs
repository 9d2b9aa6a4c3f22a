use super::char_class::is_space;
use super::document::Document;
use super::keywords::{Category, Keywords};
use super::scanner::{self, ScanContext};
use super::style::Style;
use super::style_context::StyleContext;
use crate::toolchain::diagnostics::{DiagnosticConsumer, NullDiagnosticConsumer};

/// A lexer as an editor host drives it.
///
/// The host configures the word lists, then asks for ranges of its document to be styled,
/// passing the style stored just before the range so the lexer can resume multi-line constructs.
pub trait Lexer {
    /// Replaces word list `index`. Returns true if the list changed and styled text is stale.
    fn word_list_set(&mut self, index: usize, contents: &str) -> bool;

    /// Styles `length` characters of `doc` from `start`, resuming from `init_style`.
    fn lex(
        &self,
        start: usize,
        length: usize,
        init_style: Style,
        doc: &mut dyn Document,
        diags: &mut dyn DiagnosticConsumer,
    );

    fn fold(&self, start: usize, length: usize, init_style: Style, doc: &mut dyn Document);

    fn lex_document(&self, doc: &mut dyn Document, diags: &mut dyn DiagnosticConsumer) {
        let length = doc.length();
        self.lex(0, length, Style::Neutral, doc, diags);
    }

    /// Styles again from the line containing `position` to the end of the document, the way a
    /// host does after an edit at `position`.
    fn relex_from(
        &self,
        position: usize,
        doc: &mut dyn Document,
        diags: &mut dyn DiagnosticConsumer,
    ) {
        let start = doc.line_start(doc.line_from_position(position));
        let init_style = if start > 0 { doc.style_at(start - 1) } else { Style::Neutral };
        let length = doc.length() - start;
        self.lex(start, length, init_style, doc, diags);
    }
}

/// The AutoHotkey-L lexer.
#[derive(Clone, Debug, Default)]
pub struct LexerAhkl {
    keywords: Keywords,
}

impl LexerAhkl {
    /// The name hosts register the lexer under.
    pub const NAME: &'static str = "ahkl";

    pub fn new() -> LexerAhkl {
        LexerAhkl::default()
    }

    /// Descriptions of the word lists, by configuration index.
    pub fn word_list_descriptions() -> [&'static str; 9] {
        Category::ALL.map(Category::description)
    }

    /// The lexer has no properties.
    pub fn property_names() -> &'static [&'static str] {
        &[]
    }

    pub fn set_word_list(&mut self, category: Category, contents: &str) -> bool {
        self.keywords.set(category, contents)
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Like [Lexer::lex], discarding diagnostics.
    pub fn lex_quietly(
        &self,
        start: usize,
        length: usize,
        init_style: Style,
        doc: &mut dyn Document,
    ) {
        self.lex(start, length, init_style, doc, &mut NullDiagnosticConsumer {});
    }

    /// Styles a range and returns the scan context left at its end.
    pub fn scan(
        &self,
        start: usize,
        length: usize,
        init_style: Style,
        doc: &mut dyn Document,
        diags: &mut dyn DiagnosticConsumer,
    ) -> ScanContext {
        let only_spaces = leading_space(doc, start);
        let mut sc = StyleContext::new(doc, start, length, init_style);
        let context = ScanContext::seeded(init_style, only_spaces);
        scanner::scan(&mut sc, context, &self.keywords, diags)
    }
}

impl Lexer for LexerAhkl {
    fn word_list_set(&mut self, index: usize, contents: &str) -> bool {
        match Category::from_index(index) {
            Some(category) => self.set_word_list(category, contents),
            None => {
                tracing::warn!(index, "ignoring word list with out of range index");
                false
            }
        }
    }

    fn lex(
        &self,
        start: usize,
        length: usize,
        init_style: Style,
        doc: &mut dyn Document,
        diags: &mut dyn DiagnosticConsumer,
    ) {
        tracing::trace!(start, length, ?init_style, "lexing");
        if length == 0 {
            return;
        }
        self.scan(start, length, init_style, doc, diags);
    }

    fn fold(&self, _start: usize, _length: usize, _init_style: Style, _doc: &mut dyn Document) {}
}

// True if only whitespace precedes `position` on its line.
fn leading_space(doc: &dyn Document, position: usize) -> bool {
    let line_start = doc.line_start(doc.line_from_position(position));
    (line_start..position).all(|i| is_space(doc.char_at(i)))
}
