//! An AutoHotkey-L lexer, which assigns a [Style] to every character of a script.
//!
//! The lexer works the way editor components expect: it scans a range of a host-owned
//! [Document] once, left to right, and writes one style per character into the document's style
//! table. Any range starting at a line boundary can be lexed again on its own, given the style
//! stored on the character before it, which is what makes incremental re-lexing after edits
//! possible. [LexerAhkl] is the entry point; [StyledDocument] is a self-contained document for
//! hosts without a buffer of their own.
//!
//! Recognizing commands, functions, keys and the like depends on nine word lists loaded by the
//! host (see [Category]). The lexer itself knows no AutoHotkey vocabulary.
//!

pub mod char_class;
pub mod document;
pub mod keywords;
pub mod scanner;
pub mod style;

mod ahkl;
mod style_context;

pub use ahkl::{Lexer, LexerAhkl};
pub use document::{Document, StyledDocument};
pub use keywords::{Category, Keywords, WordList};
pub use scanner::ScanContext;
pub use style::{Span, Style};
pub use style_context::StyleContext;

#[cfg(test)]
mod document_unittests;
