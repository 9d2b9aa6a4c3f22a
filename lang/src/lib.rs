//! AutoHotkey-L syntax styling for text editors.
//!
//! This crate assigns a [Style](toolchain::lexer::Style) to every character of an
//! [AutoHotkey-L](https://www.autohotkey.com/) script the way an editor component expects it: as a
//! per-character style table written in place, resumable from any line so that the host can re-lex
//! incrementally after an edit. It does not parse or validate scripts; a handful of clearly
//! malformed lexical shapes are flagged with an error style and an advisory diagnostic.
//!

#[macro_use]
extern crate static_assertions;

pub mod toolchain;
