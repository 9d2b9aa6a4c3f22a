//! Source handling, lexing and diagnostics for AutoHotkey-L scripts.

pub mod diagnostics;
pub mod lexer;
pub mod source;
