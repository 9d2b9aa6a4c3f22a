#![no_main]

use ahkl_lexer::toolchain::diagnostics::NullDiagnosticConsumer;
use ahkl_lexer::toolchain::lexer::{Category, Document, Lexer, LexerAhkl, StyledDocument};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut lexer = LexerAhkl::new();
    lexer.set_word_list(Category::Commands, "msgbox run send gui");
    lexer.set_word_list(Category::ControlFlow, "if return");
    lexer.set_word_list(Category::Keys, "enter");

    let mut doc = StyledDocument::new("fuzz_targets/lex.rs", &text);
    let mut diags = NullDiagnosticConsumer {};
    lexer.lex_document(&mut doc, &mut diags);
    assert_eq!(doc.styles().len(), doc.length());

    // Restyle from somewhere in the middle, the way an editor does after an edit.
    let position = data.first().map_or(0, |b| *b as usize) % (doc.length() + 1);
    let styles = doc.styles().to_vec();
    lexer.relex_from(position, &mut doc, &mut diags);
    assert_eq!(doc.styles(), &styles[..]);
});
