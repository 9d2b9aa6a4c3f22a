#[cfg(test)]
mod tests {
    use crate::ahk;
    use crate::toolchain::diagnostics::NullDiagnosticConsumer;
    use crate::toolchain::lexer::style::one_based;
    use crate::toolchain::lexer::{Category, Document, Lexer, LexerAhkl, Style, StyledDocument};

    #[test]
    fn spans_cover_the_text() {
        let mut doc = StyledDocument::new("spans.ahk", "ab\ncd");
        doc.set_styles(0..2, Style::Command);
        let spans = doc.spans();
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].style, spans[0].string), (Style::Command, "ab"));
        assert_eq!((spans[0].line, spans[0].column, spans[0].position), (1, 1, 0));
        assert_eq!((spans[1].style, spans[1].string), (Style::Neutral, "\ncd"));
        assert_eq!((spans[1].line, spans[1].column, spans[1].position), (1, 3, 2));
        assert_eq!(spans.iter().map(|s| s.string).collect::<String>(), doc.text());
    }

    #[test]
    fn one_based_positions_saturate() {
        assert_eq!(one_based(0), 1);
        assert_eq!(one_based(41), 42);
        assert_eq!(one_based(i32::MAX as usize), i32::MAX);
        assert_eq!(one_based(usize::MAX), i32::MAX);
    }

    #[test]
    fn empty_document() {
        let doc = StyledDocument::new("", "");
        assert_eq!(doc.length(), 0);
        assert!(doc.spans().is_empty());
        assert_eq!(doc.line_from_position(0), 0);
        assert_eq!(doc.line_start(0), 0);
    }

    #[test]
    fn reads_past_the_end() {
        let doc = StyledDocument::new("", "abc");
        assert_eq!(doc.char_at(2), 'c');
        assert_eq!(doc.char_at(3), '\0');
        assert_eq!(doc.char_at(usize::MAX), '\0');
        assert_eq!(doc.style_at(3), Style::Neutral);
    }

    #[test]
    fn set_styles_clamps_to_the_document() {
        let mut doc = StyledDocument::new("", "abc");
        doc.set_styles(1..100, Style::Error);
        assert_eq!(doc.styles(), &[Style::Neutral, Style::Error, Style::Error]);
        doc.set_styles(50..60, Style::String);
        assert_eq!(doc.styles(), &[Style::Neutral, Style::Error, Style::Error]);
    }

    #[test]
    fn line_index() {
        let doc = StyledDocument::new("", "a\r\nb\rc\n");
        assert_eq!(doc.line_from_position(0), 0);
        assert_eq!(doc.line_from_position(2), 0);
        assert_eq!(doc.line_from_position(3), 1);
        assert_eq!(doc.line_from_position(4), 1);
        assert_eq!(doc.line_from_position(5), 2);
        assert_eq!(doc.line_from_position(7), 3);
        assert_eq!(doc.line_from_position(100), 3);
        assert_eq!(doc.line_start(1), 3);
        assert_eq!(doc.line_start(2), 5);
        assert_eq!(doc.line_start(9), 7);
    }

    #[test]
    fn multibyte_characters() {
        let mut doc = StyledDocument::new("", "héllo");
        assert_eq!(doc.length(), 5);
        assert_eq!(doc.char_at(1), 'é');
        doc.set_styles(0..5, Style::Command);
        doc.replace(1..2, "ey");
        assert_eq!(doc.text(), "heyllo");
        assert_eq!(doc.slice(1..3), "ey");
        assert_eq!(
            doc.styles(),
            &[
                Style::Command,
                Style::Neutral,
                Style::Neutral,
                Style::Command,
                Style::Command,
                Style::Command
            ]
        );
    }

    #[test]
    fn replace_reindexes_lines() {
        let mut doc = StyledDocument::new("", "ab");
        doc.replace(1..1, "\n");
        assert_eq!(doc.text(), "a\nb");
        assert_eq!(doc.line_start(1), 2);
        doc.replace(0..3, "");
        assert_eq!(doc.length(), 0);
        assert!(doc.styles().is_empty());
    }

    #[test]
    fn name_comes_from_the_source() {
        let doc = StyledDocument::from_source(ahk!("Run\n"));
        assert!(doc.name().contains("document_unittests.rs"));
        assert_eq!(doc.text(), "Run\n");
    }

    #[test]
    fn relex_after_edit_matches_fresh_lex() {
        let mut lexer = LexerAhkl::new();
        lexer.set_word_list(Category::Commands, "run");
        let mut diags = NullDiagnosticConsumer {};

        let mut doc = StyledDocument::new("edit.ahk", "/* a\nb\n*/\nRun\n");
        lexer.lex_document(&mut doc, &mut diags);
        doc.replace(5..6, "Run");
        lexer.relex_from(5, &mut doc, &mut diags);

        let mut fresh = StyledDocument::new("edit.ahk", doc.text());
        lexer.lex_document(&mut fresh, &mut diags);
        assert_eq!(doc.styles(), fresh.styles());
        assert_eq!(doc.style_at(5), Style::BlockComment);
        assert_eq!(doc.style_at(doc.length() - 2), Style::Command);
    }
}
