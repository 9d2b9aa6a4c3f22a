#[cfg(test)]
mod tests {
    use crate::toolchain::diagnostics::*;

    fn message(body: &str, line_number: i32, column_number: i32) -> DiagnosticMessage {
        DiagnosticMessage {
            kind: DiagnosticKind::LexerError {
                kind: LexerDiagnosticKind::UnterminatedExpressionString,
            },
            location: DiagnosticLocation {
                file_name: "script.ahk".to_string(),
                line_number,
                column_number,
                position: 0,
            },
            body: body.to_string(),
        }
    }

    #[test]
    fn location_omits_unknown_line_and_column() {
        let mut m = message("x", 0, 0);
        assert_eq!(m.location.to_string(), "script.ahk");
        m.location.line_number = 3;
        assert_eq!(m.location.to_string(), "script.ahk:3");
        m.location.column_number = 7;
        assert_eq!(m.location.to_string(), "script.ahk:3:7");
    }

    #[test]
    fn error_level_prints_infix() {
        let error = Diagnostic::new(DiagnosticLevel::Error, message("bad", 1, 2), Vec::new());
        assert_eq!(error.to_string(), "script.ahk:1:2: ERROR: bad");

        let warning = Diagnostic::new(
            DiagnosticLevel::Warning,
            message("odd", 1, 2),
            vec![message("here", 4, 1)],
        );
        assert_eq!(warning.to_string(), "script.ahk:1:2: odd\n  script.ahk:4:1: here");
    }

    #[test]
    fn stream_consumer_writes_one_line_per_diagnostic() {
        let mut out = Vec::new();
        {
            let mut consumer = StreamDiagnosticConsumer::new(&mut out);
            consumer.handle_diagnostic(Diagnostic::new(
                DiagnosticLevel::Error,
                message("first", 1, 1),
                Vec::new(),
            ));
            consumer.handle_diagnostic(Diagnostic::new(
                DiagnosticLevel::Note,
                message("second", 2, 1),
                Vec::new(),
            ));
            consumer.flush();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "script.ahk:1:1: ERROR: first\nscript.ahk:2:1: second\n");
    }

    #[test]
    fn collecting_consumer_keeps_order() {
        let mut consumer = CollectingDiagnosticConsumer::new();
        consumer.handle_diagnostic(Diagnostic::new(
            DiagnosticLevel::Error,
            message("a", 1, 1),
            Vec::new(),
        ));
        assert_eq!(consumer.diagnostics.len(), 1);
        assert_eq!(
            consumer.kinds(),
            vec![DiagnosticKind::LexerError {
                kind: LexerDiagnosticKind::UnterminatedExpressionString
            }]
        );
    }
}
