/// The enumerated type of all diagnostics the toolchain emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerError { kind: LexerDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// A string in expression context reached the end of the line without a closing quote.
    UnterminatedExpressionString,

    /// A `%var%` or `%var` dereference contains a character that is neither an identifier
    /// character nor the closing `%`.
    InvalidVariableReferenceBody,

    /// The `)` closing a continuation section is not immediately followed by `,`.
    MalformedStringBlockClose,
}
