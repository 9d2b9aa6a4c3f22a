//! Tools for the production and management of diagnostic feedback from the lexer.
//!
//! Lexing never fails. The few malformed shapes the lexer recognizes are styled as
//! [Style::Error](crate::toolchain::lexer::Style::Error) and, in addition, reported here as
//! structured [Diagnostic] values. A [DiagnosticConsumer] decides what to do with them: print
//! them ([StreamDiagnosticConsumer]), keep them ([CollectingDiagnosticConsumer]) or drop them
//! ([NullDiagnosticConsumer]).
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

pub use diagnostic_emitter::CollectingDiagnosticConsumer;
pub use diagnostic_emitter::Diagnostic;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::DiagnosticLevel;
pub use diagnostic_emitter::DiagnosticLocation;
pub use diagnostic_emitter::DiagnosticMessage;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_emitter::StreamDiagnosticConsumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::LexerDiagnosticKind;

#[cfg(test)]
mod diagnostic_emitter_unittests;
