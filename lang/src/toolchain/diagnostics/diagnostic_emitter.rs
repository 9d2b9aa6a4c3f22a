use std::fmt;
use std::io::Write;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Note,
    Warning,
    Error,
}

/// A location in code referred to by the diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticLocation {
    pub file_name: String,
    // 1-based, zero means unknown.
    pub line_number: i32,
    pub column_number: i32,

    // Character offset into the document.
    pub position: usize,
}

impl fmt::Display for DiagnosticLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)?;
        if self.line_number > 0 {
            f.write_fmt(format_args!(":{}", self.line_number))?;
        }
        if self.column_number > 0 {
            f.write_fmt(format_args!(":{}", self.column_number))?;
        }
        fmt::Result::Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation,
    pub body: String,
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The alternate flag asks for the message to be printed as an error.
        let infix = match f.alternate() {
            true => "ERROR: ",
            false => "",
        };
        f.write_fmt(format_args!("{}: {}{}", self.location, infix, self.body))
    }
}

/// A complete Diagnostic, including a main message and optional notes, plus the level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: DiagnosticMessage,
    pub notes: Vec<DiagnosticMessage>,
}

impl Diagnostic {
    pub fn new(
        level: DiagnosticLevel,
        message: DiagnosticMessage,
        notes: Vec<DiagnosticMessage>,
    ) -> Diagnostic {
        Diagnostic { level, message, notes }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.message.kind
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level == DiagnosticLevel::Error {
            f.write_fmt(format_args!("{:#}", self.message))?;
        } else {
            f.write_fmt(format_args!("{}", self.message))?;
        }
        for m in &self.notes {
            f.write_fmt(format_args!("\n  {}", m))?;
        }
        fmt::Result::Ok(())
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: Diagnostic);
    fn flush(&mut self);
}

pub struct StreamDiagnosticConsumer<W: Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }
}

impl<W: Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    fn handle_diagnostic(&mut self, diag: Diagnostic) {
        if let Err(e) = writeln!(self.stream, "{}", diag) {
            tracing::warn!(error = %e, "dropped diagnostic");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.stream.flush() {
            tracing::warn!(error = %e, "failed to flush diagnostics");
        }
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<impl Write> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}

/// Discards every diagnostic.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: Diagnostic) {}
    fn flush(&mut self) {}
}

/// Keeps every diagnostic in emission order.
#[derive(Debug, Default)]
pub struct CollectingDiagnosticConsumer {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingDiagnosticConsumer {
    pub fn new() -> CollectingDiagnosticConsumer {
        CollectingDiagnosticConsumer::default()
    }

    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.diagnostics.iter().map(Diagnostic::kind).collect()
    }
}

impl DiagnosticConsumer for CollectingDiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }
    fn flush(&mut self) {}
}
