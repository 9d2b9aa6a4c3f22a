//! The per-character styling state machine.
//!
//! Every character is visited once. First the span that is currently open gets a chance to end,
//! continue or change its mind about its style (`close_span`). If that leaves the cursor in
//! [Style::Neutral], the character may open a new span (`open_span`). Most context is per line:
//! at every line start the [ScanContext] flags reset, except inside comment blocks and
//! continuation sections, which carry their state across lines.

use super::char_class::{
    is_space, ESCAPE_SEQUENCE, EXPRESSION_OPERATOR, IDENTIFIER, SYNTAX_OPERATOR,
};
use super::keywords::{Category, Keywords};
use super::style::Style;
use super::style_context::StyleContext;
use crate::toolchain::diagnostics::{
    Diagnostic, DiagnosticConsumer, DiagnosticKind, DiagnosticLevel, DiagnosticMessage,
    LexerDiagnosticKind,
};

/// Transient flags the scan keeps beside the current style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanContext {
    /// Nothing but whitespace seen yet on the current line.
    pub only_spaces: bool,

    /// Between `{` and `}`, where identifiers are key names.
    pub in_key: bool,

    /// A command or built-in function was recognized and not yet closed by `)`.
    pub in_command: bool,

    pub in_expression: bool,

    /// The open string is an expression string, closed by `"`.
    pub in_exp_string: bool,

    /// Inside a continuation section. Survives line resets.
    pub in_string_block: bool,

    /// Inside a `/* */` comment. Survives line resets.
    pub in_comment_block: bool,
}

impl ScanContext {
    /// The context for a scan resuming with `init_style`. `only_spaces` tells whether the scan
    /// starts with only whitespace before it on its line.
    pub fn seeded(init_style: Style, only_spaces: bool) -> ScanContext {
        ScanContext {
            only_spaces,
            in_key: false,
            in_command: false,
            in_expression: false,
            in_exp_string: false,
            in_string_block: init_style.is_string_block(),
            in_comment_block: init_style.is_comment_block(),
        }
    }

    pub fn reset_line(&mut self) {
        self.only_spaces = true;
        self.in_key = false;
        self.in_command = false;
        self.in_expression = false;
        self.in_exp_string = false;
    }

    pub fn in_block(&self) -> bool {
        self.in_string_block || self.in_comment_block
    }
}

/// What the identifier classification rules may look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentifierContext {
    pub in_expression: bool,
    pub in_command: bool,
    pub in_key: bool,

    /// The character right after the identifier.
    pub next: char,
}

impl IdentifierContext {
    fn of(context: &ScanContext, next: char) -> IdentifierContext {
        IdentifierContext {
            in_expression: context.in_expression,
            in_command: context.in_command,
            in_key: context.in_key,
            next,
        }
    }
}

struct IdentifierRule {
    style: Style,
    // A rule without a list matches on its guard alone.
    list: Option<Category>,
    guard: fn(&IdentifierContext) -> bool,
}

fn always(_: &IdentifierContext) -> bool {
    true
}

fn starts_command(c: &IdentifierContext) -> bool {
    !c.in_expression && !c.in_command && !c.in_key && c.next != '('
}

fn in_command(c: &IdentifierContext) -> bool {
    c.in_command
}

// Keeps key names such as `Pause` from reading as control flow.
fn outside_key(c: &IdentifierContext) -> bool {
    !c.in_key
}

fn called(c: &IdentifierContext) -> bool {
    c.next == '('
}

fn inside_key(c: &IdentifierContext) -> bool {
    c.in_key
}

// Function calls and array accesses are not plain variables.
fn expression_variable(c: &IdentifierContext) -> bool {
    c.in_expression && c.next != '(' && c.next != '['
}

/// Ordered by priority, the first matching rule wins.
static IDENTIFIER_RULES: [IdentifierRule; 10] = [
    IdentifierRule { style: Style::Directive, list: Some(Category::Directives), guard: always },
    IdentifierRule { style: Style::Command, list: Some(Category::Commands), guard: starts_command },
    IdentifierRule {
        style: Style::CommandParameter,
        list: Some(Category::CommandParameters),
        guard: in_command,
    },
    IdentifierRule {
        style: Style::ControlFlow,
        list: Some(Category::ControlFlow),
        guard: outside_key,
    },
    IdentifierRule {
        style: Style::BuiltinFunction,
        list: Some(Category::BuiltinFunctions),
        guard: called,
    },
    IdentifierRule {
        style: Style::BuiltinVariable,
        list: Some(Category::BuiltinVariables),
        guard: always,
    },
    IdentifierRule { style: Style::Key, list: Some(Category::Keys), guard: inside_key },
    IdentifierRule {
        style: Style::UserDefined1,
        list: Some(Category::UserDefined1),
        guard: always,
    },
    IdentifierRule {
        style: Style::UserDefined2,
        list: Some(Category::UserDefined2),
        guard: always,
    },
    IdentifierRule { style: Style::Variable, list: None, guard: expression_variable },
];

/// Picks the style of a complete, lowercased identifier. `None` means the identifier is plain
/// text and goes back to [Style::Neutral].
pub fn classify_identifier(
    word: &str,
    context: &IdentifierContext,
    keywords: &Keywords,
) -> Option<Style> {
    IDENTIFIER_RULES
        .iter()
        .find(|rule| {
            (rule.guard)(context) && rule.list.map_or(true, |list| keywords.contains(list, word))
        })
        .map(|rule| rule.style)
}

/// Styles the whole range of `sc` and returns the context as it stood at the end.
pub fn scan(
    sc: &mut StyleContext,
    mut context: ScanContext,
    keywords: &Keywords,
    diags: &mut dyn DiagnosticConsumer,
) -> ScanContext {
    while sc.more() {
        if sc.at_line_start() {
            context.reset_line();
            if !context.in_block() {
                sc.set_state(Style::Neutral);
            }
        }

        if !context.in_block()
            && (context.only_spaces || is_space(sc.ch_prev()))
            && sc.match_char(';')
        {
            sc.set_state(Style::LineComment);
        }

        close_span(sc, &mut context, keywords, diags);

        if sc.state() == Style::Neutral {
            open_span(sc, &mut context);
        }

        if !is_space(sc.ch()) {
            context.only_spaces = false;
        }

        sc.forward();
    }

    sc.complete();
    context
}

fn close_span(
    sc: &mut StyleContext,
    context: &mut ScanContext,
    keywords: &Keywords,
    diags: &mut dyn DiagnosticConsumer,
) {
    match sc.state() {
        Style::Identifier => {
            if sc.at_line_end() || !IDENTIFIER.contains(sc.ch()) {
                let word = sc.current_lowered();
                let lookup = IdentifierContext::of(context, sc.ch());
                let style = classify_identifier(&word, &lookup, keywords).unwrap_or(Style::Neutral);
                if matches!(style, Style::Command | Style::BuiltinFunction) {
                    context.in_command = true;
                }
                sc.change_state(style);
                sc.set_state(Style::Neutral);
            } else if matches!(sc.ch_prev(), 'x' | 'y' | 'w' | 'h')
                && context.in_command
                && sc.ch().is_ascii_digit()
            {
                // Gui sizes and positions such as `w200`.
                sc.change_state(Style::Neutral);
                sc.set_state(Style::DecimalNumber);
            }
        }

        Style::DocComment => {
            if context.only_spaces && sc.match_pair('*', '/') {
                context.in_comment_block = false;
                sc.forward_by(2);
                sc.set_state(Style::Neutral);
            } else if (context.only_spaces || is_space(sc.ch_prev())) && sc.match_char('@') {
                sc.set_state(Style::DocCommentKeyword);
            }
        }

        Style::DocCommentKeyword => {
            if sc.match_char(':') {
                sc.forward_set_state(Style::DocComment);
            }
        }

        Style::BlockComment => {
            if context.only_spaces && sc.match_pair('*', '/') {
                context.in_comment_block = false;
                sc.forward_by(2);
                sc.set_state(Style::Neutral);
            }
        }

        Style::HexNumber => {
            if is_space(sc.ch()) || SYNTAX_OPERATOR.contains(sc.ch()) {
                sc.set_state(Style::Neutral);
            } else if !sc.ch().is_ascii_hexdigit() {
                sc.change_state(Style::Identifier);
            }
        }

        Style::DecimalNumber => {
            if !sc.ch().is_ascii_digit() {
                if sc.match_char('x') || sc.match_char('X') {
                    sc.change_state(Style::HexNumber);
                } else if sc.ch().is_ascii_alphabetic() {
                    sc.change_state(Style::Identifier);
                } else {
                    sc.set_state(Style::Neutral);
                }
            }
        }

        Style::String => {
            if context.in_expression && sc.at_line_end() {
                report(
                    sc,
                    diags,
                    sc.span_start(),
                    LexerDiagnosticKind::UnterminatedExpressionString,
                    "Unterminated string, expected '\"' before the end of the line.",
                );
                sc.change_state(Style::Error);
            } else if context.in_expression && sc.match_char('"') {
                if sc.ch_next() == '"' {
                    // A doubled quote is a literal quote.
                    sc.forward();
                } else {
                    context.in_exp_string = false;
                    sc.forward_set_state(Style::Neutral);
                }
            } else if !context.in_expression
                && sc.match_char('%')
                && IDENTIFIER.contains(sc.ch_next())
            {
                sc.set_state(Style::Neutral);
                sc.forward_set_state(Style::Variable);
            }
        }

        Style::StringOptions => {
            if sc.at_line_end() || sc.match_char('\r') {
                sc.set_state(Style::StringBlock);
            }
        }

        Style::StringBlock => {
            if context.only_spaces && sc.match_char(')') {
                context.in_string_block = false;
                sc.set_state(Style::Neutral);
                if sc.ch_next() != ',' {
                    report(
                        sc,
                        diags,
                        sc.position(),
                        LexerDiagnosticKind::MalformedStringBlockClose,
                        "Continuation section closed by ')' without a following ','.",
                    );
                    sc.change_state(Style::Error);
                }
            }
        }

        Style::EscapeSequence => {
            sc.forward_set_state(Style::Neutral);
        }

        Style::Variable => {
            if sc.match_char('%') {
                sc.set_state(Style::Neutral);
                sc.forward_set_state(Style::String);
            } else if !IDENTIFIER.contains(sc.ch()) {
                invalid_reference(sc, diags);
            }
        }

        Style::VariableReference => {
            if sc.match_char('%') {
                sc.set_state(Style::Neutral);
            } else if !IDENTIFIER.contains(sc.ch()) {
                invalid_reference(sc, diags);
            }
        }

        Style::Error => {
            if context.in_expression && context.in_exp_string && sc.match_char('"') {
                sc.change_state(Style::String);
            } else if sc.match_char('%') {
                sc.set_state(Style::Neutral);
            }
        }

        _ => (),
    }
}

fn open_span(sc: &mut StyleContext, context: &mut ScanContext) {
    let ch = sc.ch();

    if (context.only_spaces && ch == '.')
        || matches!(ch, '(' | '[' | '?')
        || sc.match_str(" % ")
        || (EXPRESSION_OPERATOR.contains(ch) && sc.ch_next() == '=')
    {
        context.in_expression = true;
    } else if matches!(ch, ']' | ')') {
        context.in_expression = false;
    }

    if !sc.at_line_end() && IDENTIFIER.contains(ch) {
        if ch.is_ascii_digit() {
            sc.set_state(Style::DecimalNumber);
        } else {
            sc.set_state(Style::Identifier);
        }
    } else if context.only_spaces && sc.match_pair('/', '*') {
        // Relabels the leading whitespace of the line too.
        context.in_comment_block = true;
        sc.change_state(Style::BlockComment);
        if sc.match_str("/**") && !sc.match_str("/***") {
            sc.change_state(Style::DocComment);
        }
    } else if ch == ')' {
        context.in_command = false;
    } else if ch == '{' {
        context.in_key = true;
    } else if ch == '}' {
        context.in_key = false;
    } else if ch == '`' && ESCAPE_SEQUENCE.contains(sc.ch_next()) {
        sc.set_state(Style::EscapeSequence);
    } else if context.in_expression && ch == '"' {
        context.in_exp_string = true;
        sc.set_state(Style::String);
    } else if !context.in_expression && !EXPRESSION_OPERATOR.contains(sc.ch_prev()) && ch == '=' {
        // Legacy assignment, the rest of the line is text.
        sc.forward_set_state(Style::String);
    } else if context.only_spaces && ch == '(' {
        context.in_string_block = true;
        sc.forward_set_state(Style::StringOptions);
        // Options are limited to the opening line, even when there are none. The '\r' of a
        // "\r\n" pair already ends them.
        if sc.at_line_end() || sc.match_char('\r') {
            sc.set_state(Style::StringBlock);
        }
    } else if ch == '%' && IDENTIFIER.contains(sc.ch_next()) {
        if context.in_expression {
            sc.forward_set_state(Style::VariableReference);
        } else {
            sc.forward_set_state(Style::Variable);
        }
    }
}

fn invalid_reference(sc: &mut StyleContext, diags: &mut dyn DiagnosticConsumer) {
    report(
        sc,
        diags,
        sc.position(),
        LexerDiagnosticKind::InvalidVariableReferenceBody,
        "Invalid character in variable reference, expected a name and a closing '%'.",
    );
    sc.change_state(Style::Error);
}

fn report(
    sc: &StyleContext,
    diags: &mut dyn DiagnosticConsumer,
    position: usize,
    kind: LexerDiagnosticKind,
    body: &str,
) {
    let message = DiagnosticMessage {
        kind: DiagnosticKind::LexerError { kind },
        location: sc.location(position),
        body: body.to_string(),
    };
    tracing::trace!(?kind, position, "lexical error");
    diags.handle_diagnostic(Diagnostic::new(DiagnosticLevel::Error, message, Vec::new()));
}
