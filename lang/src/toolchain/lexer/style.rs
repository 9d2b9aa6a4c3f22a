/// The lexical class assigned to every character of a script.
///
/// The discriminant is the value the host stores per character in its style table, so the order
/// of the variants is part of the interface and must not change. A new scan is seeded from the
/// stored value with [Style::from_u8].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Style {
    /// No classified token is open.
    #[default]
    Neutral = 0,

    /// A `;` comment running to the end of the line.
    LineComment,

    /// A `/* ... */` comment. Spans lines.
    BlockComment,

    /// A `/** ... */` documentation comment. Spans lines.
    DocComment,

    /// An `@tag:` inside a documentation comment.
    DocCommentKeyword,

    Directive,
    Command,
    CommandParameter,
    ControlFlow,
    BuiltinFunction,
    BuiltinVariable,

    /// A key name between `{` and `}`, `{Enter}` for example.
    Key,

    UserDefined1,
    UserDefined2,

    /// An identifier still being accumulated. Scans demote it to [Style::Neutral] or promote it
    /// to one of the word-list styles once the identifier ends, so it only survives in the style
    /// table when a scan range ends in the middle of an identifier.
    Identifier,

    DecimalNumber,
    HexNumber,

    /// A quoted expression string or a legacy `= text` string.
    String,

    /// The option text following the `(` that opens a continuation section.
    StringOptions,

    /// The body of a continuation section. Spans lines.
    StringBlock,

    /// Reserved for comments inside continuation sections, never produced.
    StringBlockComment,

    /// A `%var%` dereference inside a legacy string or command argument.
    Variable,

    /// A `%var%` dereference inside an expression.
    VariableReference,

    /// A `` ` `` escape such as `` `n ``.
    EscapeSequence,

    Error,
}

// The host keeps one style byte per character.
assert_eq_size!(Style, u8);

impl Style {
    pub const ALL: [Style; 25] = [
        Style::Neutral,
        Style::LineComment,
        Style::BlockComment,
        Style::DocComment,
        Style::DocCommentKeyword,
        Style::Directive,
        Style::Command,
        Style::CommandParameter,
        Style::ControlFlow,
        Style::BuiltinFunction,
        Style::BuiltinVariable,
        Style::Key,
        Style::UserDefined1,
        Style::UserDefined2,
        Style::Identifier,
        Style::DecimalNumber,
        Style::HexNumber,
        Style::String,
        Style::StringOptions,
        Style::StringBlock,
        Style::StringBlockComment,
        Style::Variable,
        Style::VariableReference,
        Style::EscapeSequence,
        Style::Error,
    ];

    pub fn from_u8(value: u8) -> Option<Style> {
        Style::ALL.get(value as usize).copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Styles of the multi-line comment blocks, which survive line resets.
    pub fn is_comment_block(self) -> bool {
        matches!(self, Style::BlockComment | Style::DocComment | Style::DocCommentKeyword)
    }

    /// Styles of continuation sections, which survive line resets.
    pub fn is_string_block(self) -> bool {
        matches!(self, Style::StringOptions | Style::StringBlock | Style::StringBlockComment)
    }
}

/// A maximal run of characters sharing one [Style].
///
/// Spans of a document are ordered, never overlap and leave no gaps, so concatenating the
/// `string` of every span reproduces the document text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub style: Style,

    // The text covered by the span.
    pub string: &'a str,

    // Character offset of the first character.
    pub position: usize,

    // The 1-based line of the first character.
    pub line: i32,

    // The 1-based character column on that line.
    pub column: i32,
}

impl<'a> Span<'a> {
    pub fn new(style: Style, string: &'a str, position: usize, line: i32, column: i32) -> Span<'a> {
        Span { style, string, position, line, column }
    }
}

/// Converts a 0-based line or column index to the 1-based `i32` used by spans and diagnostics,
/// saturating at `i32::MAX`.
pub fn one_based(index: usize) -> i32 {
    i32::try_from(index).map_or(i32::MAX, |i| i.saturating_add(1))
}
