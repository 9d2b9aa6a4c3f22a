//! Fixed ASCII character sets used by the lexer.
//!
//! Characters outside of ASCII are members of no set.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterBase {
    None,
    Digits,
    Alpha,
    AlphaNum,
}

/// A set of ASCII characters with constant-time membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterSet {
    bits: u128,
}

impl CharacterSet {
    pub const fn new(base: CharacterBase, extra: &str) -> CharacterSet {
        let mut bits = match base {
            CharacterBase::None => 0,
            CharacterBase::Digits => Self::DIGITS,
            CharacterBase::Alpha => Self::ALPHA,
            CharacterBase::AlphaNum => Self::DIGITS | Self::ALPHA,
        };
        let extra = extra.as_bytes();
        let mut i = 0;
        while i < extra.len() {
            assert!(extra[i] < 128, "character sets only hold ASCII");
            bits |= 1 << extra[i];
            i += 1;
        }
        CharacterSet { bits }
    }

    pub fn contains(&self, c: char) -> bool {
        let c = c as u32;
        c < 128 && self.bits & (1 << c) != 0
    }

    const DIGITS: u128 = Self::range(b'0', b'9');
    const ALPHA: u128 = Self::range(b'a', b'z') | Self::range(b'A', b'Z');

    const fn range(first: u8, last: u8) -> u128 {
        let mut bits = 0;
        let mut c = first;
        while c <= last {
            bits |= 1 << c;
            c += 1;
        }
        bits
    }
}

/// Characters that make up identifiers, numbers and variable names.
pub const IDENTIFIER: CharacterSet = CharacterSet::new(CharacterBase::AlphaNum, "@#$_");

/// Characters allowed in label and hotkey names.
pub const LABEL: CharacterSet =
    CharacterSet::new(CharacterBase::AlphaNum, "@#$_~!^&*()+[]';./\\<>?|{}-=\"");

/// Characters allowed between the colons of a hotstring's options.
pub const HOTSTRING_OPTION: CharacterSet =
    CharacterSet::new(CharacterBase::Digits, "*?BbCcEeIiKkOoPpRrSsZz");

/// Operator characters that turn a following `=` into an expression assignment, `:=` or `+=`.
pub const EXPRESSION_OPERATOR: CharacterSet =
    CharacterSet::new(CharacterBase::None, "+-*/!~&|^<>.:");

/// Characters that terminate a number.
pub const SYNTAX_OPERATOR: CharacterSet =
    CharacterSet::new(CharacterBase::None, "+-*/!~&|^<>.:()[]?,{}");

/// Characters that form an escape sequence when preceded by `` ` ``.
pub const ESCAPE_SEQUENCE: CharacterSet = CharacterSet::new(CharacterBase::None, ",%`;nrbtvaf");

/// Whitespace as the C locale defines it.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r')
}
