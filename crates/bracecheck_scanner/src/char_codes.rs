//! Character constants and classification helpers used by the scanner.

#![allow(dead_code)]

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';

pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';
pub const BACKTICK: char = '`';
pub const BACKSLASH: char = '\\';
pub const SLASH: char = '/';
pub const ASTERISK: char = '*';

pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const OPEN_BRACKET: char = '[';
pub const CLOSE_BRACKET: char = ']';

/// Whether the character opens (and later closes) a string literal.
#[inline]
pub fn is_string_delimiter(ch: char) -> bool {
    matches!(ch, DOUBLE_QUOTE | SINGLE_QUOTE | BACKTICK)
}

/// Whether the character is an opening bracket.
#[inline]
pub fn is_open_bracket(ch: char) -> bool {
    matches!(ch, OPEN_BRACE | OPEN_PAREN | OPEN_BRACKET)
}

/// Whether the character is a closing bracket.
#[inline]
pub fn is_close_bracket(ch: char) -> bool {
    matches!(ch, CLOSE_BRACE | CLOSE_PAREN | CLOSE_BRACKET)
}

/// The opener a closing bracket expects, or `None` for non-bracket input.
#[inline]
pub fn matching_open_bracket(close: char) -> Option<char> {
    match close {
        CLOSE_BRACE => Some(OPEN_BRACE),
        CLOSE_PAREN => Some(OPEN_PAREN),
        CLOSE_BRACKET => Some(OPEN_BRACKET),
        _ => None,
    }
}
