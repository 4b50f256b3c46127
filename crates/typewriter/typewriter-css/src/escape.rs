//! CSS escaping for identifiers and double-quoted strings.
//!
//! Rules:
//! - Control characters and anything outside printable ASCII become a hex
//!   escape (`\HEX`, uppercase). The separating space is kept only when the
//!   next character is a hex digit or a space.
//! - Identifiers: backslash and ASCII punctuation get a single backslash; a
//!   leading digit becomes a hex escape; a leading `-` followed by `-` or a
//!   digit becomes `\-`.
//! - Strings: backslash and `"` get a single backslash.

use std::fmt::Write;

enum Piece {
    Hex(u32),
    Raw(char),
    Escaped(char),
}

impl Piece {
    fn first_char(&self) -> char {
        match self {
            Piece::Hex(_) | Piece::Escaped(_) => '\\',
            Piece::Raw(c) => *c,
        }
    }
}

fn is_identifier_punct(c: char) -> bool {
    matches!(c, ' '..=',' | '.' | '/' | ':'..='@' | '['..='^' | '`' | '{'..='~')
}

fn needs_hex(c: char) -> bool {
    let code = c as u32;
    !(0x20..=0x7E).contains(&code)
}

fn pieces(input: &str, identifier: bool) -> Vec<Piece> {
    let mut out: Vec<Piece> = input
        .chars()
        .map(|c| {
            if needs_hex(c) {
                Piece::Hex(c as u32)
            } else if c == '\\'
                || (identifier && is_identifier_punct(c))
                || (!identifier && c == '"')
            {
                Piece::Escaped(c)
            } else {
                Piece::Raw(c)
            }
        })
        .collect();

    if identifier {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some('-'), Some(next)) if next == '-' || next.is_ascii_digit() => {
                out[0] = Piece::Escaped('-');
            }
            (Some(first), _) if first.is_ascii_digit() => {
                out[0] = Piece::Hex(first as u32);
            }
            _ => {}
        }
    }
    out
}

fn render(pieces: &[Piece]) -> String {
    let mut out = String::with_capacity(pieces.len() + 8);
    for (i, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Hex(code) => {
                let _ = write!(out, "\\{code:X}");
                let keep_space = pieces
                    .get(i + 1)
                    .map(Piece::first_char)
                    .is_some_and(|c| c.is_ascii_hexdigit() || c == ' ');
                if keep_space {
                    out.push(' ');
                }
            }
            Piece::Escaped(c) => {
                out.push('\\');
                out.push(*c);
            }
            Piece::Raw(c) => out.push(*c),
        }
    }
    out
}

/// Escape `input` for use as a CSS identifier (class name, keyframes name).
pub fn escape_identifier(input: &str) -> String {
    render(&pieces(input, true))
}

/// Escape `input` for use between double quotes in a CSS string.
pub fn escape_string(input: &str) -> String {
    render(&pieces(input, false))
}
