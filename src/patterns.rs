use std::sync::LazyLock;
use regex::Regex;

// Matched against the whole running lexeme, so each pattern is anchored.
pub static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("identifier pattern"));

// Covers both the complete form `digits* . digits+` and the partial form with
// a trailing point that is still accumulating.
pub static REAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.[0-9]*$").expect("real pattern"));

pub fn is_printable(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// ASCII whitespace including vertical tab; anything else is not skipped.
pub fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

pub fn is_sign(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '(' | ')' | '=' | ',' | ';')
}
