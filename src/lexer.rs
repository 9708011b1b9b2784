use std::io::{self, Read};
use tracing::{debug, trace};
use crate::patterns::{self, IDENT, REAL};
use crate::source::CharSource;
use crate::token::{Kind, LexItem};

pub const MISSING_BEGIN: &str = "missing BEGIN token";
pub const MISSING_END: &str = "missing END token";

/// Pull-based scanner that validates each token against the one before it.
///
/// Every call to [`Lexer::next_token`] returns exactly one item. The first
/// `Err` item is sticky: the lexer hands the same error back on every later
/// call and never consumes more input.
pub struct Lexer {
    source: CharSource,
    last: Option<LexItem>,
    closed: bool,
    failed: Option<LexItem>,
    done: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self::from_source(CharSource::new(input))
    }

    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        Ok(Self::from_source(CharSource::from_reader(reader)?))
    }

    pub fn from_source(source: CharSource) -> Self {
        Self {
            source,
            last: None,
            closed: false,
            failed: None,
            done: false,
        }
    }

    /// Line the cursor is on, 1-based.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// Kind of the last token accepted, `None` until `begin` has been seen.
    pub fn previous(&self) -> Option<Kind> {
        self.last.as_ref().map(LexItem::kind)
    }

    pub fn next_token(&mut self) -> LexItem {
        if let Some(err) = &self.failed {
            return err.clone();
        }
        if self.done {
            return LexItem::new(Kind::Done, "", self.line());
        }

        let item = self.scan();
        match item.kind {
            Kind::Err => {
                debug!(line = item.line, diagnostic = %item.lexeme, "rejected input");
                self.failed = Some(item.clone());
            }
            Kind::Done => {
                trace!(line = item.line, "end of input");
                self.done = true;
            }
            _ => trace!(kind = %item.kind, lexeme = %item.lexeme, line = item.line, "token"),
        }
        item
    }

    fn scan(&mut self) -> LexItem {
        while let Some(ch) = self.source.next_char() {
            if patterns::is_space(ch) {
                continue;
            }
            if ch == '/' && self.source.peek() == Some('/') {
                self.skip_comment();
                continue;
            }
            if ch.is_ascii_alphabetic() {
                return self.scan_ident(ch);
            }

            let known = ch.is_ascii_digit() || ch == '.' || ch == '"' || patterns::is_sign(ch);
            if !known {
                return self.error(ch.to_string());
            }
            if self.last.is_none() {
                return self.error(MISSING_BEGIN);
            }

            return match ch {
                '"' => self.scan_string(),
                '.' => self.scan_real(String::from(ch)),
                c if c.is_ascii_digit() => self.scan_int(c),
                c => self.scan_sign(c),
            };
        }

        if self.closed {
            return LexItem::new(Kind::Done, "", self.line());
        }
        // Reported where the code stops, not after trailing blank lines.
        let line = self.last.as_ref().map_or(self.line(), LexItem::line);
        LexItem::new(Kind::Err, MISSING_END, line)
    }

    fn skip_comment(&mut self) {
        for ch in self.source.by_ref() {
            if ch == '\n' {
                break;
            }
        }
    }

    fn scan_ident(&mut self, first: char) -> LexItem {
        let mut lexeme = String::from(first);
        while let Some(ch) = self.source.next_char() {
            lexeme.push(ch);
            if !IDENT.is_match(&lexeme) {
                lexeme.pop();
                self.source.push_back();
                break;
            }
        }

        let kind = Kind::keyword(&lexeme).unwrap_or(Kind::Ident);
        match (kind, self.previous()) {
            (Kind::Begin, None) => {}
            (Kind::Begin, Some(_)) => return self.error(lexeme),
            (_, None) => return self.error(MISSING_BEGIN),
            // Points at the token that should have been a `;`.
            (Kind::End, Some(previous)) if previous != Kind::Scoma => {
                let context = self.last.as_ref().map_or(lexeme, |last| last.lexeme.clone());
                return self.error(context);
            }
            // Two identifiers in a row means an operator or separator is missing.
            (Kind::Ident, Some(Kind::Ident)) => return self.error(lexeme),
            _ => {}
        }
        self.accept(kind, lexeme)
    }

    fn scan_string(&mut self) -> LexItem {
        let mut lexeme = String::from('"');
        loop {
            let Some(ch) = self.source.next_char() else {
                return self.error(lexeme);
            };
            if ch == '\n' {
                self.source.push_back();
                return self.error(lexeme);
            }
            lexeme.push(ch);
            if !patterns::is_printable(ch) {
                return self.error(lexeme);
            }

            // An escaped quote stays in the lexeme as written.
            if ch == '\\' && self.source.peek() == Some('"') {
                if let Some(quote) = self.source.next_char() {
                    lexeme.push(quote);
                }
                continue;
            }
            if ch == '"' {
                return self.accept(Kind::Sconst, lexeme);
            }
        }
    }

    fn scan_int(&mut self, first: char) -> LexItem {
        let mut lexeme = String::from(first);
        loop {
            match self.source.next_char() {
                Some(ch) if ch.is_ascii_digit() => lexeme.push(ch),
                Some(ch) if ch.is_ascii_alphabetic() => {
                    lexeme.push(ch);
                    return self.error(lexeme);
                }
                Some('.') => {
                    self.source.push_back();
                    return self.scan_real(lexeme);
                }
                Some(_) => {
                    self.source.push_back();
                    break;
                }
                None => break,
            }
        }
        self.accept(Kind::Iconst, lexeme)
    }

    fn scan_real(&mut self, mut lexeme: String) -> LexItem {
        while let Some(ch) = self.source.next_char() {
            if ch.is_ascii_alphabetic() {
                lexeme.push(ch);
                return self.error(lexeme);
            }
            lexeme.push(ch);
            if !REAL.is_match(&lexeme) {
                lexeme.pop();
                self.source.push_back();
                break;
            }
        }

        if lexeme.ends_with('.') {
            return self.error(lexeme);
        }
        self.accept(Kind::Rconst, lexeme)
    }

    fn scan_sign(&mut self, sign: char) -> LexItem {
        let (kind, allowed) = sign_rule(sign);
        let valid = self.previous().is_some_and(|previous| allowed.contains(&previous));
        if !valid {
            let mut context = String::from(sign);
            if let Some(next) = self.source.peek() {
                context.push(next);
            }
            return self.error(context);
        }
        self.accept(kind, sign.to_string())
    }

    fn accept(&mut self, kind: Kind, lexeme: String) -> LexItem {
        // Past `end` only the statement terminator that closes it may follow.
        if self.closed && !(kind == Kind::Scoma && self.previous() == Some(Kind::End)) {
            return self.error(lexeme);
        }
        if kind == Kind::End {
            self.closed = true;
        }
        let item = LexItem::new(kind, lexeme, self.line());
        self.last = Some(item.clone());
        item
    }

    fn error(&self, diagnostic: impl Into<String>) -> LexItem {
        LexItem::new(Kind::Err, diagnostic, self.line())
    }
}

/// Token emitted for a sign and the token kinds allowed to precede it.
fn sign_rule(sign: char) -> (Kind, &'static [Kind]) {
    const OPERAND: &[Kind] = &[Kind::Ident, Kind::Iconst, Kind::Rconst];
    match sign {
        '+' => (Kind::Plus, OPERAND),
        '*' => (Kind::Mult, OPERAND),
        '/' => (Kind::Div, OPERAND),
        '-' => (Kind::Minus, &[Kind::Ident, Kind::Iconst, Kind::Rconst, Kind::Eq]),
        '(' => (
            Kind::LParen,
            &[Kind::If, Kind::Eq, Kind::Plus, Kind::Minus, Kind::Mult, Kind::Div],
        ),
        ')' => (Kind::RParen, OPERAND),
        '=' => (Kind::Eq, &[Kind::Ident]),
        ',' => (Kind::Coma, &[Kind::Sconst]),
        ';' => (
            Kind::Scoma,
            &[Kind::Sconst, Kind::Iconst, Kind::Rconst, Kind::Ident, Kind::End],
        ),
        _ => (Kind::Err, &[]),
    }
}

impl Iterator for Lexer {
    type Item = LexItem;

    /// Yields items up to and including the first `Err` or `Done`.
    fn next(&mut self) -> Option<LexItem> {
        if self.failed.is_some() || self.done {
            return None;
        }
        Some(self.next_token())
    }
}
