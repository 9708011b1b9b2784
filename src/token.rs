use std::fmt;
use serde::{Serialize, Serializer};

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct LexItem {
    pub(crate) kind: Kind,
    pub(crate) lexeme: String,
    pub(crate) line: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    // Keywords
    Print,   // print
    If,      // if
    Begin,   // begin
    End,     // end
    Then,    // then

    // Identifiers and literals
    Ident,   // letter followed by letters/digits
    Iconst,  // 42
    Sconst,  // "text", quotes included
    Rconst,  // 4.2, .5

    // Operators
    Plus,    // +
    Minus,   // -
    Mult,    // *
    Div,     // /
    Eq,      // =

    // Delimiters
    LParen,  // (
    RParen,  // )
    Scoma,   // ;
    Coma,    // ,

    Err,     // lexical or context error, lexeme holds the diagnostic
    Done,    // clean end of input
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Print => "PRINT",
            Kind::If => "IF",
            Kind::Begin => "BEGIN",
            Kind::End => "END",
            Kind::Then => "THEN",
            Kind::Ident => "IDENT",
            Kind::Iconst => "ICONST",
            Kind::Sconst => "SCONST",
            Kind::Rconst => "RCONST",
            Kind::Plus => "PLUS",
            Kind::Minus => "MINUS",
            Kind::Mult => "MULT",
            Kind::Div => "DIV",
            Kind::Eq => "EQ",
            Kind::LParen => "LPAREN",
            Kind::RParen => "RPAREN",
            Kind::Scoma => "SCOMA",
            Kind::Coma => "COMA",
            Kind::Err => "ERR",
            Kind::Done => "DONE",
        }
    }

    /// Kinds whose lexeme is meaningful on its own and is shown by the formatter.
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            Kind::Sconst | Kind::Rconst | Kind::Iconst | Kind::Ident | Kind::Err
        )
    }

    pub fn keyword(word: &str) -> Option<Kind> {
        match word {
            "begin" => Some(Kind::Begin),
            "print" => Some(Kind::Print),
            "end" => Some(Kind::End),
            "if" => Some(Kind::If),
            "then" => Some(Kind::Then),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl LexItem {
    pub fn new(kind: Kind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_err(&self) -> bool {
        self.kind == Kind::Err
    }

    pub fn is_done(&self) -> bool {
        self.kind == Kind::Done
    }
}

impl fmt::Display for LexItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.kind.has_payload() {
            write!(f, " ({})", self.lexeme)?;
        }
        Ok(())
    }
}
