use std::io::{self, Read};

/// Character stream with one character of lookahead and one of push-back.
///
/// The line counter lives here so that every newline the scanner consumes is
/// counted exactly once, no matter which state consumed it. Pushing a newline
/// back un-counts it.
pub struct CharSource {
    chars: Vec<char>,
    current: usize,
    line: usize,
}

impl CharSource {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
            line: 1,
        }
    }

    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(Self::new(&input))
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Steps back over the character returned by the last `next_char`.
    pub fn push_back(&mut self) {
        if self.current == 0 {
            return;
        }
        self.current -= 1;
        if self.chars[self.current] == '\n' {
            self.line -= 1;
        }
    }
}

impl Iterator for CharSource {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.next_char()
    }
}
