//! Character cursor over the unconsumed suffix of the input.
//!
//! The cursor only moves forward. It trusts its callers: `advance` does not
//! check what it skips, productions validate before they consume.

use rowan::{TextRange, TextSize};

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the next unconsumed character.
    pub fn offset(&self) -> TextSize {
        TextSize::from(self.pos as u32)
    }

    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek2(&self) -> Option<[char; 2]> {
        let mut chars = self.rest().chars();
        Some([chars.next()?, chars.next()?])
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Drop the next `n` characters. Stops at end of input.
    pub fn advance(&mut self, n: usize) {
        let skipped: usize = self.rest().chars().take(n).map(char::len_utf8).sum();
        self.pos += skipped;
    }

    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Skip a run of whitespace and return its range (empty if none).
    pub fn skip_whitespace(&mut self) -> TextRange {
        let start = self.offset();
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
        TextRange::new(start, self.offset())
    }

    /// Advance while `pred` holds and return the consumed text.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    pub fn range_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.offset())
    }

    pub fn slice(&self, range: TextRange) -> &'src str {
        &self.source[std::ops::Range::<usize>::from(range)]
    }
}

/// What the next character can start.
///
/// Productions dispatch on this instead of comparing raw characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    Quote(char),
    BracketOpen,
    BraceOpen,
    ParenOpen,
    Digit,
    Word,
    Other(char),
    Eof,
}

impl Lead {
    pub fn classify(c: Option<char>) -> Self {
        match c {
            None => Lead::Eof,
            Some(q @ ('"' | '\'')) => Lead::Quote(q),
            Some('[') => Lead::BracketOpen,
            Some('{') => Lead::BraceOpen,
            Some('(') => Lead::ParenOpen,
            Some(c) if c.is_ascii_digit() => Lead::Digit,
            Some(c) if is_word_char(c) => Lead::Word,
            Some(c) => Lead::Other(c),
        }
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
