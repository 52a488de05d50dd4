//! The two fixed recognizers: identifiers and quoted strings.

use rowan::TextRange;

use super::core::{PResult, Parser};
use super::cursor::is_word_char;
use crate::ast::{Identifier, StringValue};
use crate::diagnostics::ErrorKind;

impl Parser<'_> {
    /// `'name'`, `"name"` or `name`. Quotes are stripped from the result.
    ///
    /// A closing quote is consumed only when it matches the opening one.
    pub(super) fn match_identifier(&mut self) -> PResult<Identifier> {
        let start = self.cursor.offset();
        let quote = match self.cursor.peek() {
            Some(q @ ('"' | '\'')) => {
                self.cursor.bump();
                Some(q)
            }
            _ => None,
        };

        let name = self.cursor.eat_while(is_word_char);
        if name.is_empty() {
            return Err(self.unexpected(ErrorKind::MalformedIdentifier));
        }

        if let Some(q) = quote {
            self.eat(q);
        }

        Ok(Identifier {
            name: name.to_string(),
            range: self.range_from(start),
        })
    }

    /// Quoted text up to the first matching quote not escaped by an odd run of backslashes.
    pub(super) fn match_quoted_string(&mut self) -> PResult<StringValue> {
        let start = self.cursor.offset();
        let quote = match self.cursor.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.unexpected(ErrorKind::UnexpectedValueStart)),
        };
        self.cursor.bump();

        let rest = self.cursor.rest();
        let mut backslashes = 0usize;
        let mut close = None;
        for (i, c) in rest.char_indices() {
            if c == quote && backslashes % 2 == 0 {
                close = Some(i);
                break;
            }
            backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        }

        let Some(len) = close else {
            let end = self.source().len() as u32;
            return Err(self
                .error(
                    ErrorKind::UnterminatedString,
                    TextRange::new(start, end.into()),
                )
                .detail(format!("missing closing {quote}"))
                .finish());
        };

        let content = &rest[..len];
        self.cursor.advance(content.chars().count() + 1);

        Ok(StringValue {
            content: content.to_string(),
            quote,
            range: self.range_from(start),
        })
    }
}
