//! String, array and object values.

use rowan::TextRange;

use crate::ast::{ArrayValue, Expression, Members, ObjectValue, Value};
use crate::diagnostics::{ErrorKind, ParseError};
use crate::parser::core::{PResult, Parser};
use crate::parser::cursor::Lead;

impl Parser<'_> {
    /// `"..."` | `[...]` | `{...}`
    pub(crate) fn parse_value(&mut self) -> PResult<Value> {
        self.enter_recursion()?;
        let value = match self.lead() {
            Lead::Quote(_) => self.match_quoted_string().map(Value::String),
            Lead::BracketOpen => self.parse_array().map(Value::Array),
            Lead::BraceOpen => self.parse_object().map(Value::Object),
            _ => Err(self.unexpected(ErrorKind::UnexpectedValueStart)),
        };
        self.exit_recursion();
        value
    }

    fn parse_array(&mut self) -> PResult<ArrayValue> {
        let start = self.cursor.offset();
        let items = self.parse_expression_list('[', ']', "array")?;
        Ok(ArrayValue {
            items,
            range: self.range_from(start),
        })
    }

    /// `{ [*]key: item, ... }`, last duplicate key wins.
    fn parse_object(&mut self) -> PResult<ObjectValue> {
        let start = self.cursor.offset();
        let opener = self.current_range();
        self.cursor.bump();
        self.cursor.skip_whitespace();

        let mut members = Members::new();
        let mut default: Option<(String, TextRange)> = None;
        loop {
            match self.cursor.peek() {
                None => return Err(self.unterminated(opener, "object", '}')),
                Some('}') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => {}
            }

            let marker = self.current_range();
            let is_default = self.eat('*');
            let pair = self
                .parse_key_value(Self::parse_expression)
                .map_err(|err| self.close_at_end(err, opener, "object", '}'))?;

            if is_default {
                if let Some((_, first)) = &default {
                    return Err(self
                        .error(ErrorKind::DuplicateDefault, marker)
                        .related_to("first default here", *first)
                        .finish());
                }
                default = Some((pair.key.name.clone(), marker));
            }
            members.insert(pair.key.name, pair.value);

            self.cursor.skip_whitespace();
            if self.eat(',') {
                self.cursor.skip_whitespace();
            }
        }

        Ok(ObjectValue {
            members,
            default: default.map(|(key, _)| key),
            range: self.range_from(start),
        })
    }

    /// `open ws { expression ws [, ws] } close`
    ///
    /// Shared by arrays and entity indices.
    pub(super) fn parse_expression_list(
        &mut self,
        open: char,
        close: char,
        what: &str,
    ) -> PResult<Vec<Expression>> {
        let opener = self.current_range();
        self.expect(open, ErrorKind::UnexpectedValueStart)?;
        self.cursor.skip_whitespace();

        let mut items = Vec::new();
        loop {
            match self.cursor.peek() {
                None => return Err(self.unterminated(opener, what, close)),
                Some(c) if c == close => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => {}
            }

            let item = self
                .parse_expression()
                .map_err(|err| self.close_at_end(err, opener, what, close))?;
            items.push(item);

            self.cursor.skip_whitespace();
            if self.eat(',') {
                self.cursor.skip_whitespace();
            }
        }

        Ok(items)
    }

    /// Input that ran out inside a composite is reported against the composite.
    fn close_at_end(
        &self,
        err: ParseError,
        opener: TextRange,
        what: &str,
        close: char,
    ) -> ParseError {
        if err.kind == ErrorKind::EndOfInput {
            return self.unterminated(opener, what, close);
        }
        err
    }
}
