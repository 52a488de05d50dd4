//! Top-level driver, entities, macros and attributes.

use rowan::{TextRange, TextSize};

use crate::ast::{Attributes, BodyItem, Entity, Entry, Expression, Identifier, Macro, Resource};
use crate::diagnostics::ErrorKind;
use crate::parser::core::{PResult, Parser};

impl Parser<'_> {
    /// `ws { entry ws }`
    pub(crate) fn parse_resource(&mut self) -> PResult<Resource> {
        let mut body = Vec::new();

        loop {
            let ws = self.whitespace();
            if !ws.range.is_empty() {
                body.push(BodyItem::Whitespace(ws));
            }

            if self.cursor.is_eof() {
                break;
            }

            let entry = self.parse_entry()?;
            tracing::trace!(id = entry.id().as_str(), range = ?entry.range(), "parsed entry");
            body.push(BodyItem::Entry(entry));
        }

        Ok(Resource {
            body,
            range: TextRange::up_to(TextSize::of(self.source())),
        })
    }

    fn parse_entry(&mut self) -> PResult<Entry> {
        if self.cursor.starts_with("/*") {
            let range = TextRange::at(self.cursor.offset(), TextSize::from(2));
            return Err(self
                .error(ErrorKind::UnsupportedConstruct, range)
                .detail("comment")
                .finish());
        }

        let start = self.cursor.offset();
        if !self.eat('<') {
            return Err(self.unexpected(ErrorKind::UnexpectedEntryStart));
        }

        let id = self.match_identifier()?;
        match self.cursor.peek() {
            Some('(') => self.parse_macro(start, id).map(Entry::Macro),
            Some('[') => {
                let index = self.parse_expression_list('[', ']', "index")?;
                self.parse_entity(start, id, Some(index)).map(Entry::Entity)
            }
            _ => self.parse_entity(start, id, None).map(Entry::Entity),
        }
    }

    /// `ws value ws [attributes] >`, after `<id[index]`.
    fn parse_entity(
        &mut self,
        start: TextSize,
        id: Identifier,
        index: Option<Vec<Expression>>,
    ) -> PResult<Entity> {
        let ws_before_value = self.whitespace();
        let value = self.parse_value()?;
        let ws_after_value = self.whitespace();
        let attrs = self.parse_entry_tail()?;

        Ok(Entity {
            id,
            index,
            ws_before_value,
            value,
            ws_after_value,
            attrs,
            range: self.range_from(start),
        })
    }

    /// `($param, ...) ws { ws expression ws } ws [attributes] >`, after `<id`.
    fn parse_macro(&mut self, start: TextSize, id: Identifier) -> PResult<Macro> {
        self.cursor.bump();
        self.cursor.skip_whitespace();

        let mut params = Vec::new();
        while !self.eat(')') {
            self.expect('$', ErrorKind::MalformedExpression)?;
            params.push(self.match_identifier()?);
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(',') => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                Some(')') => {}
                _ => return Err(self.unexpected(ErrorKind::MalformedExpression)),
            }
        }

        self.cursor.skip_whitespace();
        self.expect('{', ErrorKind::MalformedExpression)?;
        self.cursor.skip_whitespace();
        let body = self.parse_expression()?;
        self.cursor.skip_whitespace();
        self.expect('}', ErrorKind::MalformedExpression)?;

        let attrs = self.parse_entry_tail()?;

        Ok(Macro {
            id,
            params,
            body,
            attrs,
            range: self.range_from(start),
        })
    }

    /// `ws [attributes] >`
    fn parse_entry_tail(&mut self) -> PResult<Option<Attributes>> {
        self.cursor.skip_whitespace();
        let attrs = if self.cursor.peek() == Some('>') {
            None
        } else {
            Some(self.parse_attributes()?)
        };
        self.expect('>', ErrorKind::EndOfInput)?;
        Ok(attrs)
    }

    /// `key: value { , ws key: value }` up to the closing `>`.
    fn parse_attributes(&mut self) -> PResult<Attributes> {
        let mut attrs = Attributes::new();

        loop {
            let pair = self.parse_key_value(Self::parse_value)?;
            attrs.insert(pair.key.name, pair.value);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some('>') => break,
                Some(',') => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                _ => return Err(self.unexpected(ErrorKind::ExpectedAttributeSeparator)),
            }
        }

        Ok(attrs)
    }
}
