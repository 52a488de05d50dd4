//! Grammar productions for L20n resources.
//!
//! Every `parse_*` method is an extension of `Parser`. Productions read the
//! shared cursor directly; nothing is tokenized ahead of time.

mod entries;
mod expressions;
mod values;

use super::core::{PResult, Parser};
use crate::ast::Identifier;
use crate::diagnostics::ErrorKind;

/// A `key: value` pair before it is stored in its map.
pub(super) struct KeyValuePair<T> {
    pub key: Identifier,
    pub value: T,
}

impl Parser<'_> {
    /// `key ws : ws value`
    pub(super) fn parse_key_value<T>(
        &mut self,
        value: fn(&mut Self) -> PResult<T>,
    ) -> PResult<KeyValuePair<T>> {
        let key = self.match_identifier()?;
        self.cursor.skip_whitespace();
        if !self.eat(':') {
            return Err(self.unexpected(ErrorKind::ExpectedKeyValueSeparator));
        }
        self.cursor.skip_whitespace();
        let value = value(self)?;
        Ok(KeyValuePair { key, value })
    }
}
