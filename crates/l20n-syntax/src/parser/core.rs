//! Parser state and low-level operations.

use rowan::{TextRange, TextSize};

use super::cursor::{Cursor, Lead};
use crate::ast::{Resource, Whitespace};
use crate::diagnostics::{ErrorBuilder, ErrorKind, ParseError};

/// Nesting depth allowed when no limit is configured explicitly.
///
/// One array level costs two units (the value and its item expression), so
/// this admits 32 nested arrays or about 60 nested parentheses. Both fit a
/// 2 MiB thread stack in debug builds.
pub const DEFAULT_RECURSION_LIMIT: u32 = 64;

pub(super) type PResult<T> = std::result::Result<T, ParseError>;

/// Recursive-descent parser over a single source string.
///
/// Each production either consumes its construct and returns a node, or fails.
/// There is no recovery: the first error ends the parse.
pub struct Parser<'src> {
    pub(super) cursor: Cursor<'src>,
    depth: u32,
    recursion_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            depth: 0,
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }

    /// `None` removes the limit.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    #[tracing::instrument(level = "debug", skip_all, fields(bytes = self.cursor.source().len()))]
    pub fn parse(mut self) -> Result<Resource, ParseError> {
        let resource = self.parse_resource()?;
        tracing::debug!(entries = resource.entries().count(), "parsed resource");
        Ok(resource)
    }

    pub(super) fn source(&self) -> &'src str {
        self.cursor.source()
    }

    pub(super) fn lead(&self) -> Lead {
        Lead::classify(self.cursor.peek())
    }

    /// Skip whitespace and keep it as a node. The result may be empty.
    pub(super) fn whitespace(&mut self) -> Whitespace {
        let range = self.cursor.skip_whitespace();
        Whitespace {
            text: self.cursor.slice(range).to_string(),
            range,
        }
    }

    pub(super) fn eat(&mut self, c: char) -> bool {
        if self.cursor.peek() == Some(c) {
            self.cursor.bump();
            return true;
        }
        false
    }

    /// Range of the next character, or an empty range at end of input.
    pub(super) fn current_range(&self) -> TextRange {
        let start = self.cursor.offset();
        match self.cursor.peek() {
            Some(c) => TextRange::at(start, TextSize::of(c)),
            None => TextRange::empty(start),
        }
    }

    pub(super) fn error(&self, kind: ErrorKind, range: TextRange) -> ErrorBuilder<'src> {
        ParseError::report(self.source(), kind, range)
    }

    /// Error at the next character. End of input reports `EndOfInput` instead of `kind`.
    pub(super) fn unexpected(&self, kind: ErrorKind) -> ParseError {
        let range = self.current_range();
        match self.cursor.peek() {
            Some(c) => self.error(kind, range).detail(format!("found `{c}`")).finish(),
            None => self.error(ErrorKind::EndOfInput, range).finish(),
        }
    }

    /// Consume `expected` or fail with `kind`.
    pub(super) fn expect(&mut self, expected: char, kind: ErrorKind) -> PResult<()> {
        if self.eat(expected) {
            return Ok(());
        }
        let range = self.current_range();
        let err = match self.cursor.peek() {
            Some(c) => self
                .error(kind, range)
                .detail(format!("expected `{expected}`, found `{c}`")),
            None => self
                .error(ErrorKind::EndOfInput, range)
                .detail(format!("expected `{expected}`")),
        };
        Err(err.finish())
    }

    /// Closer missing from a composite opened at `opener`.
    pub(super) fn unterminated(&self, opener: TextRange, what: &str, closer: char) -> ParseError {
        self.error(ErrorKind::UnterminatedComposite, self.current_range())
            .detail(format!("expected `{closer}`"))
            .related_to(format!("{what} started here"), opener)
            .finish()
    }

    pub(super) fn range_from(&self, start: TextSize) -> TextRange {
        self.cursor.range_from(start)
    }

    pub(super) fn enter_recursion(&mut self) -> PResult<()> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            tracing::trace!(depth = self.depth, "recursion limit reached");
            return Err(self
                .error(ErrorKind::RecursionLimitExceeded, self.current_range())
                .detail(format!("more than {limit} levels"))
                .finish());
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
