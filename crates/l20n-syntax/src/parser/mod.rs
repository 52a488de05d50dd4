//! Recursive-descent parser for L20n resources.
//!
//! # Architecture
//!
//! Lexing and parsing happen in one pass over a forward-only character cursor:
//!
//! - Two fixed recognizers (identifiers, quoted strings) instead of a tokenizer
//! - Productions dispatch on the class of the next character (`Lead`)
//! - No backtracking: each production commits or fails
//! - Fail-fast: the first error is returned and no partial tree is kept
//!
//! Nesting is bounded by a recursion limit so deeply nested input fails with
//! `RecursionLimitExceeded` instead of exhausting the stack.

mod core;
mod cursor;
mod grammar;
mod lexical;

#[cfg(test)]
mod tests;

pub use core::{DEFAULT_RECURSION_LIMIT, Parser};

use crate::ast::Resource;
use crate::diagnostics::ParseError;

/// Parse `source` with the default configuration.
pub fn parse(source: &str) -> Result<Resource, ParseError> {
    Parser::new(source).parse()
}
