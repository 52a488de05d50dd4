mod message;
mod printer;


use rowan::TextRange;
use serde::Serialize;

pub use message::{ErrorKind, LineCol, RelatedInfo};
pub use printer::ErrorPrinter;

/// A syntax error with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message} at {position}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub range: TextRange,
    pub position: LineCol,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedInfo>,
}

#[must_use = "error not built, call .finish()"]
pub struct ErrorBuilder<'s> {
    source: &'s str,
    kind: ErrorKind,
    range: TextRange,
    detail: Option<String>,
    related: Option<RelatedInfo>,
}

impl ParseError {
    /// Start an error of `kind` at `range` in `source`.
    ///
    /// Uses the kind's default message. Call `.detail()` on the builder to extend it.
    pub fn report(source: &str, kind: ErrorKind, range: TextRange) -> ErrorBuilder<'_> {
        ErrorBuilder {
            source,
            kind,
            range,
            detail: None,
            related: None,
        }
    }

    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ErrorPrinter<'e, 's> {
        ErrorPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }
}

impl ErrorBuilder<'_> {
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn related_to(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related = Some(RelatedInfo::new(range, message));
        self
    }

    pub fn finish(self) -> ParseError {
        let offset = u32::from(self.range.start()) as usize;
        ParseError {
            kind: self.kind,
            range: self.range,
            position: LineCol::of(self.source, offset),
            message: self.kind.message(self.detail.as_deref()),
            related: self.related,
        }
    }
}
