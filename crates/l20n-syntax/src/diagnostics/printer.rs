//! Builder-pattern printer for rendering a parse error against its source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::ParseError;

pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let error = self.error;
        let source = self.source;
        let range = adjust_range(error.range, source.len());

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&error.message));

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        if let Some(related) = &error.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.range, source.len()))
                    .label(&related.message),
            );
        }

        let mut report: Vec<Group> =
            vec![Level::ERROR.primary_title(&error.message).element(snippet)];

        if let Some(hint) = error.kind.default_hint() {
            report.push(Group::with_title(Level::HELP.secondary_title(hint)));
        }

        write!(w, "{}", renderer.render(&report))
    }
}

/// Empty ranges (errors at a single point) are widened to one character so
/// the caret is visible.
fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
