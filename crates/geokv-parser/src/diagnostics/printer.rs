//! Builder-pattern printer for rendering a parse error against its statement.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::ParseError;

/// Renders a [`ParseError`] as a source snippet with the offending token underlined.
pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: &'s str,
    path: Option<&'s str>,
    line: usize,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            line: 1,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    /// Line number shown for the statement (statements are single lines).
    pub fn line(mut self, line: usize) -> Self {
        self.line = line;
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

        let range = adjust_range(
            self.error.offset(),
            self.error.offset() + usize::from(self.error.span().len()),
            self.source.len(),
        );

        let mut snippet = Snippet::source(self.source).line_start(self.line).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(self.error.cause()),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let title = format!("{}({})", self.error.kind().name(), self.error.kind().code());
        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];

        write!(w, "{}", renderer.render(&report))
    }
}

/// Empty spans (end of input) are widened to one byte where possible so the
/// caret has something to point at.
fn adjust_range(start: usize, end: usize, limit: usize) -> std::ops::Range<usize> {
    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
