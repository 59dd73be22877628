//! Tracing hooks for debugging the parser.
//!
//! The parser is generic over [`Tracer`]. With [`NoopTracer`] every hook is an
//! empty `#[inline(always)]` function and the calls compile away. Tracing-only
//! state lives in the tracer, never in the parser.

use crate::Colors;
use crate::diagnostics::ParseError;
use crate::scanner::Token;
use crate::statement::PreparedStatement;

use super::step::Step;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default (-v): state transitions and the outcome.
    #[default]
    Default,
    /// Verbose (-vv): also every scanned token, spaces included.
    Verbose,
}

/// Parser instrumentation.
///
/// - `trace_token` - for every scanned token, before it is handled
/// - `trace_step` - when the state machine moves to another state
/// - `trace_accept` / `trace_reject` - once, with the outcome
pub trait Tracer {
    fn trace_token(&mut self, step: Step, token: &Token, text: &str);

    fn trace_step(&mut self, from: Step, to: Step);

    fn trace_accept(&mut self, statement: &PreparedStatement<'_>);

    fn trace_reject(&mut self, error: &ParseError);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_token(&mut self, _step: Step, _token: &Token, _text: &str) {}

    #[inline(always)]
    fn trace_step(&mut self, _from: Step, _to: Step) {}

    #[inline(always)]
    fn trace_accept(&mut self, _statement: &PreparedStatement<'_>) {}

    #[inline(always)]
    fn trace_reject(&mut self, _error: &ParseError) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    #[inline(always)]
    fn trace_token(&mut self, step: Step, token: &Token, text: &str) {
        (**self).trace_token(step, token, text);
    }

    #[inline(always)]
    fn trace_step(&mut self, from: Step, to: Step) {
        (**self).trace_step(from, to);
    }

    #[inline(always)]
    fn trace_accept(&mut self, statement: &PreparedStatement<'_>) {
        (**self).trace_accept(statement);
    }

    #[inline(always)]
    fn trace_reject(&mut self, error: &ParseError) {
        (**self).trace_reject(error);
    }
}

/// Tracer that collects a human-readable trace.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Tracer for PrintTracer {
    fn trace_token(&mut self, step: Step, token: &Token, text: &str) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        self.lines.push(format!(
            "{}{:>4}{} {:<8} {:?} {:?}",
            c.dim,
            token.offset(),
            c.reset,
            step.to_string(),
            token.kind,
            text
        ));
    }

    fn trace_step(&mut self, from: Step, to: Step) {
        let c = self.colors;
        self.lines.push(format!(
            "     {}{from}{} -> {}{to}{}",
            c.blue, c.reset, c.blue, c.reset
        ));
    }

    fn trace_accept(&mut self, statement: &PreparedStatement<'_>) {
        let c = self.colors;
        self.lines
            .push(format!("{}accept{} {statement}", c.green, c.reset));
    }

    fn trace_reject(&mut self, error: &ParseError) {
        let c = self.colors;
        self.lines.push(format!(
            "{}reject{} {}({}) at {}: {}",
            c.red,
            c.reset,
            error.kind().name(),
            error.kind().code(),
            error.offset(),
            error.cause()
        ));
    }
}
