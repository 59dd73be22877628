//! Statement parser.
//!
//! # Architecture
//!
//! A single forward pass over the scanner's tokens drives a finite state
//! machine ([`Step`]). Spaces are skipped in every state; an `Error` token
//! aborts immediately. Each state accepts one token class, records what it
//! needs and moves on:
//!
//! ```text
//! command -> key -> id -> geometry keyword -> x -> y -> z          (POINT)
//!                                                  -> x2 -> y2     (BOUNDS)
//! ```
//!
//! `DROP` stops after the key, `GET`/`DEL` after the id. Parsing is fail-fast:
//! the first violation is returned and no partial statement escapes.
//!
//! The parser is generic over a [`Tracer`], so debugging output costs nothing
//! when [`NoopTracer`] is used.

mod core;
mod invariants;
mod number;
mod step;
mod trace;

#[cfg(test)]
mod tests;

pub use core::Parser;
pub use step::Step;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

use crate::diagnostics::{ErrorSink, ParseError, report};
use crate::statement::PreparedStatement;

/// Main entry point.
pub fn parse(source: &str) -> Result<PreparedStatement<'_>, ParseError> {
    Parser::new(source).parse()
}

/// Like [`parse`], additionally reporting a failure to `sink`.
///
/// The sink is called exactly once when parsing fails and never on success.
pub fn parse_with_sink<'src>(
    source: &'src str,
    sink: &mut impl ErrorSink,
) -> Result<PreparedStatement<'src>, ParseError> {
    let result = parse(source);
    if let Err(error) = &result {
        report(sink, error);
    }
    result
}
