//! geokv-parser: scanner and statement parser for geokv commands.
//!
//! Turns a one-line command such as `SET fleet truck-7 POINT 13.4 52.5` into a
//! typed [`PreparedStatement`] that borrows its key and id from the input.
//!
//! - `scanner` - byte-level tokenizer, one token per call, no allocation
//! - `keywords` - reserved words and case-insensitive keyword lookup
//! - `parser` - the statement state machine and tracing hooks
//! - `statement` - the parsed statement and its geometry
//! - `diagnostics` - error kinds, sinks and snippet rendering
//!
//! # Example
//!
//! ```
//! use geokv_parser::{CommandType, Geometry, parse};
//!
//! let statement = parse("SET fleet 1 POINT +1 -2.0").unwrap();
//! assert_eq!(statement.command(), CommandType::Set);
//! assert_eq!(statement.key(), "fleet");
//!
//! let Some(Geometry::Point(point)) = statement.geometry() else { unreachable!() };
//! assert_eq!((point.x, point.y, point.z), (1.0, -2.0, None));
//!
//! let error = parse("DROP fleet extra").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "EXPECTED_END_OF_TOKENS(12) - cause: Expected end of tokens in DROP statement. position in statement 11."
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod colors;

pub mod diagnostics;
pub mod keywords;
pub mod parser;
pub mod scanner;
pub mod statement;


pub use colors::Colors;
pub use diagnostics::{ErrorKind, ErrorPrinter, ErrorSink, ParseError, report};
pub use keywords::{Keyword, eq_ignore_case, is_reserved};
pub use parser::{NoopTracer, Parser, PrintTracer, Step, Tracer, Verbosity, parse, parse_with_sink};
pub use scanner::{
    MAX_STATEMENT_LEN, RawToken, Token, TokenKind, is_space, next_token, token_text, tokenize,
};
pub use statement::{BoundingBox, CommandType, Geometry, Point, PreparedStatement};

/// Result type for statement parsing.
pub type Result<'src> = std::result::Result<PreparedStatement<'src>, ParseError>;
