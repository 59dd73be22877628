//! Parse failures and how they reach the caller.
//!
//! A parse fails with exactly one [`ParseError`]: a kind with a stable numeric
//! code, a short cause and the byte offset where the problem was detected.
//! Callers that want the classic callback style pass an [`ErrorSink`], which
//! receives `(code, message)` once per failed parse.

mod printer;

#[cfg(test)]
mod tests;

use rowan::TextRange;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub use printer::ErrorPrinter;

/// Failure kinds with their stable numeric codes.
///
/// Codes 0 (`PARSE_OK`) and 1 (`OUT_OF_MEMORY`) are reserved and never
/// produced, so existing consumers of the numbering keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum ErrorKind {
    /// Malformed number or unterminated quoted string.
    InvalidToken = 2,
    /// First word is not `GET`, `SET`, `DEL` or `DROP`.
    InvalidCommandType = 3,
    InvalidKeyValue = 4,
    InvalidIdValue = 5,
    /// Internal state machine inconsistency. Never caused by input.
    InvalidStep = 6,
    /// `SET` without `POINT` or `BOUNDS` after the id.
    InvalidBoundsOrPoint = 7,
    InvalidXValue = 8,
    InvalidYValue = 9,
    InvalidZValue = 10,
    /// Input ended where a token was required.
    EndOfTokensReached = 11,
    /// Tokens remain where the statement is already complete.
    ExpectedEndOfTokens = 12,
}

impl ErrorKind {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Upper snake case name used in rendered messages.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::InvalidToken => "INVALID_TOKEN",
            ErrorKind::InvalidCommandType => "INVALID_COMMAND_TYPE",
            ErrorKind::InvalidKeyValue => "INVALID_KEY_VALUE",
            ErrorKind::InvalidIdValue => "INVALID_ID_VALUE",
            ErrorKind::InvalidStep => "INVALID_STEP_ERROR",
            ErrorKind::InvalidBoundsOrPoint => "INVALID_BOUNDS_OR_POINT",
            ErrorKind::InvalidXValue => "INVALID_X_VALUE",
            ErrorKind::InvalidYValue => "INVALID_Y_VALUE",
            ErrorKind::InvalidZValue => "INVALID_Z_VALUE",
            ErrorKind::EndOfTokensReached => "END_OF_TOKENS_REACHED",
            ErrorKind::ExpectedEndOfTokens => "EXPECTED_END_OF_TOKENS",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        let kind = match code {
            2 => ErrorKind::InvalidToken,
            3 => ErrorKind::InvalidCommandType,
            4 => ErrorKind::InvalidKeyValue,
            5 => ErrorKind::InvalidIdValue,
            6 => ErrorKind::InvalidStep,
            7 => ErrorKind::InvalidBoundsOrPoint,
            8 => ErrorKind::InvalidXValue,
            9 => ErrorKind::InvalidYValue,
            10 => ErrorKind::InvalidZValue,
            11 => ErrorKind::EndOfTokensReached,
            12 => ErrorKind::ExpectedEndOfTokens,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether this kind signals a parser defect rather than bad input.
    pub fn is_internal(self) -> bool {
        self == ErrorKind::InvalidStep
    }
}

/// A failed parse: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{}({}) - cause: {}. position in statement {}.",
    .kind.name(),
    .kind.code(),
    .cause,
    .offset
)]
pub struct ParseError {
    kind: ErrorKind,
    cause: String,
    offset: usize,
    /// Length of the offending token, zero at the end of input.
    len: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, cause: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind,
            cause: cause.into(),
            offset: span.start().into(),
            len: span.len().into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Byte offset into the statement where the failure was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn span(&self) -> TextRange {
        crate::scanner::text_range(self.offset, self.len)
    }

    /// `<NAME>(<code>) - cause: <cause>. position in statement <offset>.`
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Snippet renderer pointing at the offending token in `source`.
    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ErrorPrinter<'e, 's> {
        ErrorPrinter::new(self, source)
    }
}

impl Serialize for ParseError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParseError", 5)?;
        state.serialize_field("kind", self.kind.name())?;
        state.serialize_field("code", &self.kind.code())?;
        state.serialize_field("cause", &self.cause)?;
        state.serialize_field("offset", &self.offset)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Receiver for failure reports: a numeric code and the rendered message.
pub trait ErrorSink {
    fn report(&mut self, code: i32, message: &str);
}

impl<F: FnMut(i32, &str)> ErrorSink for F {
    fn report(&mut self, code: i32, message: &str) {
        self(code, message)
    }
}

/// Formats `error` and hands it to `sink`.
pub fn report(sink: &mut impl ErrorSink, error: &ParseError) {
    sink.report(error.kind.code(), &error.message());
}
