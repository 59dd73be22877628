//! Writers shared by the commands: accepted statements and diagnostics.

use std::io::{self, Write};

use geokv_parser::{ErrorSink, ParseError, PreparedStatement};
use serde::Serialize;

use super::error::CliError;
use crate::cli::OutputFormat;

/// Error sink writing `Error code: <code>. Message: <message>` lines.
///
/// The first write failure is kept and returned by [`WriterSink::finish`].
pub struct WriterSink<'w, W: Write> {
    out: &'w mut W,
    result: io::Result<()>,
}

impl<'w, W: Write> WriterSink<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self {
            out,
            result: Ok(()),
        }
    }

    pub fn finish(self) -> io::Result<()> {
        self.result
    }
}

impl<W: Write> ErrorSink for WriterSink<'_, W> {
    fn report(&mut self, code: i32, message: &str) {
        if self.result.is_ok() {
            self.result = writeln!(self.out, "Error code: {code}. Message: {message}");
        }
    }
}

/// Location of a statement inside a file, for diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct Origin<'a> {
    pub path: Option<&'a str>,
    pub line: Option<usize>,
}

#[derive(Serialize)]
struct ErrorRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    error: &'a ParseError,
}

pub fn write_statement(
    out: &mut impl Write,
    statement: &PreparedStatement<'_>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(out, "{statement}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, statement)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Text: snippet on `err`. JSON: one error object on `out`.
pub fn write_error(
    out: &mut impl Write,
    err: &mut impl Write,
    error: &ParseError,
    source: &str,
    origin: Origin<'_>,
    format: OutputFormat,
    color: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            let mut printer = error.printer(source).colored(color);
            if let Some(path) = origin.path {
                printer = printer.path(path);
            }
            if let Some(line) = origin.line {
                printer = printer.line(line);
            }
            writeln!(err, "{}", printer.render())?;
        }
        OutputFormat::Json => {
            let record = ErrorRecord {
                line: origin.line,
                error,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
