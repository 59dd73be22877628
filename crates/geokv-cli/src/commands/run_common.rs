//! Parsing one statement with diagnostics and optional trace, shared by
//! `repl`, `parse` and `check`.

use std::io::Write;

use geokv_parser::{
    Colors, ParseError, Parser, PreparedStatement, PrintTracer, Verbosity, report,
};

use super::error::CliError;
use super::output::{Origin, WriterSink, write_error};
use crate::cli::OutputFormat;

pub struct Session {
    pub format: OutputFormat,
    pub color: bool,
    pub verbosity: Option<Verbosity>,
}

impl Session {
    /// Parses `source`, writing the trace and any diagnostics.
    ///
    /// Returns the statement on success, `None` after a reported failure.
    pub fn execute<'s>(
        &self,
        source: &'s str,
        origin: Origin<'_>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Option<PreparedStatement<'s>>, CliError> {
        let result = self.parse(source, err)?;

        match result {
            Ok(statement) => Ok(Some(statement)),
            Err(error) => {
                let mut sink = WriterSink::new(err);
                report(&mut sink, &error);
                sink.finish()?;

                write_error(out, err, &error, source, origin, self.format, self.color)?;
                Ok(None)
            }
        }
    }

    fn parse<'s>(
        &self,
        source: &'s str,
        err: &mut impl Write,
    ) -> Result<Result<PreparedStatement<'s>, ParseError>, CliError> {
        let Some(verbosity) = self.verbosity else {
            return Ok(geokv_parser::parse(source));
        };

        let mut tracer = PrintTracer::new(verbosity, Colors::new(self.color));
        let result = Parser::new(source).with_tracer(&mut tracer).parse();
        write!(err, "{}", tracer.render())?;
        Ok(result)
    }
}
