//! Interactive loop: prompt, read one line, parse, print.

use std::io::{self, BufRead, Write};

use geokv_parser::{Verbosity, is_space};

use super::error::CliError;
use super::output::{Origin, write_statement};
use super::run_common::Session;
use crate::cli::OutputFormat;

/// Literal line that ends the session.
pub const EXIT_COMMAND: &str = ".exit";

pub struct ReplArgs {
    pub prompt: String,
    pub format: OutputFormat,
    pub color: bool,
    pub verbosity: Option<Verbosity>,
}

pub fn run(args: ReplArgs) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_loop(
        &args,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Runs until `.exit` or end of input. Rejected statements do not stop the
/// loop; I/O failures do.
pub fn run_loop(
    args: &ReplArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let session = Session {
        format: args.format,
        color: args.color,
        verbosity: args.verbosity,
    };
    let mut buffer = String::new();

    loop {
        write!(out, "{}", args.prompt)?;
        out.flush()?;

        buffer.clear();
        let read = input.read_line(&mut buffer)?;
        if read == 0 {
            // end the prompt line
            writeln!(out)?;
            return Ok(());
        }

        let line = strip_line_ending(&buffer);
        if args.verbosity.is_some() {
            writeln!(err, "read {read} bytes")?;
            writeln!(err, "command read in: {line}")?;
        }

        if line == EXIT_COMMAND {
            return Ok(());
        }
        if line.bytes().all(is_space) {
            continue;
        }

        if let Some(statement) = session.execute(line, Origin::default(), out, err)? {
            write_statement(out, &statement, args.format)?;
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
