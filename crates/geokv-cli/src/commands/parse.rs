use std::io::{self, Write};

use geokv_parser::Verbosity;

use super::error::CliError;
use super::output::{Origin, write_statement};
use super::run_common::Session;
use crate::cli::OutputFormat;

pub struct ParseArgs {
    pub statement: String,
    pub format: OutputFormat,
    pub color: bool,
    pub verbosity: Option<Verbosity>,
}

pub fn run(args: ParseArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(&args, &mut stdout.lock(), &mut stderr.lock())
}

pub fn run_with(
    args: &ParseArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let session = Session {
        format: args.format,
        color: args.color,
        verbosity: args.verbosity,
    };

    match session.execute(&args.statement, Origin::default(), out, err)? {
        Some(statement) => write_statement(out, &statement, args.format),
        None => Err(CliError::Rejected(1)),
    }
}
