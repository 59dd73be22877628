use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use geokv_parser::is_space;

use super::error::CliError;
use super::output::Origin;
use super::run_common::Session;
use crate::cli::OutputFormat;

pub struct CheckArgs {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let text = load_input(&args.input)?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(&args, &text, &mut stdout.lock(), &mut stderr.lock())
}

/// Parses every non-blank line of `text`. Silent on success (like cargo check).
pub fn run_with(
    args: &CheckArgs,
    text: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let session = Session {
        format: args.format,
        color: args.color,
        verbosity: None,
    };
    let path = display_name(&args.input);

    let mut rejected = 0;
    for (index, line) in text.lines().enumerate() {
        if line.bytes().all(is_space) {
            continue;
        }
        let origin = Origin {
            path: Some(path.as_str()),
            line: Some(index + 1),
        };
        if session.execute(line, origin, out, err)?.is_none() {
            rejected += 1;
        }
    }

    if rejected > 0 {
        return Err(CliError::Rejected(rejected));
    }
    Ok(())
}

fn load_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        return "<stdin>".to_string();
    }
    path.display().to_string()
}
