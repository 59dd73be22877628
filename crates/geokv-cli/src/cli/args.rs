//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::builder::EnumValueParser;
use clap::{Arg, ArgAction, value_parser};

use super::OutputFormat;

pub const DEFAULT_PROMPT: &str = "db > ";

/// Statement text (positional).
pub fn statement_arg() -> Arg {
    Arg::new("statement")
        .value_name("STATEMENT")
        .required(true)
        .help("Statement text, e.g. 'SET fleet 1 POINT 13.4 52.5'")
}

/// Statement file (positional), `-` for stdin.
pub fn input_path_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("File with one statement per line (- for stdin)")
}

/// REPL prompt (--prompt).
pub fn prompt_arg() -> Arg {
    Arg::new("prompt")
        .long("prompt")
        .value_name("TEXT")
        .default_value(DEFAULT_PROMPT)
        .help("Prompt printed before each statement")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(EnumValueParser::<OutputFormat>::new())
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Parser trace (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Trace the parser (-v for steps, -vv for every token)")
}

/// Include space tokens (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include space tokens")
}
