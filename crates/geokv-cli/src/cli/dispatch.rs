//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch to command handlers, resolving
//!   color detection and verbosity on the way

use std::path::PathBuf;

use clap::ArgMatches;
use geokv_parser::Verbosity;

use super::args::DEFAULT_PROMPT;
use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::parse::ParseArgs;
use crate::commands::repl::ReplArgs;
use crate::commands::tokens::TokensArgs;

pub struct ReplParams {
    pub prompt: String,
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl Default for ReplParams {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            format: OutputFormat::default(),
            color: ColorChoice::default(),
            verbose: 0,
        }
    }
}

impl ReplParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            prompt: m
                .get_one::<String>("prompt")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            format: parse_format(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ReplParams> for ReplArgs {
    fn from(p: ReplParams) -> Self {
        Self {
            prompt: p.prompt,
            format: p.format,
            color: p.color.should_colorize(),
            verbosity: verbosity_from_count(p.verbose),
        }
    }
}

pub struct ParseParams {
    pub statement: String,
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            statement: m.get_one::<String>("statement").cloned().unwrap_or_default(),
            format: parse_format(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            statement: p.statement,
            format: p.format,
            color: p.color.should_colorize(),
            verbosity: verbosity_from_count(p.verbose),
        }
    }
}

pub struct TokensParams {
    pub statement: String,
    pub raw: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            statement: m.get_one::<String>("statement").cloned().unwrap_or_default(),
            raw: m.get_flag("raw"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            statement: p.statement,
            raw: p.raw,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    m.get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default()
}

/// `-v` traces steps, `-vv` and above also tokens.
pub(super) fn verbosity_from_count(count: u8) -> Option<Verbosity> {
    match count {
        0 => None,
        1 => Some(Verbosity::Default),
        _ => Some(Verbosity::Verbose),
    }
}
