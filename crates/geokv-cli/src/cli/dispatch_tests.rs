//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Defaults: omitted flags fall back to documented values
//! 3. Rejection: invalid values are caught by clap

use std::path::PathBuf;

use geokv_parser::Verbosity;

use super::commands::{build_cli, check_command, parse_command, repl_command, tokens_command};
use super::dispatch::verbosity_from_count;
use super::*;

#[test]
fn repl_defaults() {
    let m = repl_command().try_get_matches_from(["repl"]).unwrap();
    let params = ReplParams::from_matches(&m);

    assert_eq!(params.prompt, "db > ");
    assert_eq!(params.format, OutputFormat::Text);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbose, 0);
}

#[test]
fn repl_default_params_match_parsed_defaults() {
    let m = repl_command().try_get_matches_from(["repl"]).unwrap();
    let parsed = ReplParams::from_matches(&m);
    let default = ReplParams::default();

    assert_eq!(parsed.prompt, default.prompt);
    assert_eq!(parsed.format, default.format);
    assert_eq!(parsed.color, default.color);
    assert_eq!(parsed.verbose, default.verbose);
}

#[test]
fn repl_flags() {
    let m = repl_command()
        .try_get_matches_from([
            "repl", "--prompt", "> ", "--format", "json", "--color", "never", "-vv",
        ])
        .unwrap();
    let params = ReplParams::from_matches(&m);

    assert_eq!(params.prompt, "> ");
    assert_eq!(params.format, OutputFormat::Json);
    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.verbose, 2);
}

#[test]
fn parse_extracts_statement() {
    let m = parse_command()
        .try_get_matches_from(["parse", "SET fleet 1 POINT 1 2", "-v"])
        .unwrap();
    let params = ParseParams::from_matches(&m);

    assert_eq!(params.statement, "SET fleet 1 POINT 1 2");
    assert_eq!(params.verbose, 1);
}

#[test]
fn parse_requires_statement() {
    let result = parse_command().try_get_matches_from(["parse"]);
    assert!(result.is_err());
}

#[test]
fn tokens_raw_flag() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "GET a 1", "--raw", "--color", "always"])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.statement, "GET a 1");
    assert!(params.raw);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn check_extracts_path() {
    let m = check_command()
        .try_get_matches_from(["check", "statements.txt", "--format", "json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("statements.txt"));
    assert_eq!(params.format, OutputFormat::Json);
}

#[test]
fn check_accepts_stdin_marker() {
    let m = check_command().try_get_matches_from(["check", "-"]).unwrap();
    assert_eq!(CheckParams::from_matches(&m).input, PathBuf::from("-"));
}

#[test]
fn invalid_format_rejected() {
    let result = parse_command().try_get_matches_from(["parse", "GET a 1", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn invalid_color_rejected() {
    let result = repl_command().try_get_matches_from(["repl", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn no_subcommand_is_accepted() {
    let m = build_cli().try_get_matches_from(["geokv"]).unwrap();
    assert!(m.subcommand().is_none());
}

#[test]
fn subcommands_dispatch_by_name() {
    let m = build_cli()
        .try_get_matches_from(["geokv", "tokens", "DROP fleet"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("tokens"));
}

#[test]
fn verbosity_levels() {
    assert_eq!(verbosity_from_count(0), None);
    assert_eq!(verbosity_from_count(1), Some(Verbosity::Default));
    assert_eq!(verbosity_from_count(3), Some(Verbosity::Verbose));
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
