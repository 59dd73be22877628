//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
///
/// Without a subcommand the binary starts the REPL.
pub fn build_cli() -> Command {
    Command::new("geokv")
        .about("Parse and inspect geokv key/geometry statements")
        .subcommand(repl_command())
        .subcommand(parse_command())
        .subcommand(tokens_command())
        .subcommand(check_command())
}

/// Interactive read-parse-print loop.
pub fn repl_command() -> Command {
    Command::new("repl")
        .about("Read statements from stdin, one per line")
        .after_help(
            r#"EXAMPLES:
  geokv                               # same as `geokv repl`
  geokv repl --prompt '> '            # custom prompt
  geokv repl --format json -v         # JSON output, parser steps on stderr

Type .exit (or send end of input) to leave."#,
        )
        .arg(prompt_arg())
        .arg(format_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Parse a single statement.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse one statement and print it")
        .after_help(
            r#"EXAMPLES:
  geokv parse 'SET fleet 1 POINT +1 -2.0'
  geokv parse 'GET fleet 42' --format json
  geokv parse 'SET k i BOUNDS 1 2 3 4' -vv"#,
        )
        .arg(statement_arg())
        .arg(format_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Show the token stream of a statement.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the tokens of a statement")
        .after_help(
            r#"EXAMPLES:
  geokv tokens 'SET fleet 1 POINT 1.5 2'
  geokv tokens 'GET "my fleet" 7' --raw"#,
        )
        .arg(statement_arg())
        .arg(raw_arg())
        .arg(color_arg())
}

/// Validate a file of statements.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate every statement in a file")
        .after_help(
            r#"EXAMPLES:
  geokv check statements.txt
  cat statements.txt | geokv check -
  geokv check statements.txt --format json"#,
        )
        .arg(input_path_arg())
        .arg(format_arg())
        .arg(color_arg())
}
