use std::io::{self, Write};

use geokv_parser::{Colors, TokenKind, token_text, tokenize};

use super::error::CliError;

pub struct TokensArgs {
    pub statement: String,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    run_with(&args, &mut stdout.lock())
}

/// One `Kind "text"` line per token; spaces only with `--raw`.
pub fn run_with(args: &TokensArgs, out: &mut impl Write) -> Result<(), CliError> {
    let c = Colors::new(args.color);
    let source = args.statement.as_str();

    for token in tokenize(source) {
        if token.kind.is_trivia() && !args.raw {
            continue;
        }

        let kind_color = match token.kind {
            TokenKind::Error => c.red,
            TokenKind::Space => c.dim,
            TokenKind::Integer | TokenKind::Float | TokenKind::String => c.blue,
        };
        writeln!(
            out,
            "{}{:?}{} {}{:?}{}",
            kind_color,
            token.kind,
            c.reset,
            c.green,
            token_text(source, &token),
            c.reset
        )?;
    }

    Ok(())
}
