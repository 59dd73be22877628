mod cli;
mod commands;

use cli::{CheckParams, ParseParams, ReplParams, TokensParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("repl", m)) => {
            let params = ReplParams::from_matches(m);
            commands::repl::run(params.into())
        }
        Some(("parse", m)) => {
            let params = ParseParams::from_matches(m);
            commands::parse::run(params.into())
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into())
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into())
        }
        None => commands::repl::run(ReplParams::default().into()),
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
