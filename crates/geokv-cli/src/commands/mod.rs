pub mod check;
pub mod error;
pub mod output;
pub mod parse;
pub mod repl;
pub mod run_common;
pub mod tokens;
