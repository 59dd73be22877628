use std::io;
use std::path::PathBuf;

/// Failures of a CLI command. Parse failures are reported as diagnostics
/// first; [`CliError::Rejected`] only carries the exit status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} statement(s) rejected")]
    Rejected(usize),
}
