//! CLI error types.

use std::path::PathBuf;

use foxup_core::SinkError;

/// Failure converting one input file.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Sink(#[from] SinkError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
