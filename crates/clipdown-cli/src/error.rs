//! CLI error types.

use clipdown::ClipdownError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Clipdown(#[from] ClipdownError),
}
