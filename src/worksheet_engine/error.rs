use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a worksheet run. None of these are retried.
#[derive(Debug, Error)]
pub enum WorksheetError {
    #[error("operation kind `{0}` is not implemented")]
    UnknownOperationKind(String),

    /// Listed in the usage text but without a generator.
    #[error("operation kind `{0}` is reserved and not implemented yet")]
    NotImplemented(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("renderer failed on {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },

    #[error("failed to encode manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WorksheetError>;
