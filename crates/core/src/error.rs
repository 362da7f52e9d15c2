use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BundleError {
    #[error("failed to read results file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("results payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid backend origin: {raw}")]
    InvalidOrigin { raw: String },
}
