use std::path::PathBuf;

/// Errors surfaced by the asset store.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The document name is not a plain `*.json` file name.
    #[error("invalid asset name `{0}`: must be a single `.json` file name")]
    InvalidName(String),

    /// The resolved path would leave the store root.
    #[error("asset path escapes the store root: {0}")]
    Sandbox(String),

    /// The named document does not exist under the store root.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The document exists but is not valid JSON.
    #[error("failed to parse asset `{name}`: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying filesystem failure.
    #[error("asset I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
