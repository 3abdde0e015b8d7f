use wsite_domain::content::MalformedContent;

/// Content slice error type.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The base content asset does not satisfy the document shape.
    #[error("base content document is malformed: {0}")]
    Malformed(#[from] MalformedContent),

    /// The base content asset could not be loaded.
    #[cfg(feature = "server")]
    #[error(transparent)]
    Asset(#[from] wsite_assets::AssetError),
}
