/// Theme slice error type.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme asset is not a flat role/value map.
    #[error("theme asset `{name}` is malformed: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The theme asset could not be loaded.
    #[cfg(feature = "server")]
    #[error(transparent)]
    Asset(#[from] wsite_assets::AssetError),
}
