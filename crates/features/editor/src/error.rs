/// Editor slice error type.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The request carried an empty hero type.
    #[error("heroType must not be empty")]
    EmptyHeroType,

    /// Asset-store failure: missing file, invalid name, I/O.
    #[cfg(feature = "server")]
    #[error(transparent)]
    Asset(#[from] wsite_assets::AssetError),
}
