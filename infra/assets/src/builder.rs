use crate::error::AssetError;
use crate::store::{AssetStore, StoreInner};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::fs;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Type-safe fluent builder for the asset store; a root directory must be
/// supplied before [`AssetStoreBuilder::connect`] becomes available.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct AssetStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    create: bool,
}

impl Default for AssetStoreBuilder<NoRoot> {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetStoreBuilder<NoRoot> {
    #[must_use = "Creates a new asset store builder with default configuration"]
    pub fn new() -> Self {
        Self { state: NoRoot, create: true }
    }

    #[must_use = "Sets the root directory path for the asset store"]
    pub fn root(self, path: impl Into<PathBuf>) -> AssetStoreBuilder<WithRoot> {
        AssetStoreBuilder { state: WithRoot(path.into()), create: self.create }
    }
}

#[allow(private_bounds)]
impl<S: Sealed> AssetStoreBuilder<S> {
    #[must_use = "Sets whether the root directory should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.create = enable;
        self
    }
}

impl AssetStoreBuilder<WithRoot> {
    /// Consumes the configuration and opens the asset store.
    ///
    /// Boot sequence:
    /// 1. Creates the root directory if `create(true)` was set.
    /// 2. Canonicalizes the root to an absolute physical path, so the
    ///    sandbox containment check cannot be fooled by symlinked roots.
    /// 3. Scans the root for temp files left behind by interrupted rewrites
    ///    and removes the stale ones (non-critical; failures are logged).
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Io`] if the root does not exist and `create` is
    /// false, or if the process lacks permissions to create or resolve it.
    pub async fn connect(self) -> Result<AssetStore, AssetError> {
        let root = &self.state.0;

        if self.create {
            fs::create_dir_all(root)
                .await
                .map_err(|source| AssetError::Io { path: root.clone(), source })?;
        }

        let canonical = fs::canonicalize(root)
            .await
            .map_err(|source| AssetError::Io { path: root.clone(), source })?;

        info!(path = %canonical.display(), "Opened asset store");

        let store = AssetStore {
            inner: Arc::new(StoreInner {
                root: canonical,
                cache: RwLock::new(FxHashMap::default()),
                tmp_counter: AtomicU64::new(1),
            }),
        };

        store.purge_tmp().await;

        Ok(store)
    }
}
