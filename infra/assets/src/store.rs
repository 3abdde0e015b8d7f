//! The asset store: parse-once cached reads and atomic in-place rewrites of
//! the static JSON documents that drive a site instance.

use crate::builder::AssetStoreBuilder;
use crate::error::AssetError;
use crate::maintenance::{self, TMP_MARKER};
use crate::security;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// The internal shared state of an [`AssetStore`] instance.
#[derive(Debug)]
pub struct StoreInner {
    /// The canonicalized physical root under which all documents live.
    pub(crate) root: PathBuf,
    /// Parsed documents, shared out as cheap `Arc` handles.
    pub(crate) cache: RwLock<FxHashMap<String, Arc<Value>>>,
    /// A unique counter used to generate temporary file names.
    pub(crate) tmp_counter: AtomicU64,
}

/// A thread-safe handle to the JSON asset store.
///
/// Documents are addressed by plain file name (`default.json`), never by
/// path: names with separators or `..` are rejected before touching the
/// filesystem, which keeps every operation inside the store root. Reads are
/// parsed once and cached; [`AssetStore::rewrite`] swaps the file atomically
/// (unique temp write + rename) and refreshes the cache entry, so a crash
/// mid-write never leaves a truncated document behind.
///
/// The handle is internally reference-counted and can be cheaply cloned
/// across tasks.
#[derive(Debug, Clone)]
pub struct AssetStore {
    pub(crate) inner: Arc<StoreInner>,
}

impl Deref for AssetStore {
    type Target = StoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AssetStore {
    #[must_use = "The asset store is not opened until you call .connect()"]
    pub fn builder() -> AssetStoreBuilder {
        AssetStoreBuilder::new()
    }

    /// The canonical store root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Checks whether a named document exists under the root.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::InvalidName`] for names that are not a plain
    /// `*.json` file name.
    pub fn exists(&self, name: &str) -> Result<bool, AssetError> {
        let resolved = security::resolve_name(&self.root, name)?;
        Ok(resolved.is_file())
    }

    /// Returns the parsed document, reading and caching it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if the document does not exist,
    /// [`AssetError::Parse`] if it is not valid JSON.
    pub async fn document(&self, name: &str) -> Result<Arc<Value>, AssetError> {
        if let Some(cached) = self.cache.read().get(name) {
            return Ok(Arc::clone(cached));
        }
        self.reload(name).await
    }

    /// Reads and parses the document from disk, replacing any cache entry.
    pub async fn reload(&self, name: &str) -> Result<Arc<Value>, AssetError> {
        let resolved = security::resolve_name(&self.root, name)?;

        let raw = match fs::read(&resolved).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssetError::NotFound(name.to_owned()));
            },
            Err(source) => return Err(AssetError::Io { path: resolved, source }),
        };

        let value: Value = serde_json::from_slice(&raw)
            .map_err(|source| AssetError::Parse { name: name.to_owned(), source })?;

        let shared = Arc::new(value);
        self.cache.write().insert(name.to_owned(), Arc::clone(&shared));

        debug!(name, "Asset document loaded");
        Ok(shared)
    }

    /// Applies a mutation to a document and persists it atomically.
    ///
    /// The current on-disk document is read, the closure mutates it, and the
    /// result is written through a unique temp file followed by a rename.
    /// The cache entry is refreshed with the new value, which is also
    /// returned. The target file must already exist: this is a rewrite
    /// primitive, not a create primitive.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if the document does not exist (and
    /// nothing is created), [`AssetError::Io`] on filesystem failure.
    pub async fn rewrite<F>(&self, name: &str, mutate: F) -> Result<Arc<Value>, AssetError>
    where
        F: FnOnce(&mut Value),
    {
        let resolved = security::resolve_name(&self.root, name)?;
        if !resolved.is_file() {
            return Err(AssetError::NotFound(name.to_owned()));
        }

        let mut value = Value::clone(&*self.reload(name).await?);
        mutate(&mut value);

        let payload = serde_json::to_vec_pretty(&value)
            .map_err(|source| AssetError::Parse { name: name.to_owned(), source })?;

        self.write_atomic(&resolved, &payload).await?;

        let shared = Arc::new(value);
        self.cache.write().insert(name.to_owned(), Arc::clone(&shared));

        debug!(name, "Asset document rewritten");
        Ok(shared)
    }

    /// Drops the cache entry for a document, forcing the next read to hit disk.
    pub fn invalidate(&self, name: &str) {
        self.cache.write().remove(name);
    }

    pub(crate) async fn purge_tmp(&self) {
        maintenance::purge_tmp(&self.root).await;
    }

    /// Unique temp write + fsync + rename, so the target is never observed
    /// in a partially written state.
    async fn write_atomic(&self, target: &Path, payload: &[u8]) -> Result<(), AssetError> {
        let id = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let mut tmp_name = target.as_os_str().to_owned();
        tmp_name.push(format!("{TMP_MARKER}{id}"));
        let tmp = PathBuf::from(tmp_name);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&tmp)
                .await
                .map_err(|source| AssetError::Io { path: tmp.clone(), source })?;
            file.write_all(payload)
                .await
                .map_err(|source| AssetError::Io { path: tmp.clone(), source })?;
            file.sync_all()
                .await
                .map_err(|source| AssetError::Io { path: tmp.clone(), source })?;
        }

        if let Err(err) = fs::rename(&tmp, target).await {
            // Platforms without atomic replace: remove then retry once.
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                fs::remove_file(target)
                    .await
                    .map_err(|source| AssetError::Io { path: target.to_path_buf(), source })?;
                fs::rename(&tmp, target)
                    .await
                    .map_err(|source| AssetError::Io { path: target.to_path_buf(), source })?;
            } else {
                return Err(AssetError::Io { path: target.to_path_buf(), source: err });
            }
        }

        Ok(())
    }
}
