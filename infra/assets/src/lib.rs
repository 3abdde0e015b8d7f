//! A sandboxed store for the static JSON assets of a site instance.
//!
//! The content and theme documents that drive a page are loaded once per
//! process and shared as `Arc` handles; the only mutation path is the
//! editor's in-place rewrite, which goes through an atomic temp-write +
//! rename so readers never observe a torn document.
//!
//! # Core guarantees
//!
//! - **Sandboxing**: documents are addressed by plain `*.json` file names;
//!   anything with a path separator or `..` is rejected up front.
//! - **Parse-once reads**: documents are cached after the first read and
//!   handed out as shared handles.
//! - **Atomic rewrites**: interrupted writes leave only a temp file, which
//!   the next startup sweeps away.
//!
//! # Example
//!
//! ```rust,no_run
//! use wsite_assets::{AssetStore, AssetError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AssetError> {
//!     let store = AssetStore::builder().root("assets/content").connect().await?;
//!
//!     let content = store.document("default.json").await?;
//!     assert!(content.is_object());
//!
//!     store.rewrite("default.json", |doc| {
//!         doc["hero"]["type"] = "video".into();
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod maintenance;
mod security;
mod store;

pub use builder::AssetStoreBuilder;
pub use error::AssetError;
pub use store::AssetStore;
