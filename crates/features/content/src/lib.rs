//! Content resolution feature slice.
//!
//! Owns the path from a request's query string to the content document the
//! page renders: extraction of recognized overrides, the structural merge
//! onto the immutable base document, and the facade that sequences the two.

mod error;
mod merge;
mod overrides;
mod resolve;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::ContentError;
pub use crate::merge::{MergePolicy, merge_content};
pub use crate::overrides::{RECOGNIZED_PARAMS, extract_overrides};
pub use crate::resolve::{ContentResolver, OverrideSink, RequestContext, TraceSink};

use wsite_domain::registry::FeatureSlice;
#[cfg(feature = "server")]
use wsite_domain::registry::InitializedSlice;

/// Content feature state: the resolver built over the base document.
#[derive(Debug)]
pub struct Content {
    resolver: ContentResolver,
}

impl Content {
    #[must_use]
    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }
}

impl FeatureSlice for Content {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "content"
    }
}

/// Initialize the content feature.
///
/// Loads the base content document from the asset store and validates its
/// shape once; resolution never re-reads the asset.
///
/// # Errors
///
/// Returns an error if the base asset is missing, unparseable, or missing a
/// required section.
#[cfg(feature = "server")]
pub async fn init(
    config: &wsite_domain::config::SiteConfig,
    assets: &wsite_assets::AssetStore,
) -> Result<InitializedSlice, ContentError> {
    use wsite_domain::content::ContentDocument;

    let raw = assets.document(&config.assets.default_document).await?;
    let base = ContentDocument::from_value(serde_json::Value::clone(&raw))?;

    tracing::info!(document = %config.assets.default_document, "Content slice initialized");

    Ok(InitializedSlice::new(Content { resolver: ContentResolver::new(base) }))
}
