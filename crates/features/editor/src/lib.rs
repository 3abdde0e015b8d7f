//! Editor feature slice.
//!
//! A debug/administrative side channel that rewrites one field
//! (`hero.type`) of a named content document in place. It is not part of
//! the resolution pipeline and deliberately stays minimal: one endpoint,
//! plain-file-name addressing, no partial updates beyond the hero type.

mod error;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::EditorError;

use wsite_domain::registry::FeatureSlice;
#[cfg(feature = "server")]
use wsite_domain::registry::InitializedSlice;

/// Editor feature state.
#[derive(Debug)]
pub struct Editor {}

impl FeatureSlice for Editor {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "editor"
    }
}

/// Initialize the editor feature.
///
/// # Errors
///
/// Infallible today; kept fallible for uniform slice bootstrapping.
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, EditorError> {
    tracing::info!("Editor slice initialized");

    Ok(InitializedSlice::new(Editor {}))
}
