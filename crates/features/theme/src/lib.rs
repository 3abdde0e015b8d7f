//! Theme feature slice.
//!
//! Maps scheme names to fixed sets of color roles and resolves the theme
//! document served to the rendering layer. Application of properties to a
//! live environment is injected through [`StyleTarget`] so the logic stays
//! pure and testable.

mod apply;
mod error;
#[cfg(feature = "server")]
pub mod routes;
mod schemes;

pub use crate::apply::{
    DiscardTarget, PropertyMap, SchemeStore, StyleTarget, apply_color_scheme,
};
pub use crate::error::ThemeError;
pub use crate::schemes::{ColorScheme, ROLES, SCHEMES, scheme_properties};

use wsite_domain::registry::FeatureSlice;
#[cfg(feature = "server")]
use wsite_domain::registry::InitializedSlice;
use wsite_domain::theme::ThemeDocument;

/// Theme feature state: the static theme asset plus the configured scheme.
#[derive(Debug)]
pub struct Theme {
    document: ThemeDocument,
    scheme: String,
}

impl Theme {
    #[must_use]
    pub fn new(document: ThemeDocument, scheme: impl Into<String>) -> Self {
        Self { document, scheme: scheme.into() }
    }

    /// The configured scheme name.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Resolves the theme document for a request.
    ///
    /// Precedence per role: requested scheme (if recognized), else the
    /// configured scheme (if recognized), else whatever the theme asset
    /// carries. An unrecognized requested name falls back instead of
    /// erroring.
    #[must_use]
    pub fn resolved(&self, requested: Option<&str>) -> ThemeDocument {
        let scheme = requested
            .and_then(scheme_properties)
            .or_else(|| scheme_properties(&self.scheme));

        let mut document = self.document.clone();
        if let Some(scheme) = scheme {
            for (role, value) in scheme.colors {
                document.set(*role, *value);
            }
        }
        document
    }
}

impl FeatureSlice for Theme {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "theme"
    }
}

/// Initialize the theme feature.
///
/// Loads the theme asset once and remembers the configured scheme. An
/// unrecognized configured scheme is tolerated with a warning; resolution
/// then serves the asset's own values.
///
/// # Errors
///
/// Returns an error if the theme asset is missing or not a role/value map.
#[cfg(feature = "server")]
pub async fn init(
    config: &wsite_domain::config::SiteConfig,
    assets: &wsite_assets::AssetStore,
) -> Result<InitializedSlice, ThemeError> {
    let raw = assets.document(&config.assets.theme_document).await?;
    let document: ThemeDocument = serde_json::from_value(serde_json::Value::clone(&raw))
        .map_err(|source| ThemeError::Malformed {
            name: config.assets.theme_document.clone(),
            source,
        })?;

    let scheme = config.site.color_scheme.clone();
    if scheme_properties(&scheme).is_none() {
        tracing::warn!(scheme = %scheme, "Configured color scheme is not registered");
    }

    tracing::info!(scheme = %scheme, roles = document.len(), "Theme slice initialized");

    Ok(InitializedSlice::new(Theme::new(document, scheme)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> ThemeDocument {
        [("primary", "#000000"), ("radius", "12px")].into_iter().collect()
    }

    #[test]
    fn requested_scheme_wins_over_configured() {
        let theme = Theme::new(asset(), "classic-blue");
        let resolved = theme.resolved(Some("anthracite"));
        assert_eq!(resolved.get("primary"), Some("#334155"));
        // asset-only roles survive the overlay
        assert_eq!(resolved.get("radius"), Some("12px"));
    }

    #[test]
    fn unrecognized_request_falls_back_to_configured() {
        let theme = Theme::new(asset(), "slate-green");
        let resolved = theme.resolved(Some("no-such-scheme"));
        assert_eq!(resolved.get("primary"), Some("#047857"));
    }

    #[test]
    fn unrecognized_configured_scheme_serves_the_asset() {
        let theme = Theme::new(asset(), "legacy");
        let resolved = theme.resolved(None);
        assert_eq!(resolved.get("primary"), Some("#000000"));
        assert_eq!(resolved.get("radius"), Some("12px"));
    }
}
