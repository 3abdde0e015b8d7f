//! Facade crate for `WerkSite` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `wsite` with the desired feature flags (`server`/`client`).
//! - Call `wsite::init` (server) to register feature slices; extend as new slices appear.

pub use wsite_domain as domain;
pub use wsite_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use wsite_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use wsite_content as content;
    pub use wsite_editor as editor;
    pub use wsite_theme as theme;
    #[cfg(feature = "client")]
    pub use wsite_widgets as widgets;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "server")]
        "content",
        #[cfg(feature = "server")]
        "theme",
        #[cfg(feature = "server")]
        "editor",
        #[cfg(feature = "client")]
        "widgets",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub async fn init(
    config: &domain::config::SiteConfig,
    assets: &wsite_assets::AssetStore,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Content resolution
    slices.push(features::content::init(config, assets).await?);

    // Theme registry
    slices.push(features::theme::init(config, assets).await?);

    // Editor side channel
    slices.push(features::editor::init()?);

    Ok(slices)
}
