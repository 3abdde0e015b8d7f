use crate::features::PackageTier;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub site: SiteSettings,
    pub assets: AssetConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Per-instance site settings: commercial tier and active color scheme.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub tier: PackageTier,
    pub color_scheme: String,
}

/// Static asset roots and document names.
///
/// `default_document` and `theme_document` are plain file names resolved
/// inside `content_dir`; `static_dir` holds the pre-built site bundle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub default_document: String,
    pub theme_document: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8640, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self { tier: PackageTier::Starter, color_scheme: "classic-blue".to_owned() }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("assets/content"),
            static_dir: PathBuf::from("public"),
            default_document: "default.json".to_owned(),
            theme_document: "theme.json".to_owned(),
        }
    }
}
