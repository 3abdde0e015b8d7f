use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to build configuration: {0}")]
    Build(#[source] config::ConfigError),
    #[error("failed to deserialize configuration: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: settings from a file (e.g., `server.toml`); defaults to
///    `"server"` in the current working directory when no path is given.
/// 2. **Environment overrides**: values from variables prefixed with
///    `WSITE__`, with double underscores for nesting (e.g.,
///    `WSITE__SERVER__PORT` maps to `server.port`).
///
/// # Errors
///
/// Returns an error if the configuration file cannot be found or if the
/// merged content does not match the structure of `T`.
///
/// # Example
/// ```rust
/// use wsite_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("WSITE")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    builder
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Deserialize)
}
