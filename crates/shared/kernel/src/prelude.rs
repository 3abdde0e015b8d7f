//! Ergonomic re-exports for slice and application crates.

pub use crate::config::{ConfigError, load_config};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use wsite_domain::config::SiteConfig;
pub use wsite_domain::registry::{FeatureSlice, InitializedSlice};
