#![cfg(feature = "server")]

use std::any::Any;
use tempfile::TempDir;
use wsite_assets::AssetStore;
use wsite_domain::config::SiteConfig;
use wsite_domain::registry::{FeatureSlice, InitializedSlice};
use wsite_kernel::server::{ApiState, ApiStateError};

#[derive(Debug)]
struct DemoSlice {
    greeting: &'static str,
}

impl FeatureSlice for DemoSlice {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

#[derive(Debug)]
struct OtherSlice;

impl FeatureSlice for OtherSlice {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &'static str {
        "other"
    }
}

async fn empty_store(temp: &TempDir) -> AssetStore {
    AssetStore::builder().root(temp.path()).connect().await.unwrap()
}

#[tokio::test]
async fn state_resolves_registered_slices() {
    let temp = TempDir::new().unwrap();
    let state = ApiState::builder()
        .config(SiteConfig::default())
        .assets(empty_store(&temp).await)
        .register_slice(InitializedSlice::new(DemoSlice { greeting: "hallo" }))
        .build()
        .unwrap();

    let slice = state.try_get_slice::<DemoSlice>().unwrap();
    assert_eq!(slice.greeting, "hallo");
    assert!(state.slice_names().any(|name| name == "demo"));
}

#[tokio::test]
async fn missing_slice_is_an_error() {
    let temp = TempDir::new().unwrap();
    let state = ApiState::builder()
        .config(SiteConfig::default())
        .assets(empty_store(&temp).await)
        .build()
        .unwrap();

    let err = state.try_get_slice::<OtherSlice>().unwrap_err();
    assert!(matches!(err, ApiStateError::MissingSlice(_)));
}

#[tokio::test]
async fn builder_requires_config_and_assets() {
    let temp = TempDir::new().unwrap();

    let err = ApiState::builder().assets(empty_store(&temp).await).build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation(_)));

    let err = ApiState::builder().config(SiteConfig::default()).build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation(_)));
}
