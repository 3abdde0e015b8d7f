use axum::extract::FromRef;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::ops::Deref;
use std::sync::Arc;
use wsite_assets::AssetStore;
use wsite_domain::config::SiteConfig;
use wsite_domain::registry::{FeatureSlice, InitializedSlice};

#[derive(Debug, thiserror::Error)]
pub enum ApiStateError {
    #[error("state validation error: {0}")]
    Validation(&'static str),
    #[error("state missing feature slice: {0}")]
    MissingSlice(&'static str),
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: SiteConfig,
    pub assets: AssetStore,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared application state handed to every route.
///
/// Feature slices register their pre-initialized state here by concrete
/// type; handlers retrieve it with [`ApiState::try_get_slice`].
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.get_slice::<T>()
            .ok_or_else(|| ApiStateError::MissingSlice(std::any::type_name::<T>()))
    }

    /// Iterates over registered slice names (for startup logs/diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for SiteConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for AssetStore {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.assets.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<SiteConfig>,
    assets: Option<AssetStore>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn assets(mut self, assets: AssetStore) -> Self {
        self.assets = Some(assets);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or(ApiStateError::Validation("SiteConfig not provided"))?;
        let assets = self.assets.ok_or(ApiStateError::Validation("AssetStore not provided"))?;

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, assets, slices: self.slices }) })
    }
}
