//! Slice registry for modular features.
//! A minimal type-erased container for pre-initialized feature state; the
//! server state stores one entry per enabled slice, keyed by concrete type.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable slice name, used in startup logs and diagnostics.
    fn name(&self) -> &'static str;
}

/// A container for an initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Create a new initialized slice from a concrete state.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        let name = state.name();
        Self { id: TypeId::of::<T>(), name, state: Box::new(state) }
    }
}
