//! Scheme application, split into a pure lookup and injectable side effects.
//!
//! Computing the property set is [`scheme_properties`]; pushing it into a
//! live environment goes through [`StyleTarget`], and remembering the chosen
//! scheme goes through [`SchemeStore`]. Hosts without a live document simply
//! pass [`DiscardTarget`].

use crate::schemes::scheme_properties;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Receiver for style properties (e.g. CSS custom properties on a document
/// root). Application is fire-and-forget.
pub trait StyleTarget: Debug {
    fn set_property(&mut self, role: &str, value: &str);
}

/// Best-effort persistence of the chosen scheme name for later retrieval.
pub trait SchemeStore: Debug {
    fn persist(&mut self, name: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// Target for environments without a live document: swallows everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardTarget;

impl StyleTarget for DiscardTarget {
    fn set_property(&mut self, _role: &str, _value: &str) {}
}

/// In-memory target, mainly for composing property maps and for tests.
#[derive(Debug, Default, Clone)]
pub struct PropertyMap(Vec<(String, String)>);

impl PropertyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }
}

impl StyleTarget for PropertyMap {
    fn set_property(&mut self, role: &str, value: &str) {
        self.0.push((role.to_owned(), value.to_owned()));
    }
}

/// Applies a named scheme to a style target.
///
/// Unrecognized names are a silent no-op (`false`). On success one property
/// is set per color role, the chosen name is persisted best-effort through
/// the store if one is given, and `true` is returned. Store failures are
/// logged, never raised.
pub fn apply_color_scheme(
    name: &str,
    target: &mut dyn StyleTarget,
    store: Option<&mut dyn SchemeStore>,
) -> bool {
    let Some(scheme) = scheme_properties(name) else {
        debug!(scheme = name, "Ignoring unrecognized color scheme");
        return false;
    };

    for (role, value) in scheme.colors {
        target.set_property(role, value);
    }

    if let Some(store) = store {
        if let Err(e) = store.persist(name) {
            warn!(scheme = name, error = %e, "Color scheme persistence failed");
        }
    }

    true
}
