//! Theme document shape: semantic color roles mapped to CSS values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only record of named color/style roles, loaded once per page view
/// from the static theme asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeDocument(BTreeMap<String, String>);

impl ThemeDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    pub fn set(&mut self, role: impl Into<String>, value: impl Into<String>) {
        self.0.insert(role.into(), value.into());
    }

    pub fn roles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(role, value)| (role.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ThemeDocument {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ThemeDocument {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(role, value)| (role.to_owned(), value.to_owned())).collect())
    }
}
