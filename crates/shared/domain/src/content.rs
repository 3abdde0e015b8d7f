//! Content document and override fragment shapes.
//!
//! A content document is the full tree of business/page data for one site
//! instance, namespaced by top-level sections (`company`, `hero`, `about`,
//! ...). An override fragment is a sparse tree of the same shape carrying
//! only the values supplied by the current request.

use crate::constants::{ABOUT, COMPANY, HERO};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Sections every content document must carry. Resolution never removes them.
pub const REQUIRED_SECTIONS: &[&str] = &[COMPANY, HERO, ABOUT];

/// The full page/business data tree for one site instance.
///
/// Invariant: the value is a JSON object containing every section in
/// [`REQUIRED_SECTIONS`]. Construction goes through [`ContentDocument::from_value`],
/// which checks the invariant once; everything downstream relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ContentDocument(Value);

impl ContentDocument {
    /// Validates and wraps a raw JSON value.
    pub fn from_value(value: Value) -> Result<Self, MalformedContent> {
        let Some(object) = value.as_object() else {
            return Err(MalformedContent::NotAnObject);
        };
        for section in REQUIRED_SECTIONS {
            if !object.get(*section).is_some_and(Value::is_object) {
                return Err(MalformedContent::MissingSection(*section));
            }
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// The invariant guarantees the root is an object.
    #[must_use]
    pub fn sections(&self) -> &Map<String, Value> {
        self.0.as_object().unwrap_or_else(|| unreachable!("content root is an object"))
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections().get(name)
    }

    /// Walks a dotted-path of object keys to a leaf, if present.
    #[must_use]
    pub fn leaf(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.0;
        for key in path {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }
}

impl TryFrom<Value> for ContentDocument {
    type Error = MalformedContent;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<ContentDocument> for Value {
    fn from(document: ContentDocument) -> Self {
        document.into_value()
    }
}

/// Shape violation found while constructing a [`ContentDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedContent {
    NotAnObject,
    MissingSection(&'static str),
}

impl fmt::Display for MalformedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("content document root must be a JSON object"),
            Self::MissingSection(section) => {
                write!(f, "content document is missing required section `{section}`")
            },
        }
    }
}

impl std::error::Error for MalformedContent {}

/// The partial set of content values supplied via query parameters.
///
/// Only keys explicitly present in the request are populated; absence means
/// "do not override".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideFragment(Value);

impl OverrideFragment {
    #[must_use]
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_object().is_none_or(Map::is_empty)
    }

    /// Populates one leaf at a nested path, creating intermediate objects.
    ///
    /// A later insert at the same path wins over an earlier one.
    pub fn insert(&mut self, path: &[&str], value: impl Into<String>) {
        let Some((leaf, parents)) = path.split_last() else {
            return;
        };
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        let mut current = &mut self.0;
        for key in parents {
            let entry = current
                .as_object_mut()
                .unwrap_or_else(|| unreachable!("fragment nodes are objects"))
                .entry((*key).to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = entry;
        }
        if let Some(object) = current.as_object_mut() {
            object.insert((*leaf).to_owned(), Value::String(value.into()));
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn leaf(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.0;
        for key in path {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Value {
        json!({
            "company": { "name": "Voltwerk GmbH", "tagline": "Strom, der ankommt." },
            "hero": { "type": "classic", "title": "Ihr Elektriker" },
            "about": { "text": "Seit 1998." }
        })
    }

    #[test]
    fn document_requires_all_sections() {
        assert!(ContentDocument::from_value(base()).is_ok());

        let mut missing = base();
        missing.as_object_mut().unwrap().remove("about");
        assert_eq!(
            ContentDocument::from_value(missing),
            Err(MalformedContent::MissingSection("about"))
        );

        assert_eq!(
            ContentDocument::from_value(json!("nope")),
            Err(MalformedContent::NotAnObject)
        );
    }

    #[test]
    fn leaf_walks_nested_keys() {
        let document = ContentDocument::from_value(base()).unwrap();
        assert_eq!(document.leaf(&["company", "name"]), Some(&json!("Voltwerk GmbH")));
        assert_eq!(document.leaf(&["company", "missing"]), None);
        assert_eq!(document.leaf(&["hero", "title", "deeper"]), None);
    }

    #[test]
    fn fragment_insert_builds_nested_shape() {
        let mut fragment = OverrideFragment::new();
        assert!(fragment.is_empty());

        fragment.insert(&["company", "name"], "Neu");
        fragment.insert(&["company", "industry"], "elektriker");
        assert!(!fragment.is_empty());
        assert_eq!(fragment.leaf(&["company", "name"]), Some(&json!("Neu")));
        assert_eq!(fragment.leaf(&["company", "industry"]), Some(&json!("elektriker")));

        // later insert wins
        fragment.insert(&["company", "name"], "Neuer");
        assert_eq!(fragment.leaf(&["company", "name"]), Some(&json!("Neuer")));
    }
}
