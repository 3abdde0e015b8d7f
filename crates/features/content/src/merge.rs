//! Recursive structural merge of an override fragment onto a base document.

use serde_json::{Map, Value};
use wsite_domain::content::{ContentDocument, MalformedContent, OverrideFragment};

/// How to treat override keys that do not exist in the base shape.
///
/// `Restricted` keeps the document shape statically known: overrides can
/// only change leaves the base already has. `Permissive` admits new keys,
/// which means the merged shape can drift with whatever a request supplies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    #[default]
    Restricted,
    Permissive,
}

/// Merges a fragment onto a base document, returning a new document.
///
/// For each key present in the fragment: if both sides hold an object, the
/// merge recurses; otherwise the fragment's value replaces the base value.
/// Keys absent from the fragment are left untouched. The base is never
/// mutated, so the static asset remains a stable fallback across calls.
///
/// # Errors
///
/// Returns [`MalformedContent`] if the merged value no longer satisfies the
/// document shape (possible only under [`MergePolicy::Permissive`], where a
/// fragment may replace a required section wholesale).
pub fn merge_content(
    base: &ContentDocument,
    fragment: &OverrideFragment,
    policy: MergePolicy,
) -> Result<ContentDocument, MalformedContent> {
    let merged = merge_value(base.as_value(), fragment.as_value(), policy);
    ContentDocument::from_value(merged)
}

fn merge_value(base: &Value, overlay: &Value, policy: MergePolicy) -> Value {
    let (Some(base_map), Some(overlay_map)) = (base.as_object(), overlay.as_object()) else {
        return overlay.clone();
    };

    let mut result: Map<String, Value> = base_map.clone();

    for (key, overlay_value) in overlay_map {
        match base_map.get(key) {
            Some(base_value) if base_value.is_object() && overlay_value.is_object() => {
                result.insert(key.clone(), merge_value(base_value, overlay_value, policy));
            },
            Some(_) => {
                result.insert(key.clone(), overlay_value.clone());
            },
            None if policy == MergePolicy::Permissive => {
                result.insert(key.clone(), overlay_value.clone());
            },
            None => {},
        }
    }

    Value::Object(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> ContentDocument {
        ContentDocument::from_value(json!({
            "company": { "name": "Voltwerk GmbH", "tagline": "Strom, der ankommt.", "industry": "elektriker" },
            "hero": { "type": "classic", "title": "Ihr Elektriker vor Ort" },
            "about": { "text": "Seit 1998 in Familienhand." },
            "services": { "items": ["Installation", "Wartung"] }
        }))
        .unwrap()
    }

    fn fragment(entries: &[(&[&str], &str)]) -> OverrideFragment {
        let mut f = OverrideFragment::new();
        for (path, value) in entries {
            f.insert(path, *value);
        }
        f
    }

    #[test]
    fn overridden_leaf_wins_everything_else_is_kept() {
        let merged = merge_content(
            &base(),
            &fragment(&[(&["company", "name"], "Neue GmbH")]),
            MergePolicy::Restricted,
        )
        .unwrap();

        assert_eq!(merged.leaf(&["company", "name"]), Some(&json!("Neue GmbH")));
        assert_eq!(merged.leaf(&["company", "tagline"]), Some(&json!("Strom, der ankommt.")));
        assert_eq!(merged.leaf(&["hero", "type"]), Some(&json!("classic")));
        assert_eq!(merged.section("services"), base().section("services"));
    }

    #[test]
    fn empty_fragment_reproduces_the_base() {
        let merged =
            merge_content(&base(), &OverrideFragment::new(), MergePolicy::Restricted).unwrap();
        assert_eq!(merged, base());
    }

    #[test]
    fn restricted_policy_drops_unknown_keys() {
        let merged = merge_content(
            &base(),
            &fragment(&[(&["company", "vat_id"], "DE123"), (&["extra", "key"], "x")]),
            MergePolicy::Restricted,
        )
        .unwrap();

        assert_eq!(merged.leaf(&["company", "vat_id"]), None);
        assert_eq!(merged.section("extra"), None);
        assert_eq!(merged, base());
    }

    #[test]
    fn permissive_policy_admits_unknown_keys() {
        let merged = merge_content(
            &base(),
            &fragment(&[(&["company", "vat_id"], "DE123")]),
            MergePolicy::Permissive,
        )
        .unwrap();

        assert_eq!(merged.leaf(&["company", "vat_id"]), Some(&json!("DE123")));
    }

    #[test]
    fn merge_does_not_mutate_the_base() {
        let document = base();
        let snapshot = document.clone();

        let _ = merge_content(
            &document,
            &fragment(&[(&["about", "text"], "Ganz neu.")]),
            MergePolicy::Restricted,
        )
        .unwrap();

        assert_eq!(document, snapshot);
    }

    #[test]
    fn merge_is_idempotent() {
        let f = fragment(&[
            (&["company", "name"], "Neue GmbH"),
            (&["hero", "title"], "Willkommen"),
        ]);

        let once = merge_content(&base(), &f, MergePolicy::Restricted).unwrap();
        let twice = merge_content(&once, &f, MergePolicy::Restricted).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn sections_survive_every_merge() {
        let merged = merge_content(
            &base(),
            &fragment(&[(&["company", "name"], "N")]),
            MergePolicy::Restricted,
        )
        .unwrap();

        for section in wsite_domain::content::REQUIRED_SECTIONS {
            assert!(merged.section(section).is_some(), "section {section} must survive");
        }
    }
}
