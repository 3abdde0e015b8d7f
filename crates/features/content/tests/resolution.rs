use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;
use wsite_content::{
    ContentResolver, MergePolicy, RECOGNIZED_PARAMS, RequestContext, extract_overrides,
    merge_content,
};
use wsite_domain::content::ContentDocument;

fn base() -> ContentDocument {
    ContentDocument::from_value(json!({
        "company": {
            "name": "Voltwerk GmbH",
            "tagline": "Strom, der ankommt.",
            "industry": "elektriker",
            "phone": "+49 201 555 01",
            "email": "kontakt@voltwerk.example"
        },
        "hero": { "type": "classic", "title": "Ihr Elektriker vor Ort", "subtitle": "24h Notdienst" },
        "about": { "text": "Seit 1998 in Familienhand." },
        "services": { "heading": "Leistungen", "items": ["Installation", "Wartung", "Smart Home"] },
        "contact": { "street": "Kabelgasse 12", "city": "Essen" }
    }))
    .unwrap()
}

fn query(raw: &[(&str, &str)]) -> RequestContext {
    RequestContext::Query(raw.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
}

#[test]
fn unrecognized_only_query_is_deep_equal_to_base() {
    let resolver = ContentResolver::new(base());
    let resolved = resolver.resolve(&query(&[
        ("utm_source", "mail"),
        ("gclid", "xyz"),
        ("theme", "dark"),
    ]));

    assert_eq!(resolved.as_value(), base().as_value());
    assert!(Arc::ptr_eq(&resolved, resolver.base()), "no-override path must not copy");
}

#[test]
fn recognized_override_changes_exactly_one_leaf() {
    let resolver = ContentResolver::new(base());
    let resolved = resolver.resolve(&query(&[("slogan", "Neuer Slogan")]));

    assert_eq!(resolved.leaf(&["company", "tagline"]), Some(&json!("Neuer Slogan")));

    // every other leaf equals the base
    let mut expected = base().into_value();
    expected["company"]["tagline"] = json!("Neuer Slogan");
    assert_eq!(resolved.as_value(), &expected);
}

#[test]
fn branche_parameter_overrides_company_industry() {
    let resolver = ContentResolver::new(base());
    let resolved = resolver.resolve(&query(&[("branche", "dachdecker")]));

    assert_eq!(resolved.leaf(&["company", "industry"]), Some(&json!("dachdecker")));

    let mut expected = base().into_value();
    expected["company"]["industry"] = json!("dachdecker");
    assert_eq!(resolved.as_value(), &expected);
}

#[test]
fn resolution_is_repeatable_across_calls() {
    // the base stays a stable fallback no matter how often overrides apply
    let resolver = ContentResolver::new(base());

    let first = resolver.resolve(&query(&[("firma", "A GmbH")]));
    let second = resolver.resolve(&query(&[("firma", "B GmbH")]));
    let third = resolver.resolve(&RequestContext::Static);

    assert_eq!(first.leaf(&["company", "name"]), Some(&json!("A GmbH")));
    assert_eq!(second.leaf(&["company", "name"]), Some(&json!("B GmbH")));
    assert_eq!(third.as_value(), base().as_value());
}

fn value_strategy() -> impl Strategy<Value = String> {
    // printable, occasionally whitespace-padded values
    "[ a-zA-Z0-9äöüß<>&/-]{0,40}"
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    let param = prop::sample::select(
        RECOGNIZED_PARAMS.iter().map(|(name, _)| (*name).to_owned()).collect::<Vec<_>>(),
    );
    prop::collection::vec((param, value_strategy()), 0..6)
}

proptest! {
    #[test]
    fn merge_is_idempotent_for_extracted_fragments(pairs in pairs_strategy()) {
        let fragment = extract_overrides(&pairs);
        let document = base();

        for policy in [MergePolicy::Restricted, MergePolicy::Permissive] {
            let once = merge_content(&document, &fragment, policy).unwrap();
            let twice = merge_content(&once, &fragment, policy).unwrap();
            prop_assert_eq!(&once, &twice);
        }
    }

    #[test]
    fn merge_never_mutates_the_base(pairs in pairs_strategy()) {
        let fragment = extract_overrides(&pairs);
        let document = base();
        let snapshot = document.clone();

        let _ = merge_content(&document, &fragment, MergePolicy::Permissive).unwrap();
        prop_assert_eq!(&document, &snapshot);
    }

    #[test]
    fn required_sections_always_survive(pairs in pairs_strategy()) {
        let fragment = extract_overrides(&pairs);
        let merged = merge_content(&base(), &fragment, MergePolicy::Permissive).unwrap();

        for section in wsite_domain::content::REQUIRED_SECTIONS {
            prop_assert!(merged.section(section).is_some());
        }
    }
}
