//! URL-parameter extraction: query-string pairs to an override fragment.
//!
//! The recognized parameter set is fixed per deployment; each parameter maps
//! 1:1 to one leaf of the content document. Everything else in the query
//! string is somebody else's concern and is ignored without comment.

use wsite_domain::content::OverrideFragment;

/// The recognized query parameters and the content leaves they override.
///
/// | param        | content path        |
/// |--------------|---------------------|
/// | `firma`      | `company.name`      |
/// | `slogan`     | `company.tagline`   |
/// | `branche`    | `company.industry`  |
/// | `telefon`    | `company.phone`     |
/// | `email`      | `company.email`     |
/// | `ueber`      | `about.text`        |
/// | `titel`      | `hero.title`        |
/// | `untertitel` | `hero.subtitle`     |
pub const RECOGNIZED_PARAMS: &[(&str, &[&str])] = &[
    ("firma", &["company", "name"]),
    ("slogan", &["company", "tagline"]),
    ("branche", &["company", "industry"]),
    ("telefon", &["company", "phone"]),
    ("email", &["company", "email"]),
    ("ueber", &["about", "text"]),
    ("titel", &["hero", "title"]),
    ("untertitel", &["hero", "subtitle"]),
];

/// Builds an override fragment from decoded query-string pairs.
///
/// Pure function of its input. Unrecognized keys are skipped; values that
/// are empty after trimming count as absent and do not override. Values are
/// passed through as strings without further validation. When a parameter
/// repeats, the last occurrence wins.
#[must_use]
pub fn extract_overrides(pairs: &[(String, String)]) -> OverrideFragment {
    let mut fragment = OverrideFragment::new();

    for (key, value) in pairs {
        let Some(path) = lookup_path(key) else {
            continue;
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        fragment.insert(path, trimmed);
    }

    fragment
}

fn lookup_path(key: &str) -> Option<&'static [&'static str]> {
    RECOGNIZED_PARAMS.iter().find(|(param, _)| *param == key).map(|(_, path)| *path)
}
