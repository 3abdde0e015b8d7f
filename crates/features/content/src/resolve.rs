//! The single entry point the presentation layer uses to obtain page content.

use crate::merge::{MergePolicy, merge_content};
use crate::overrides::extract_overrides;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, warn};
use wsite_domain::content::{ContentDocument, OverrideFragment};

/// What the current evaluation environment can see.
///
/// Pre-render and other contexts without a request carry no query string and
/// resolve to the base document deterministically; a browser-facing request
/// carries its decoded query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestContext {
    #[default]
    Static,
    Query(Vec<(String, String)>),
}

/// Best-effort receiver for a debug copy of any applied override fragment.
///
/// Recording is a convenience for troubleshooting, never a source of truth;
/// implementations may fail and the resolver will log and move on.
pub trait OverrideSink: Debug + Send + Sync {
    fn record(&self, fragment: &OverrideFragment) -> Result<(), Box<dyn std::error::Error>>;
}

/// Default sink: traces the fragment at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceSink;

impl OverrideSink for TraceSink {
    fn record(&self, fragment: &OverrideFragment) -> Result<(), Box<dyn std::error::Error>> {
        debug!(overrides = %fragment.as_value(), "Applied content overrides");
        Ok(())
    }
}

/// Resolves the content document for one evaluation of a page.
///
/// Holds the immutable base document; every resolution derives from it
/// without storing the result. Extraction strictly precedes merging, and a
/// context without a query string short-circuits to the base.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    base: Arc<ContentDocument>,
    policy: MergePolicy,
    sink: Arc<dyn OverrideSink>,
}

impl ContentResolver {
    /// Creates a resolver over an immutable base document.
    ///
    /// The default merge policy is [`MergePolicy::Permissive`]: the extractor
    /// already restricts fragments to the recognized-parameter allowlist, so
    /// a recognized override applies even when the base omits that leaf.
    /// Deployments that want the base shape to be the hard boundary can opt
    /// into [`MergePolicy::Restricted`].
    #[must_use]
    pub fn new(base: ContentDocument) -> Self {
        Self { base: Arc::new(base), policy: MergePolicy::Permissive, sink: Arc::new(TraceSink) }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn OverrideSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The immutable base document.
    #[must_use]
    pub fn base(&self) -> &Arc<ContentDocument> {
        &self.base
    }

    /// Resolves the content for the given context.
    ///
    /// Without a query string (or with one that carries no recognized,
    /// non-empty overrides) this returns the shared base document unchanged.
    /// Otherwise the extracted fragment is recorded best-effort and merged
    /// over the base. A merge that would break the document shape degrades
    /// to the base document with a warning; resolution itself never fails.
    #[must_use]
    pub fn resolve(&self, context: &RequestContext) -> Arc<ContentDocument> {
        let pairs = match context {
            RequestContext::Static => return Arc::clone(&self.base),
            RequestContext::Query(pairs) => pairs,
        };

        let fragment = extract_overrides(pairs);
        if fragment.is_empty() {
            return Arc::clone(&self.base);
        }

        if let Err(e) = self.sink.record(&fragment) {
            warn!(error = %e, "Override debug recording failed");
        }

        match merge_content(&self.base, &fragment, self.policy) {
            Ok(merged) => Arc::new(merged),
            Err(e) => {
                warn!(error = %e, "Override merge broke the document shape, serving base content");
                Arc::clone(&self.base)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> ContentResolver {
        ContentResolver::new(
            ContentDocument::from_value(json!({
                "company": { "name": "Voltwerk GmbH", "tagline": "Strom, der ankommt." },
                "hero": { "type": "classic", "title": "Ihr Elektriker" },
                "about": { "text": "Seit 1998." }
            }))
            .unwrap(),
        )
    }

    fn query(raw: &[(&str, &str)]) -> RequestContext {
        RequestContext::Query(raw.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
    }

    #[test]
    fn static_context_returns_the_shared_base() {
        let resolver = resolver();
        let resolved = resolver.resolve(&RequestContext::Static);
        assert!(Arc::ptr_eq(&resolved, resolver.base()));
    }

    #[test]
    fn empty_and_unrecognized_queries_return_the_shared_base() {
        let resolver = resolver();

        let resolved = resolver.resolve(&query(&[]));
        assert!(Arc::ptr_eq(&resolved, resolver.base()));

        let resolved = resolver.resolve(&query(&[("utm_source", "ad"), ("page", "2")]));
        assert!(Arc::ptr_eq(&resolved, resolver.base()));
    }

    #[test]
    fn recognized_overrides_produce_a_fresh_document() {
        let resolver = resolver();
        let resolved = resolver.resolve(&query(&[("firma", "Neue GmbH")]));

        assert!(!Arc::ptr_eq(&resolved, resolver.base()));
        assert_eq!(resolved.leaf(&["company", "name"]), Some(&json!("Neue GmbH")));
        assert_eq!(resolved.leaf(&["hero", "title"]), Some(&json!("Ihr Elektriker")));
    }

    #[test]
    fn failing_sink_does_not_break_resolution() {
        #[derive(Debug)]
        struct FailingSink;

        impl OverrideSink for FailingSink {
            fn record(
                &self,
                _fragment: &OverrideFragment,
            ) -> Result<(), Box<dyn std::error::Error>> {
                Err("storage unavailable".into())
            }
        }

        let resolver = resolver().with_sink(Arc::new(FailingSink));
        let resolved = resolver.resolve(&query(&[("branche", "elektriker")]));
        assert_eq!(resolved.leaf(&["company", "industry"]), Some(&json!("elektriker")));
        assert_eq!(resolved.leaf(&["company", "name"]), Some(&json!("Voltwerk GmbH")));
    }
}
