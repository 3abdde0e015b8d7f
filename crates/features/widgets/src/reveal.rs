//! Scroll-reveal animation tracking.
//!
//! The host attaches one viewport-intersection watcher per tagged element
//! and forwards intersection callbacks here; once an element crosses the
//! visibility threshold it is revealed for good. The exported constants are
//! the observer configuration the host should use: the negative bottom
//! margin makes the trigger fire slightly before the element is fully
//! on-screen.

use fxhash::FxHashMap;

/// Fraction of the element that must be visible to trigger the reveal.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Bottom root margin for the host's observer, in CSS pixels.
pub const ROOT_MARGIN_BOTTOM_PX: i32 = -50;

/// Tracks which tagged elements have been revealed.
///
/// Reveals are permanent for the lifetime of the tracker; tear the tracker
/// down with the owning view (or call [`RevealTracker::clear`]).
#[derive(Debug, Default)]
pub struct RevealTracker {
    elements: FxHashMap<String, bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for reveal tracking. Re-observing an element
    /// keeps its current state.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_insert(false);
    }

    /// Feeds an intersection callback; returns `true` when this call
    /// transitions the element to revealed.
    ///
    /// Callbacks for unobserved elements are ignored, and a revealed
    /// element stays revealed no matter what ratios arrive later.
    pub fn intersect(&mut self, id: &str, ratio: f64) -> bool {
        let Some(revealed) = self.elements.get_mut(id) else {
            return false;
        };
        if *revealed || ratio < INTERSECTION_THRESHOLD {
            return false;
        }
        *revealed = true;
        true
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements.get(id).copied().unwrap_or(false)
    }

    /// Detaches one element from tracking.
    pub fn unobserve(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Teardown: drops all tracked elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[must_use]
    pub fn observed(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sufficient_intersection_reveals_permanently() {
        let mut tracker = RevealTracker::new();
        tracker.observe("hero-card");

        assert!(!tracker.intersect("hero-card", 0.05), "below threshold");
        assert!(!tracker.is_revealed("hero-card"));

        assert!(tracker.intersect("hero-card", 0.1), "threshold is inclusive");
        assert!(tracker.is_revealed("hero-card"));

        // scrolling it back out changes nothing
        assert!(!tracker.intersect("hero-card", 0.0));
        assert!(tracker.is_revealed("hero-card"));
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.intersect("ghost", 1.0));
        assert!(!tracker.is_revealed("ghost"));
    }

    #[test]
    fn reobserving_keeps_revealed_state() {
        let mut tracker = RevealTracker::new();
        tracker.observe("card");
        tracker.intersect("card", 0.5);

        tracker.observe("card");
        assert!(tracker.is_revealed("card"));
    }

    #[test]
    fn clear_tears_everything_down() {
        let mut tracker = RevealTracker::new();
        tracker.observe("a");
        tracker.observe("b");
        tracker.intersect("a", 1.0);

        tracker.clear();
        assert_eq!(tracker.observed(), 0);
        assert!(!tracker.is_revealed("a"));
    }
}
