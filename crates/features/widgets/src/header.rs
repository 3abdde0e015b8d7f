//! Scroll-position-driven header visibility.

use strum_macros::{Display, EnumString};

/// Scroll depth past which the hide-on-scroll behavior arms.
pub const HIDE_SCROLL_THRESHOLD: f64 = 100.0;

/// Scroll depth past which the header counts as "scrolled" for styling.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Header presentation mode, parsed from the content document's hero/header
/// style. Only `rounded` hides on downward scroll; every other mode keeps
/// the header always visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum HeaderMode {
    #[default]
    Classic,
    Rounded,
    Minimal,
}

/// Tracks header visibility and the decoupled "scrolled" styling flag.
#[derive(Debug)]
pub struct ScrollHeader {
    mode: HeaderMode,
    last_y: f64,
    visible: bool,
    scrolled: bool,
}

impl ScrollHeader {
    #[must_use]
    pub const fn new(mode: HeaderMode) -> Self {
        Self { mode, last_y: 0.0, visible: true, scrolled: false }
    }

    #[must_use]
    pub const fn mode(&self) -> HeaderMode {
        self.mode
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the page has scrolled past the styling threshold. Independent
    /// of visibility.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feeds a new scroll position (pixels from the top).
    ///
    /// In [`HeaderMode::Rounded`]: hides on downward movement past the
    /// threshold, reveals on upward movement or on returning to the top.
    /// All other modes stay visible throughout.
    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLLED_THRESHOLD;

        if self.mode == HeaderMode::Rounded {
            let delta = y - self.last_y;
            if y <= HIDE_SCROLL_THRESHOLD {
                self.visible = true;
            } else if delta > 0.0 {
                self.visible = false;
            } else if delta < 0.0 {
                self.visible = true;
            }
        } else {
            self.visible = true;
        }

        self.last_y = y;
    }
}
