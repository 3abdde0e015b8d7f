//! Header navigation dropdown.
//!
//! Hover-close is debounced so the pointer can transit the gap between
//! trigger and panel without the panel snapping shut; a click is immediate
//! and takes precedence over any hover state. The host owns the timer: it
//! passes monotonic timestamps into [`HeaderDropdown::pointer_leave`] and
//! [`HeaderDropdown::poll`], and a pending close is cancelled by any
//! superseding event or by [`HeaderDropdown::reset`] on teardown.

use std::time::Duration;

/// Grace period between pointer-leave and hover-close.
pub const HOVER_CLOSE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    OpenByClick,
    OpenByHover,
}

#[derive(Debug, Default)]
pub struct HeaderDropdown {
    state: DropdownState,
    pending_close: Option<Duration>,
}

impl HeaderDropdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> DropdownState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.state, DropdownState::Closed)
    }

    /// Click on the trigger: immediate toggle, overrides hover state.
    ///
    /// A hover-open dropdown is pinned open by a click rather than toggled
    /// shut, so clicking what is already visibly open never feels like a
    /// misfire. Any pending hover-close is cancelled.
    pub fn toggle_click(&mut self) {
        self.pending_close = None;
        self.state = match self.state {
            DropdownState::Closed | DropdownState::OpenByHover => DropdownState::OpenByClick,
            DropdownState::OpenByClick => DropdownState::Closed,
        };
    }

    /// Pointer entered the trigger or the open panel.
    pub fn pointer_enter(&mut self) {
        self.pending_close = None;
        if self.state == DropdownState::Closed {
            self.state = DropdownState::OpenByHover;
        }
    }

    /// Pointer left the trigger/panel at `now`; schedules the debounced close.
    ///
    /// Click-opened dropdowns ignore hover departure.
    pub fn pointer_leave(&mut self, now: Duration) {
        if self.state == DropdownState::OpenByHover {
            self.pending_close = Some(now + HOVER_CLOSE_DELAY);
        }
    }

    /// Fires a due pending close. Host calls this from its timer tick.
    pub fn poll(&mut self, now: Duration) {
        let Some(deadline) = self.pending_close else {
            return;
        };
        if now >= deadline {
            self.pending_close = None;
            if self.state == DropdownState::OpenByHover {
                self.state = DropdownState::Closed;
            }
        }
    }

    /// Teardown: cancels the pending timer and closes, so no stale
    /// transition can fire after the owning view is gone.
    pub fn reset(&mut self) {
        self.pending_close = None;
        self.state = DropdownState::Closed;
    }
}
