//! Stateful UI widget state machines.
//!
//! Each widget is an independent machine with purely local state: no widget
//! shares anything with another, none performs I/O, and none reads a clock.
//! Hosts feed in events (pointer transitions, scroll positions, viewport
//! intersections) plus a monotonic timestamp where timing matters, and read
//! the resulting state back out. That keeps every transition, including the
//! debounced ones, deterministic under test.

mod dropdown;
mod header;
mod panel;
mod reveal;

pub use crate::dropdown::{DropdownState, HOVER_CLOSE_DELAY, HeaderDropdown};
pub use crate::header::{
    HIDE_SCROLL_THRESHOLD, HeaderMode, SCROLLED_THRESHOLD, ScrollHeader,
};
pub use crate::panel::InfoPanel;
pub use crate::reveal::{INTERSECTION_THRESHOLD, ROOT_MARGIN_BOTTOM_PX, RevealTracker};
