//! Mobile navigation: a single open/closed flag behind the hamburger toggle.
//!
//! Clicking the toggle flips the panel; clicking a nav link or anywhere
//! outside the nav/toggle region forces it closed. Closes are idempotent and
//! always emitted, so the DOM never drifts from the core state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::effect::Effect;

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Starts closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The toggle control was clicked: flip the panel.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        vec![Effect::NavOpen(self.open)]
    }

    /// A nav link was clicked: close the panel (mobile UX).
    pub fn link_clicked(&mut self) -> Vec<Effect> {
        self.force_closed()
    }

    /// The document was clicked somewhere; `inside` is whether the click
    /// landed within the nav panel or the toggle control.
    pub fn outside_click(&mut self, inside: bool) -> Vec<Effect> {
        if inside {
            return Vec::new();
        }
        self.force_closed()
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn force_closed(&mut self) -> Vec<Effect> {
        self.open = false;
        vec![Effect::NavOpen(false)]
    }
}
