//! Active-link tracking: which page section is under the viewport probe.
//!
//! Section extents are measured once at bind time, in the fixed page order.
//! On each scroll event the probe `scroll_y + 120` is tested against the
//! extents; the first containing section (list order) wins, and exactly its
//! nav link is marked active. Extents are not re-measured on resize or
//! reflow — a known limitation of the current layout contract.

#[cfg(test)]
#[path = "scrollspy_test.rs"]
mod scrollspy_test;

use crate::consts::SCROLL_PROBE_OFFSET_PX;
use crate::effect::Effect;

/// The section ids the nav links point at, in page order.
pub const SECTION_IDS: [&str; 6] = ["services", "work", "process", "pricing", "faq", "contact"];

/// A page section's vertical extent, measured at bind time.
#[derive(Debug, Clone)]
pub struct Section {
    /// Element id (and nav link href fragment).
    pub id: String,
    /// Offset of the section top from the document top, in CSS pixels.
    pub top: f64,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

/// Scroll-position → active-section resolver.
#[derive(Debug)]
pub struct ScrollSpy {
    sections: Vec<Section>,
}

impl ScrollSpy {
    /// Build from measured sections. Sections are assumed non-overlapping
    /// and already in page order; ids missing from the document are simply
    /// not present in the list.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The id of the section whose `[top, top + height)` extent contains the
    /// probe point `scroll_y + 120`, or `None` if no section does. The first
    /// match in list order wins.
    #[must_use]
    pub fn active_section(&self, scroll_y: f64) -> Option<&str> {
        let probe = scroll_y + SCROLL_PROBE_OFFSET_PX;
        self.sections
            .iter()
            .find(|sec| probe >= sec.top && probe < sec.top + sec.height)
            .map(|sec| sec.id.as_str())
    }

    /// Handle a scroll event: mark the matching nav link active, all others
    /// inactive. At most one link is ever active.
    #[must_use]
    pub fn on_scroll(&self, scroll_y: f64) -> Vec<Effect> {
        vec![Effect::ActiveLink(self.active_section(scroll_y).map(str::to_owned))]
    }
}
