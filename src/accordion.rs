//! FAQ accordion: at most one item expanded at any time.
//!
//! A click collapses the full set first, then expands the clicked item only
//! if it was not the one already open. The DOM mirror is the `aria-expanded`
//! attribute on each question control.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use crate::effect::Effect;

/// Expanded-item state over a fixed set of FAQ question controls.
#[derive(Debug)]
pub struct Accordion {
    len: usize,
    expanded: Option<usize>,
}

impl Accordion {
    /// Build for `len` question controls, all collapsed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    /// Handle a click on the control at `index`: collapse everything, then
    /// expand `index` unless it was the open item (in which case it stays
    /// closed). Out-of-range indices are ignored.
    pub fn click(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.len {
            return Vec::new();
        }

        let was_expanded = self.expanded == Some(index);
        self.expanded = if was_expanded { None } else { Some(index) };

        // Collapse the full set first so the invariant holds even if the DOM
        // attributes were edited out from under us.
        let mut effects: Vec<Effect> = (0..self.len)
            .map(|i| Effect::FaqExpanded { index: i, expanded: false })
            .collect();
        if let Some(open) = self.expanded {
            effects.push(Effect::FaqExpanded { index: open, expanded: true });
        }
        effects
    }

    /// The currently expanded item, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Number of question controls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no question controls at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
