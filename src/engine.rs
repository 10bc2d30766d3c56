//! Aggregate page state: one core per feature, constructed once at startup.
//!
//! `PageCore` is the headless counterpart of the bound page — it owns every
//! feature's state machine and routes fired one-shot tasks back to the
//! feature that scheduled them. All logic is testable here without a
//! browser; the DOM layer ([`crate::bind`]) only translates events in and
//! effects out.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::accordion::Accordion;
use crate::chat::ChatWidget;
use crate::contact;
use crate::effect::{Effect, Task};
use crate::nav::NavMenu;
use crate::scrollspy::{ScrollSpy, Section};

/// All feature state for one page session.
#[derive(Debug)]
pub struct PageCore {
    /// Mobile navigation panel.
    pub nav: NavMenu,
    /// Scroll-position → active-link resolver.
    pub spy: ScrollSpy,
    /// FAQ accordion.
    pub accordion: Accordion,
    /// Chat widget.
    pub chat: ChatWidget,
}

impl PageCore {
    /// Build from the page measurements taken at bind time.
    #[must_use]
    pub fn new(sections: Vec<Section>, faq_len: usize) -> Self {
        Self {
            nav: NavMenu::new(),
            spy: ScrollSpy::new(sections),
            accordion: Accordion::new(faq_len),
            chat: ChatWidget::new(),
        }
    }

    /// A scheduled one-shot task fired; dispatch it to its feature.
    pub fn task_fired(&mut self, task: Task) -> Vec<Effect> {
        match task {
            Task::FormFallback => contact::fallback(),
            Task::BotReply(text) => self.chat.bot_arrived(text),
        }
    }
}
