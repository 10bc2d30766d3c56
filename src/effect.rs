//! Effects returned from feature handlers for the DOM layer to apply.
//!
//! The headless cores never touch `web_sys`; they describe the DOM mutations
//! they want as [`Effect`] values, in application order. Deferred work is a
//! [`Task`] wrapped in [`Effect::Schedule`] — the DOM layer arms a one-shot
//! timeout and routes the fired task back through
//! [`crate::engine::PageCore::task_fired`].

use crate::chat::ChatMessage;

/// A single DOM mutation (or deferred-task request) to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Mobile nav open state: `open` class on the panel plus `aria-expanded`
    /// on the toggle control.
    NavOpen(bool),
    /// Mark the nav link whose href fragment equals the id active and all
    /// others inactive. `None` clears every link.
    ActiveLink(Option<String>),
    /// Set `aria-expanded` on the FAQ question control at `index`.
    FaqExpanded {
        /// Position of the control in document order.
        index: usize,
        /// New expanded state.
        expanded: bool,
    },
    /// Replace the contact form status line text.
    FormStatus(&'static str),
    /// Navigate the page to a URI. For `mailto:` this hands control to the
    /// user's email client; the outcome is unconfirmable.
    Navigate(String),
    /// Show or hide the chat window.
    ChatVisible(bool),
    /// Append a message to the chat body and keep it scrolled to the bottom.
    AppendMessage(ChatMessage),
    /// Remove every message from the chat body.
    ClearTranscript,
    /// Clear the chat text input.
    ClearChatInput,
    /// Move input focus to the chat text input.
    FocusChatInput,
    /// Run `task` once after `delay_ms` milliseconds.
    Schedule {
        /// Delay before the task fires.
        delay_ms: u32,
        /// The work to perform when it does.
        task: Task,
    },
}

/// Deferred one-shot work carried by [`Effect::Schedule`].
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Overwrite the contact form status with the manual-send fallback text.
    FormFallback,
    /// Append this bot reply to the chat transcript.
    BotReply(String),
}
