//! Chat widget: open/closed state machine, transcript, and canned replies.
//!
//! The widget answers entirely from a fixed keyword table — there is no
//! backend. Opening appends a greeting; closing discards the whole
//! transcript. A submitted message is echoed immediately and answered by
//! exactly one bot message after a short fixed delay. A reply already in
//! flight when the widget closes is not cancelled and will land in the
//! cleared transcript.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::consts::BOT_REPLY_DELAY_MS;
use crate::effect::{Effect, Task};

/// Greeting appended each time the widget opens.
pub const GREETING: &str = "Hi! 👋 Ask me about services, pricing, or next steps.";

/// Reply used when no rule keyword matches the input.
pub const FALLBACK_REPLY: &str = "Got it. Tell me your data sources (ex: QuickBooks, Fishbowl, \
     Shopify) and what you want to measure (revenue, COGS, inventory, margin, etc.).";

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Typed by the visitor.
    User,
    /// Produced by the canned-reply table.
    Bot,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Raw message text. Escaped by the DOM layer before rendering.
    pub text: String,
    /// Message author.
    pub sender: Sender,
}

/// A canned-reply rule: any keyword substring-contained in the (lower-cased)
/// input selects `answer`.
pub struct FaqRule {
    /// Lower-case keywords tested by substring containment.
    pub keywords: &'static [&'static str],
    /// The canned answer.
    pub answer: &'static str,
}

/// The reply table, scanned in order; the first matching rule wins.
pub const RULES: [FaqRule; 5] = [
    FaqRule {
        keywords: &["price", "pricing", "cost"],
        answer: "Pricing depends on scope. Many dashboard builds start around $1,500+. I can \
             give a clear quote after a quick audit call.",
    },
    FaqRule {
        keywords: &["quickbooks", "fishbowl", "inventory"],
        answer: "Yes — I can help reconcile Fishbowl + QuickBooks, standardize definitions, and \
             build exception reports so you can trust totals.",
    },
    FaqRule {
        keywords: &["time", "timeline", "how long"],
        answer: "Most clients get a usable dashboard or report pack in 2–4 weeks after data \
             access is set up.",
    },
    FaqRule {
        keywords: &["tools", "power bi", "excel", "sql"],
        answer: "I work with SQL, Excel, and BI dashboards (Power BI or similar). The goal is a \
             refreshable system your team can maintain.",
    },
    FaqRule {
        keywords: &["start", "next step", "call"],
        answer: "Next step is a 15-minute call. Use the contact form and mention your systems + \
             goals, and I’ll reply with a plan.",
    },
];

/// Pick the canned answer for a user message: case-insensitive substring
/// match against the rule table, first rule wins, generic prompt otherwise.
#[must_use]
pub fn bot_reply(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|key| lower.contains(key)))
        .map_or(FALLBACK_REPLY, |rule| rule.answer)
}

/// Escape `& < > " '` so user text renders as text, never as markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Widget state: visibility plus the in-memory transcript.
#[derive(Debug, Default)]
pub struct ChatWidget {
    open: bool,
    transcript: Vec<ChatMessage>,
}

impl ChatWidget {
    /// Starts closed with an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The launcher was clicked: open if closed, close if open.
    pub fn launcher_clicked(&mut self) -> Vec<Effect> {
        if self.open { self.close() } else { self.open() }
    }

    /// The explicit close control was clicked.
    pub fn close_clicked(&mut self) -> Vec<Effect> {
        self.close()
    }

    /// The chat form was submitted. Empty-after-trim input is ignored;
    /// otherwise the user message is appended immediately and the bot reply
    /// is scheduled.
    pub fn submit(&mut self, text: &str) -> Vec<Effect> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut effects = self.append(text.to_owned(), Sender::User);
        effects.push(Effect::ClearChatInput);
        effects.push(Effect::Schedule {
            delay_ms: BOT_REPLY_DELAY_MS,
            task: Task::BotReply(bot_reply(text).to_owned()),
        });
        effects
    }

    /// A scheduled bot reply fired. Appended unconditionally: a close in the
    /// meantime does not cancel the pending reply.
    pub fn bot_arrived(&mut self, text: String) -> Vec<Effect> {
        self.append(text, Sender::Bot)
    }

    /// Whether the panel is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    fn open(&mut self) -> Vec<Effect> {
        self.open = true;
        let mut effects = vec![Effect::ChatVisible(true)];
        effects.extend(self.append(GREETING.to_owned(), Sender::Bot));
        effects.push(Effect::FocusChatInput);
        effects
    }

    fn close(&mut self) -> Vec<Effect> {
        self.open = false;
        self.transcript.clear();
        vec![Effect::ClearTranscript, Effect::ChatVisible(false)]
    }

    fn append(&mut self, text: String, sender: Sender) -> Vec<Effect> {
        let message = ChatMessage { text, sender };
        self.transcript.push(message.clone());
        vec![Effect::AppendMessage(message)]
    }
}
