//! Shared constants for the page features.

// ── ScrollSpy ───────────────────────────────────────────────────

/// Pixels added below the viewport top when probing which section is in view.
/// Compensates for the fixed header covering the top of the page.
pub const SCROLL_PROBE_OFFSET_PX: f64 = 120.0;

// ── Deferred tasks ──────────────────────────────────────────────

/// Delay before the bot reply is appended to the chat transcript.
pub const BOT_REPLY_DELAY_MS: u32 = 250;

/// Delay before the contact form status flips to the manual-send fallback.
pub const MAILTO_FALLBACK_DELAY_MS: u32 = 800;

// ── Contact ─────────────────────────────────────────────────────

/// Recipient address for the contact form's `mailto:` draft.
pub const CONTACT_EMAIL: &str = "theshanewasserman@gmail.com";
