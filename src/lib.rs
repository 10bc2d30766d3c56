//! Interaction engine for the marketing site, compiled to WebAssembly.
//!
//! This crate runs in the browser and owns the page's dynamic behavior: the
//! mobile navigation toggle, scroll-driven active-link highlighting, the FAQ
//! accordion, the footer year stamp, the contact form's `mailto:` handoff,
//! and the canned-response chat widget. Each feature is a small headless
//! state machine whose handlers return [`effect::Effect`] values; the [`bind`]
//! layer translates DOM events into handler calls and applies the resulting
//! effects back to the document.
//!
//! Features are independent: a missing page element disables that feature
//! only, and startup never fails because of absent markup.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Aggregate [`engine::PageCore`] and one-shot task dispatch |
//! | [`effect`] | DOM mutation and deferred-task descriptions |
//! | [`nav`] | Mobile navigation open/close state |
//! | [`scrollspy`] | Section extents and active-link selection |
//! | [`accordion`] | One-open-at-a-time FAQ state |
//! | [`footer`] | Footer year stamp |
//! | [`contact`] | Contact form serialization into a `mailto:` draft |
//! | [`chat`] | Chat widget state machine and canned-reply table |
//! | [`bind`] | DOM lookup, event listeners, and effect application |
//! | [`consts`] | Shared constants (probe offset, delays, contact address) |

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod accordion;
pub mod bind;
pub mod chat;
pub mod consts;
pub mod contact;
pub mod effect;
pub mod engine;
pub mod footer;
pub mod nav;
pub mod scrollspy;

/// Module entry point: wire every page feature present in the document.
///
/// # Errors
///
/// Returns `Err` only for DOM-level failures while registering listeners.
/// Missing page elements are not errors; the affected feature is skipped.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    bind::bind_page(&window, &document)?;

    log::info!("sitekit ready");
    Ok(())
}
