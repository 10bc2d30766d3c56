//! DOM wiring: element lookup, event listeners, and effect application.
//!
//! This module is the only place that touches `web_sys`. It measures the
//! page once, registers `Closure`-based listeners that feed events into
//! [`PageCore`], and interprets the returned [`Effect`]s as DOM mutations.
//! Every expected element is optional: a missing one disables its feature
//! (logged at debug level) and nothing else.
//!
//! All fallible DOM calls propagate errors via `Result<_, JsValue>`. Errors
//! inside event closures cannot propagate to a caller, so they are logged.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{
    Document, Element, Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, Node,
    NodeList, Window,
};

use crate::chat::{ChatMessage, Sender, escape_html};
use crate::contact::{self, FormFields};
use crate::effect::Effect;
use crate::engine::PageCore;
use crate::footer;
use crate::scrollspy::{SECTION_IDS, Section};

/// The page elements the features operate on, looked up once at bind time.
pub struct PageElements {
    document: Document,
    nav: Option<Element>,
    nav_toggle: Option<Element>,
    nav_links: Vec<Element>,
    faq_controls: Vec<Element>,
    contact_form: Option<HtmlFormElement>,
    form_status: Option<Element>,
    chat_form: Option<Element>,
    chat_launcher: Option<Element>,
    chat_window: Option<HtmlElement>,
    chat_close: Option<Element>,
    chat_body: Option<Element>,
    chat_text: Option<HtmlInputElement>,
}

impl PageElements {
    /// Look up every expected element. Absences are logged, never fatal.
    fn find(document: &Document) -> Result<Self, JsValue> {
        let by_id = |id: &str| {
            let found = document.get_element_by_id(id);
            if found.is_none() {
                log::debug!("element #{id} not found");
            }
            found
        };

        let nav = by_id("nav");
        let nav_links = match &nav {
            Some(nav) => node_list_elements(&nav.query_selector_all("a")?),
            None => Vec::new(),
        };

        Ok(Self {
            document: document.clone(),
            nav,
            nav_toggle: by_id("navToggle"),
            nav_links,
            faq_controls: node_list_elements(&document.query_selector_all(".faq-q")?),
            contact_form: by_id("contactForm").and_then(|el| el.dyn_into().ok()),
            form_status: by_id("formStatus"),
            chat_form: by_id("chatForm"),
            chat_launcher: by_id("chatLauncher"),
            chat_window: by_id("chatWindow").and_then(|el| el.dyn_into().ok()),
            chat_close: by_id("chatClose"),
            chat_body: by_id("chatBody"),
            chat_text: by_id("chatText").and_then(|el| el.dyn_into().ok()),
        })
    }
}

/// Wire every feature present in the document.
///
/// # Errors
///
/// Returns `Err` for DOM-level failures while querying elements or
/// registering listeners — not for missing page elements.
pub fn bind_page(window: &Window, document: &Document) -> Result<(), JsValue> {
    let els = Rc::new(PageElements::find(document)?);
    let core = Rc::new(RefCell::new(PageCore::new(
        measure_sections(document),
        els.faq_controls.len(),
    )));

    bind_nav(window, document, &core, &els)?;
    bind_scrollspy(window, &core, &els)?;
    bind_accordion(window, &core, &els)?;
    stamp_footer(document);
    bind_contact(window, &core, &els)?;
    bind_chat(window, &core, &els)?;
    Ok(())
}

/// Measure the vertical extent of each known section, in page order.
/// Missing sections are skipped.
fn measure_sections(document: &Document) -> Vec<Section> {
    SECTION_IDS
        .iter()
        .filter_map(|id| {
            let el: HtmlElement = document.get_element_by_id(id)?.dyn_into().ok()?;
            Some(Section {
                id: (*id).to_owned(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

// ── Feature wiring ──────────────────────────────────────────────

fn bind_nav(
    window: &Window,
    document: &Document,
    core: &Rc<RefCell<PageCore>>,
    els: &Rc<PageElements>,
) -> Result<(), JsValue> {
    let (Some(nav), Some(toggle)) = (els.nav.clone(), els.nav_toggle.clone()) else {
        log::debug!("nav panel or toggle missing; mobile nav disabled");
        return Ok(());
    };

    {
        let window = window.clone();
        let core = Rc::clone(core);
        let els = Rc::clone(els);
        let on_toggle = Closure::<dyn FnMut()>::new(move || {
            let effects = core.borrow_mut().nav.toggle();
            apply_or_log(&window, &els, &core, effects);
        });
        toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
        on_toggle.forget(); // listeners live for the page lifetime
    }

    // Close after clicking any nav link (mobile UX).
    for link in &els.nav_links {
        let window = window.clone();
        let core = Rc::clone(core);
        let els = Rc::clone(els);
        let on_link = Closure::<dyn FnMut()>::new(move || {
            let effects = core.borrow_mut().nav.link_clicked();
            apply_or_log(&window, &els, &core, effects);
        });
        link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())?;
        on_link.forget();
    }

    // Close when clicking outside the nav/toggle region.
    {
        let window = window.clone();
        let core = Rc::clone(core);
        let els = Rc::clone(els);
        let on_document_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = target
                .as_ref()
                .is_some_and(|node| nav.contains(Some(node)) || toggle.contains(Some(node)));
            let effects = core.borrow_mut().nav.outside_click(inside);
            apply_or_log(&window, &els, &core, effects);
        });
        document
            .add_event_listener_with_callback("click", on_document_click.as_ref().unchecked_ref())?;
        on_document_click.forget();
    }

    Ok(())
}

fn bind_scrollspy(
    window: &Window,
    core: &Rc<RefCell<PageCore>>,
    els: &Rc<PageElements>,
) -> Result<(), JsValue> {
    // Highlight once at startup, then on every scroll event.
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let effects = core.borrow().spy.on_scroll(scroll_y);
    apply_or_log(window, els, core, effects);

    let listener_window = window.clone();
    let core = Rc::clone(core);
    let els = Rc::clone(els);
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let scroll_y = listener_window.scroll_y().unwrap_or(0.0);
        let effects = core.borrow().spy.on_scroll(scroll_y);
        apply_or_log(&listener_window, &els, &core, effects);
    });
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn bind_accordion(
    window: &Window,
    core: &Rc<RefCell<PageCore>>,
    els: &Rc<PageElements>,
) -> Result<(), JsValue> {
    for (index, control) in els.faq_controls.iter().enumerate() {
        let window = window.clone();
        let core = Rc::clone(core);
        let els = Rc::clone(els);
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let effects = core.borrow_mut().accordion.click(index);
            apply_or_log(&window, &els, &core, effects);
        });
        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn stamp_footer(document: &Document) {
    let Some(slot) = document.get_element_by_id("year") else {
        log::debug!("footer year slot missing");
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    slot.set_text_content(Some(&footer::year_text(year)));
}

fn bind_contact(
    window: &Window,
    core: &Rc<RefCell<PageCore>>,
    els: &Rc<PageElements>,
) -> Result<(), JsValue> {
    let Some(form) = els.contact_form.clone() else {
        log::debug!("contact form missing; mailto bridge disabled");
        return Ok(());
    };

    let listener_window = window.clone();
    let core = Rc::clone(core);
    let els = Rc::clone(els);
    let listener_form = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let fields = read_fields(&listener_form);
        let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
        let page_url = listener_window.location().href().unwrap_or_default();
        let effects = contact::submit(&fields, &timestamp, &page_url);
        apply_or_log(&listener_window, &els, &core, effects);
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

fn bind_chat(
    window: &Window,
    core: &Rc<RefCell<PageCore>>,
    els: &Rc<PageElements>,
) -> Result<(), JsValue> {
    let (Some(launcher), Some(_)) = (els.chat_launcher.clone(), els.chat_window.clone()) else {
        log::debug!("chat launcher or window missing; chat widget disabled");
        return Ok(());
    };

    {
        let window = window.clone();
        let core = Rc::clone(core);
        let els = Rc::clone(els);
        let on_launcher = Closure::<dyn FnMut()>::new(move || {
            let effects = core.borrow_mut().chat.launcher_clicked();
            apply_or_log(&window, &els, &core, effects);
        });
        launcher.add_event_listener_with_callback("click", on_launcher.as_ref().unchecked_ref())?;
        on_launcher.forget();
    }

    if let Some(close) = els.chat_close.clone() {
        let window = window.clone();
        let core = Rc::clone(core);
        let els = Rc::clone(els);
        let on_close = Closure::<dyn FnMut()>::new(move || {
            let effects = core.borrow_mut().chat.close_clicked();
            apply_or_log(&window, &els, &core, effects);
        });
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }

    if let Some(form) = els.chat_form.clone() {
        let window = window.clone();
        let core = Rc::clone(core);
        let els = Rc::clone(els);
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let text = els.chat_text.as_ref().map(HtmlInputElement::value).unwrap_or_default();
            let effects = core.borrow_mut().chat.submit(&text);
            apply_or_log(&window, &els, &core, effects);
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
    }

    Ok(())
}

/// Read the contact form's fields, defaulting every absent value to "".
fn read_fields(form: &HtmlFormElement) -> FormFields {
    let Ok(data) = FormData::new_with_form(form) else {
        return FormFields::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    FormFields {
        name: field("name"),
        email: field("email"),
        company: field("company"),
        budget: field("budget"),
        message: field("message"),
    }
}

// ── Effect application ──────────────────────────────────────────

fn apply_or_log(
    window: &Window,
    els: &Rc<PageElements>,
    core: &Rc<RefCell<PageCore>>,
    effects: Vec<Effect>,
) {
    if let Err(err) = apply_effects(window, els, core, effects) {
        log::error!("failed to apply effects: {err:?}");
    }
}

fn apply_effects(
    window: &Window,
    els: &Rc<PageElements>,
    core: &Rc<RefCell<PageCore>>,
    effects: Vec<Effect>,
) -> Result<(), JsValue> {
    for effect in effects {
        apply_effect(window, els, core, effect)?;
    }
    Ok(())
}

fn apply_effect(
    window: &Window,
    els: &Rc<PageElements>,
    core: &Rc<RefCell<PageCore>>,
    effect: Effect,
) -> Result<(), JsValue> {
    match effect {
        Effect::NavOpen(open) => {
            if let Some(nav) = &els.nav {
                nav.class_list().toggle_with_force("open", open)?;
            }
            if let Some(toggle) = &els.nav_toggle {
                toggle.set_attribute("aria-expanded", if open { "true" } else { "false" })?;
            }
        }
        Effect::ActiveLink(id) => {
            let target = id.map(|id| format!("#{id}"));
            for link in &els.nav_links {
                let active = target
                    .as_deref()
                    .is_some_and(|t| link.get_attribute("href").as_deref() == Some(t));
                link.class_list().toggle_with_force("active", active)?;
            }
        }
        Effect::FaqExpanded { index, expanded } => {
            if let Some(control) = els.faq_controls.get(index) {
                control.set_attribute("aria-expanded", if expanded { "true" } else { "false" })?;
            }
        }
        Effect::FormStatus(text) => {
            if let Some(slot) = &els.form_status {
                slot.set_text_content(Some(text));
            }
        }
        Effect::Navigate(uri) => {
            window.location().set_href(&uri)?;
        }
        Effect::ChatVisible(visible) => {
            if let Some(panel) = &els.chat_window {
                panel.set_hidden(!visible);
            }
        }
        Effect::AppendMessage(message) => {
            append_message(els, &message)?;
        }
        Effect::ClearTranscript => {
            if let Some(body) = &els.chat_body {
                body.set_inner_html("");
            }
        }
        Effect::ClearChatInput => {
            if let Some(input) = &els.chat_text {
                input.set_value("");
            }
        }
        Effect::FocusChatInput => {
            if let Some(input) = &els.chat_text {
                input.focus()?;
            }
        }
        Effect::Schedule { delay_ms, task } => {
            let fire_window = window.clone();
            let els = Rc::clone(els);
            let core = Rc::clone(core);
            let handle = one_shot(window, delay_ms, move || {
                let effects = core.borrow_mut().task_fired(task);
                apply_or_log(&fire_window, &els, &core, effects);
            })?;
            // Pending tasks are never cancelled (a close does not revoke an
            // in-flight bot reply), so the handle is released immediately.
            handle.forget();
        }
    }
    Ok(())
}

/// Append a rendered message to the chat body and pin the scroll to the
/// bottom. User-supplied text is HTML-escaped before insertion.
fn append_message(els: &PageElements, message: &ChatMessage) -> Result<(), JsValue> {
    let Some(body) = &els.chat_body else {
        return Ok(());
    };
    let entry = els.document.create_element("div")?;
    let who = match message.sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    };
    entry.set_class_name(&format!("msg {who}"));
    entry.set_inner_html(&escape_html(&message.text));
    body.append_child(&entry)?;
    body.set_scroll_top(body.scroll_height());
    Ok(())
}

// ── One-shot timers ─────────────────────────────────────────────

/// Handle to an armed one-shot timeout. Dropping the handle would invalidate
/// the callback, so it must be either [`cancel`](Self::cancel)led or
/// [`forget`](Self::forget)ten.
pub struct TimeoutHandle {
    id: i32,
    closure: Closure<dyn FnMut()>,
}

impl TimeoutHandle {
    /// Revoke the timeout before it fires.
    pub fn cancel(self, window: &Window) {
        window.clear_timeout_with_handle(self.id);
    }

    /// Let the timeout fire unowned.
    pub fn forget(self) {
        self.closure.forget();
    }
}

/// Arm a one-shot timeout running `f` after `delay_ms` milliseconds.
fn one_shot(
    window: &Window,
    delay_ms: u32,
    f: impl FnOnce() + 'static,
) -> Result<TimeoutHandle, JsValue> {
    let mut f = Some(f);
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    });
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    )?;
    Ok(TimeoutHandle { id, closure })
}

/// Collect a `NodeList` into the elements it contains.
fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
