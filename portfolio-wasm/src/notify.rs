use gloo::timers::callback::Timeout;
use portfolio_core::NotificationKind;
use portfolio_core::notify::{
    EXIT_MS, NOTIFICATION_EXIT, NOTIFICATION_MS, POPUP_CLASS, POPUP_CSS, POPUP_EXIT, POPUP_MS,
};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::{create_div, set_style, warn};
use crate::state::Page;

/// Append `el` to the body, then after `stay_ms` switch to `exit_animation`
/// and remove it once that has played.
fn show_transient(
    page: &Page,
    el: HtmlElement,
    stay_ms: u32,
    exit_animation: &'static str,
) -> Result<(), JsValue> {
    page.document.body().ok_or("no body")?.append_child(&el)?;
    Timeout::new(stay_ms, move || {
        set_style(&el, "animation", exit_animation);
        Timeout::new(EXIT_MS, move || el.remove()).forget();
    })
    .forget();
    Ok(())
}

fn try_show_notification(
    page: &Page,
    message: &str,
    kind: NotificationKind,
) -> Result<(), JsValue> {
    let el = create_div(&page.document, &kind.class_name())?;
    el.style().set_css_text(&kind.css());
    el.set_text_content(Some(message));
    show_transient(page, el, NOTIFICATION_MS, NOTIFICATION_EXIT)
}

/// Top-right toast.
pub fn show_notification(page: &Page, message: &str, kind: NotificationKind) {
    if let Err(e) = try_show_notification(page, message, kind) {
        warn(&format!("notification failed: {:?}", e));
    }
}

fn try_show_popup(page: &Page, message: &str) -> Result<(), JsValue> {
    let el = create_div(&page.document, POPUP_CLASS)?;
    el.style().set_css_text(POPUP_CSS);
    el.set_text_content(Some(message));
    show_transient(page, el, POPUP_MS, POPUP_EXIT)
}

/// Centered popup used for the cage tech facts.
pub fn show_popup(page: &Page, message: &str) {
    if let Err(e) = try_show_popup(page, message) {
        warn(&format!("popup failed: {:?}", e));
    }
}
