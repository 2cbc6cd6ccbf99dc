use gloo::events::EventListener;
use portfolio_core::scroll::{ScrollEffects, parallax_transform};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{by_id, query, set_class, set_style, viewport_size};
use crate::nav::update_active_nav_link;
use crate::state::Page;

fn create_back_to_top_button(page: &Page) -> Result<HtmlElement, JsValue> {
    let btn = page
        .document
        .create_element("button")?
        .dyn_into::<HtmlElement>()?;
    btn.set_id("backToTop");
    btn.set_class_name("back-to-top");
    btn.set_inner_html(r#"<i class="fas fa-arrow-up"></i>"#);
    btn.set_title("Back to top");
    page.document
        .body()
        .ok_or("no body")?
        .append_child(&btn)?;
    Ok(btn)
}

/// Apply the scroll-dependent state for the current position.
pub fn apply_scroll(page: &Page, back_to_top: &HtmlElement) {
    let scroll_y = page.window.scroll_y().unwrap_or(0.0);
    let (_, viewport_h) = viewport_size(&page.window);
    let fx = ScrollEffects::at(scroll_y, viewport_h, &page.config.scroll);

    if let Some(navbar) = query(&page.document, ".navbar") {
        set_class(&navbar, "scrolled", fx.navbar_scrolled);
    }
    set_class(back_to_top, "visible", fx.back_to_top_visible);
    update_active_nav_link(page, scroll_y);
    if let (Some(offset), Some(hero)) = (fx.parallax, query(&page.document, ".hero")) {
        set_style(&hero, "transform", &parallax_transform(offset));
    }
}

pub fn setup_scroll_effects(page: &Page) -> Result<(), JsValue> {
    let back_to_top = match by_id(&page.document, "backToTop") {
        Some(b) => b,
        None => create_back_to_top_button(page)?,
    };

    {
        let pg = page.clone();
        let btn = back_to_top.clone();
        page.listen(EventListener::new(&page.window, "scroll", move |_e: &Event| {
            apply_scroll(&pg, &btn);
        }));
    }

    let win = page.window.clone();
    page.listen(EventListener::new(&back_to_top, "click", move |_e: &Event| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }));
    Ok(())
}
