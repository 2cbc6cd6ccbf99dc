use gloo::events::{EventListener, EventListenerOptions};
use portfolio_core::nav::{SectionBox, active_section, anchor_target, link_targets};
use wasm_bindgen::prelude::*;
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{by_id, query_all, set_class};
use crate::state::Page;

/// Mobile menu toggle, menu close on link click, and smooth in-page scrolling.
pub fn setup_navigation(page: &Page) -> Result<(), JsValue> {
    let doc = &page.document;
    let toggle = by_id(doc, "nav-toggle");
    let menu = by_id(doc, "nav-menu");

    if let (Some(toggle), Some(menu)) = (toggle.clone(), menu.clone()) {
        let target = toggle.clone();
        page.listen(EventListener::new(&target, "click", move |_e: &Event| {
            let _ = menu.class_list().toggle("active");
            let _ = toggle.class_list().toggle("active");
        }));
    }

    for link in query_all(doc, ".nav-link") {
        let toggle = toggle.clone();
        let menu = menu.clone();
        page.listen(EventListener::new(&link, "click", move |_e: &Event| {
            for el in [&menu, &toggle].into_iter().flatten() {
                set_class(el, "active", false);
            }
        }));
    }

    for anchor in query_all(doc, r##"a[href^="#"]"##) {
        let doc = doc.clone();
        let href_el = anchor.clone();
        page.listen(EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |e: &Event| {
                e.prevent_default();
                let href = href_el.get_attribute("href").unwrap_or_default();
                if let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id))
                {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    opts.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            },
        ));
    }
    Ok(())
}

/// Highlight the nav link of the section currently under the viewport top.
pub fn update_active_nav_link(page: &Page, scroll_y: f64) {
    let doc = &page.document;
    let sections: Vec<SectionBox> = query_all(doc, "section")
        .iter()
        .map(|s| SectionBox {
            id: s.get_attribute("id"),
            top: s.offset_top() as f64,
            height: s.client_height() as f64,
        })
        .collect();
    let current = active_section(&sections, scroll_y, page.config.scroll.section_offset);
    for link in query_all(doc, ".nav-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        let on = current.is_some_and(|id| link_targets(&href, id));
        set_class(&link, "active", on);
    }
}
