use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use portfolio_core::counter::{CountUp, parse_leading_int};
use portfolio_core::reveal::{
    CARD_HOVER, CARD_REST, COUNTER_OBSERVER, COUNTER_SELECTOR, HIDDEN, HOVER_CARD_SELECTOR,
    ObserverOptions, PROGRESS_DELAY_MS, PROGRESS_OBSERVER, PROGRESS_SELECTOR, REVEAL_OBSERVER,
    REVEAL_SELECTOR, REVEAL_TRANSITION, SHOWN, progress_width,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom::{query_all, set_style, warn};
use crate::state::Page;

/// Observe every element matching `selector`, calling `on_visible` for each
/// entry that intersects. With `once`, an element is unobserved after it
/// first fires.
fn observe_all<F>(
    page: &Page,
    selector: &str,
    opts: ObserverOptions,
    once: bool,
    mut on_visible: F,
) -> Result<Vec<HtmlElement>, JsValue>
where
    F: FnMut(&HtmlElement) + 'static,
{
    let targets = query_all(&page.document, selector);
    if targets.is_empty() {
        return Ok(targets);
    }
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target: Element = entry.target();
                if let Ok(el) = target.clone().dyn_into::<HtmlElement>() {
                    on_visible(&el);
                }
                if once {
                    observer.unobserve(&target);
                }
            }
        },
    ));
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    init.set_root_margin(opts.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for t in &targets {
        observer.observe(t);
    }
    page.registry.borrow_mut().observe(observer, callback);
    Ok(targets)
}

/// Run a count-up on `el`, one step per animation frame. The frame loop ends
/// when the count lands or the page is stopped.
pub fn animate_counter(page: &Page, el: &HtmlElement) {
    let raw = el.get_attribute("data-target").unwrap_or_default();
    let Some(target) = parse_leading_int(&raw) else {
        warn(&format!("counter has no numeric data-target: {:?}", raw));
        return;
    };
    let mut counter = CountUp::new(target);
    let (text, more) = counter.step();
    el.set_text_content(Some(&text));
    if !more {
        return;
    }

    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let el = el.clone();
    let pg = page.clone();
    let generation = page.generation();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let more = pg.is_current(generation) && {
            let (text, more) = counter.step();
            el.set_text_content(Some(&text));
            more
        };
        if more
            && let Some(win) = web_sys::window()
            && let Some(cb) = f.borrow().as_ref()
        {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            return;
        }
        // Still executing inside the closure, so drop it from a later task.
        if let Some(cb) = f.borrow_mut().take() {
            Timeout::new(0, move || drop(cb)).forget();
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(win) = web_sys::window()
        && let Some(cb) = g.borrow().as_ref()
    {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn setup_counter_animations(page: &Page) -> Result<(), JsValue> {
    let pg = page.clone();
    observe_all(page, COUNTER_SELECTOR, COUNTER_OBSERVER, true, move |el| {
        animate_counter(&pg, el)
    })?;
    Ok(())
}

pub fn setup_progress_bars(page: &Page) -> Result<(), JsValue> {
    observe_all(page, PROGRESS_SELECTOR, PROGRESS_OBSERVER, true, |bar| {
        let raw = bar.get_attribute("data-width").unwrap_or_default();
        let Some(width) = progress_width(&raw).map(str::to_string) else {
            return;
        };
        let bar = bar.clone();
        Timeout::new(PROGRESS_DELAY_MS, move || set_style(&bar, "width", &width)).forget();
    })?;
    Ok(())
}

/// Fade/slide-in reveal for cards and timeline items, plus card hover lift.
pub fn setup_animations(page: &Page) -> Result<(), JsValue> {
    let revealed = observe_all(page, REVEAL_SELECTOR, REVEAL_OBSERVER, false, |el| {
        set_style(el, "opacity", SHOWN.0);
        set_style(el, "transform", SHOWN.1);
    })?;
    for el in &revealed {
        set_style(el, "opacity", HIDDEN.0);
        set_style(el, "transform", HIDDEN.1);
        set_style(el, "transition", REVEAL_TRANSITION);
    }

    for card in query_all(&page.document, HOVER_CARD_SELECTOR) {
        for (kind, transform) in [("mouseenter", CARD_HOVER), ("mouseleave", CARD_REST)] {
            let el = card.clone();
            page.listen(EventListener::new(&card, kind, move |_e: &Event| {
                set_style(&el, "transform", transform);
            }));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::dom::style_of;
    use crate::test_support::{fixture, teardown};
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    /// Pinned to the top-left corner so it is in view whatever the scroll.
    const PINNED: &str = "position: fixed; top: 0; left: 0; width: 100px; height: 100px";

    wasm_bindgen_test_configure!(run_in_browser);

    fn el(page: &Page, id: &str) -> HtmlElement {
        crate::dom::by_id(&page.document, id).unwrap()
    }

    #[wasm_bindgen_test]
    fn counter_starts_on_first_step() {
        let (page, root) = fixture(
            r#"<span id="a" data-target="40">?</span>
               <span id="b" data-target="0">?</span>
               <span id="c" data-target="many">?</span>"#,
        );
        animate_counter(&page, &el(&page, "a"));
        animate_counter(&page, &el(&page, "b"));
        animate_counter(&page, &el(&page, "c"));
        assert_eq!(el(&page, "a").text_content().unwrap(), "1");
        assert_eq!(el(&page, "b").text_content().unwrap(), "0");
        assert_eq!(el(&page, "c").text_content().unwrap(), "?");
        teardown(&page, &root);
    }

    #[wasm_bindgen_test]
    fn reveal_targets_start_hidden() {
        let (page, root) = fixture(r#"<div id="card" class="skill-card"></div>"#);
        setup_animations(&page).unwrap();
        let card = el(&page, "card");
        // The observer fires asynchronously, so the hidden state is still in place.
        assert_eq!(style_of(&card, "opacity"), "0");
        assert_eq!(style_of(&card, "transform"), "translateY(30px)");

        card.dispatch_event(&web_sys::Event::new("mouseenter").unwrap())
            .unwrap();
        assert_eq!(style_of(&card, "transform"), CARD_HOVER);
        teardown(&page, &root);
    }

    #[wasm_bindgen_test]
    async fn stopped_page_halts_a_running_counter() {
        let (page, root) = fixture(r#"<span id="n" data-target="1000"></span>"#);
        animate_counter(&page, &el(&page, "n"));
        assert_eq!(el(&page, "n").text_content().unwrap(), "8");
        page.stop();
        TimeoutFuture::new(200).await;
        assert_eq!(el(&page, "n").text_content().unwrap(), "8");
        root.remove();
    }

    async fn visible_hits(once: bool) -> u32 {
        let (page, root) = fixture(&format!(
            r#"<div id="t" class="watched" style="{PINNED}"></div>"#
        ));
        let hits = Rc::new(Cell::new(0u32));
        let seen = hits.clone();
        observe_all(&page, ".watched", REVEAL_OBSERVER, once, move |_| {
            seen.set(seen.get() + 1)
        })
        .unwrap();
        TimeoutFuture::new(300).await;
        let t = el(&page, "t");
        set_style(&t, "top", "-1000px");
        TimeoutFuture::new(300).await;
        set_style(&t, "top", "0");
        TimeoutFuture::new(300).await;
        teardown(&page, &root);
        hits.get()
    }

    #[wasm_bindgen_test]
    async fn once_observers_fire_a_single_time() {
        assert_eq!(visible_hits(true).await, 1);
        assert_eq!(visible_hits(false).await, 2);
    }

    #[wasm_bindgen_test]
    async fn progress_bar_fills_to_data_width_after_delay() {
        let (page, root) = fixture(&format!(
            r#"<div id="bar" class="progress-fill" data-width="3rem" style="{PINNED}"></div>"#
        ));
        setup_progress_bars(&page).unwrap();
        assert_eq!(style_of(&el(&page, "bar"), "width"), "100px");
        TimeoutFuture::new(PROGRESS_DELAY_MS + 400).await;
        assert_eq!(style_of(&el(&page, "bar"), "width"), "3rem");
        teardown(&page, &root);
    }
}
