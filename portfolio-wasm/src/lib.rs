use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_core::SiteConfig;
use portfolio_core::notify::EXTRA_STYLES;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

pub mod cage;
mod canvas;
pub mod contact;
pub mod dom;
pub mod effects;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod state;
pub mod typing;

pub use state::{PAGE, Page};

use crate::dom::{log, warn};

const LOADED_DELAY_MS: u32 = 1000;
const LOADED_MESSAGE: &str = "Portfolio fully loaded and interactive!";

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(EXTRA_STYLES));
    document.head().ok_or("no head")?.append_child(&style)?;
    Ok(())
}

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn(&format!("{} setup failed: {:?}", what, e));
    }
}

/// Wire every controller onto the current document. Missing optional
/// elements simply leave their controller idle; a controller that fails is
/// logged and the rest still start.
pub fn init(window: Window, document: Document, config: SiteConfig) -> Page {
    let page = Page::new(window, document, config);

    report("navigation", nav::setup_navigation(&page));
    report("hero", cage::setup_hero_interactions(&page));
    report("scroll", scroll::setup_scroll_effects(&page));
    report("contact form", contact::setup_form_handling(&page));
    report("reveal", reveal::setup_animations(&page));
    report("matrix", effects::setup_matrix_rain(&page));
    effects::setup_particle_system(&page);
    typing::setup_typing_effect(&page);
    report("counters", reveal::setup_counter_animations(&page));
    report("progress bars", reveal::setup_progress_bars(&page));
    cage::setup_visibility(&page);

    if let Some(body) = page.document.body() {
        let generation = page.generation();
        let pg = page.clone();
        Timeout::new(LOADED_DELAY_MS, move || {
            if pg.is_current(generation) {
                let _ = body.class_list().add_1("loaded");
            }
        })
        .forget();
    }

    if let Some(old) = PAGE.with(|p| p.replace(Some(page.clone()))) {
        old.stop();
    }
    page
}

async fn boot(window: Window, document: Document) {
    let config = dom::load_config(&window).await;
    init(window, document, config);
}

/// Log readiness on the window `load` event, or right away if it has already
/// fired. Returns whether the message was logged immediately.
fn announce_load(window: &Window, ready_state: &str) -> bool {
    if ready_state == "complete" {
        log(LOADED_MESSAGE);
        return true;
    }
    EventListener::once(window, "load", |_e: &Event| log(LOADED_MESSAGE)).forget();
    false
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    inject_styles(&document)?;
    announce_load(&window, &document.ready_state());

    if document.ready_state() == "loading" {
        let win = window.clone();
        let doc = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_e: &Event| {
            wasm_bindgen_futures::spawn_local(boot(win, doc));
        })
        .forget();
    } else {
        wasm_bindgen_futures::spawn_local(boot(window, document));
    }
    Ok(())
}

/// Detach every listener, stop every interval and observer, and let pending
/// timeouts lapse.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(page) = PAGE.with(|p| p.borrow_mut().take()) {
        page.stop();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use portfolio_core::SiteConfig;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, MouseEvent, MouseEventInit};

    use crate::state::Page;

    /// Mount `html` in a fresh container and build a page over the document.
    pub fn fixture(html: &str) -> (Page, HtmlElement) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let root = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        (Page::new(window, document, SiteConfig::default()), root)
    }

    pub fn teardown(page: &Page, root: &HtmlElement) {
        page.stop();
        root.remove();
    }

    pub fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_client_x(x);
        init.set_client_y(y);
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::by_id;
    use crate::test_support::{fixture, teardown};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn init_wires_listeners_and_shutdown_drops_them() {
        let (page, root) = fixture(
            r##"<nav class="navbar"><a class="nav-link" href="#about">About</a></nav>
                <section id="about"><span id="typing-text"></span></section>"##,
        );
        let page = init(page.window.clone(), page.document.clone(), SiteConfig::default());
        assert!(page.registry.borrow().listener_count() > 0);
        assert!(PAGE.with(|p| p.borrow().is_some()));
        // typing writes the first character synchronously
        let typed = page
            .document
            .get_element_by_id("typing-text")
            .unwrap()
            .text_content()
            .unwrap_or_default();
        assert_eq!(typed, "M");

        shutdown();
        assert!(PAGE.with(|p| p.borrow().is_none()));
        assert_eq!(page.registry.borrow().listener_count(), 0);
        if let Some(btn) = page.document.get_element_by_id("backToTop") {
            btn.remove();
        }
        teardown(&page, &root);
    }

    #[wasm_bindgen_test]
    fn failing_controller_does_not_stop_the_rest() {
        // A contact form that is not a <form> makes the form controller fail.
        let (page, root) = fixture(
            r#"<div id="contact-form"></div>
               <span id="typing-text"></span>
               <span class="stat-number" data-target="5"></span>"#,
        );
        let page = init(page.window.clone(), page.document.clone(), SiteConfig::default());
        let typed = by_id(&page.document, "typing-text")
            .unwrap()
            .text_content()
            .unwrap_or_default();
        assert_eq!(typed, "M");
        assert_eq!(page.registry.borrow().observer_count(), 1);
        assert!(PAGE.with(|p| p.borrow().is_some()));

        shutdown();
        assert_eq!(page.registry.borrow().observer_count(), 0);
        if let Some(btn) = page.document.get_element_by_id("backToTop") {
            btn.remove();
        }
        teardown(&page, &root);
    }

    #[wasm_bindgen_test]
    fn load_is_announced_even_after_it_fired() {
        let window = web_sys::window().unwrap();
        assert!(announce_load(&window, "complete"));
        assert!(!announce_load(&window, "interactive"));
        assert!(!announce_load(&window, "loading"));
    }

    #[wasm_bindgen_test]
    fn stylesheet_is_injected_into_head() {
        let document = web_sys::window().unwrap().document().unwrap();
        inject_styles(&document).unwrap();
        let head = document.head().unwrap().inner_html();
        assert!(head.contains("@keyframes popupShow"));
    }
}
