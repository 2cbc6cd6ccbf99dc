use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use portfolio_core::typing::Typewriter;
use web_sys::HtmlElement;

use crate::dom::by_id;
use crate::state::Page;

fn type_next(page: Page, el: HtmlElement, tw: Rc<RefCell<Typewriter>>, generation: u32) {
    if !page.is_current(generation) {
        return;
    }
    let frame = tw.borrow_mut().tick();
    el.set_text_content(Some(&frame.text));
    Timeout::new(frame.delay_ms, move || type_next(page, el, tw, generation)).forget();
}

/// Cycle the configured phrases through `#typing-text`.
pub fn setup_typing_effect(page: &Page) {
    let Some(el) = by_id(&page.document, "typing-text") else {
        return;
    };
    let tw = Typewriter::new(&page.config.typing);
    if tw.is_empty() {
        return;
    }
    type_next(
        page.clone(),
        el,
        Rc::new(RefCell::new(tw)),
        page.generation(),
    );
}
