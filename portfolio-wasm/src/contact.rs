use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use portfolio_core::contact::{SUBMIT_DELAY_MS, SUCCESS_MESSAGE};
use portfolio_core::{ContactMessage, NotificationKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FormData, HtmlButtonElement, HtmlFormElement};

use crate::dom::{set_class, warn};
use crate::notify::show_notification;
use crate::state::Page;

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

pub fn read_form(form: &HtmlFormElement) -> Result<ContactMessage, JsValue> {
    let data = FormData::new_with_form(form)?;
    Ok(ContactMessage {
        name: field(&data, "name"),
        email: field(&data, "email"),
        subject: field(&data, "subject"),
        message: field(&data, "message"),
    })
}

fn set_loading(button: Option<&HtmlButtonElement>, loading: bool) {
    if let Some(b) = button {
        set_class(b, "loading", loading);
        b.set_disabled(loading);
    }
}

/// Hand the message to the user's mail client. Returns whether it was sent.
fn submit(page: &Page, form: &HtmlFormElement, msg: &ContactMessage) -> bool {
    if let Err(e) = msg.validate() {
        show_notification(page, &e.to_string(), NotificationKind::Info);
        return false;
    }
    let uri = msg.mailto_uri(&page.config.contact.recipient);
    if let Err(e) = page.window.location().set_href(&uri) {
        warn(&format!("could not open mail client: {:?}", e));
        return false;
    }
    show_notification(page, SUCCESS_MESSAGE, NotificationKind::Success);
    form.reset();
    true
}

/// Intercept `#contact-form` and turn submissions into a `mailto:` link.
pub fn setup_form_handling(page: &Page) -> Result<(), JsValue> {
    let Some(form) = page.document.get_element_by_id("contact-form") else {
        return Ok(());
    };
    let form = form.dyn_into::<HtmlFormElement>()?;
    let pg = page.clone();
    let el = form.clone();
    page.listen(EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |e: &Event| {
            e.prevent_default();
            let button = el
                .query_selector(".btn-submit")
                .ok()
                .flatten()
                .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
            // Read the fields now: the form may change during the delay.
            let msg = match read_form(&el) {
                Ok(m) => m,
                Err(err) => {
                    warn(&format!("could not read contact form: {:?}", err));
                    return;
                }
            };
            set_loading(button.as_ref(), true);
            let pg = pg.clone();
            let form = el.clone();
            let generation = pg.generation();
            Timeout::new(SUBMIT_DELAY_MS, move || {
                if pg.is_current(generation) {
                    submit(&pg, &form, &msg);
                }
                set_loading(button.as_ref(), false);
            })
            .forget();
        },
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, teardown};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FORM: &str = r#"<form id="contact-form">
        <input name="name" value="Ada">
        <input name="email" value="ada@example.com">
        <input name="subject" value="Hello there">
        <textarea name="message">Line one</textarea>
        <button class="btn-submit" type="submit">Send</button>
    </form>"#;

    #[wasm_bindgen_test]
    fn reads_all_fields() {
        let (page, root) = fixture(FORM);
        let form = page
            .document
            .get_element_by_id("contact-form")
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap();
        let msg = read_form(&form).unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.subject, "Hello there");
        assert_eq!(msg.message, "Line one");
        teardown(&page, &root);
    }

    #[wasm_bindgen_test]
    fn submit_marks_button_loading() {
        let (page, root) = fixture(FORM);
        setup_form_handling(&page).unwrap();
        let form = page
            .document
            .get_element_by_id("contact-form")
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap();
        let submit = Event::new("submit").unwrap();
        form.dispatch_event(&submit).unwrap();
        let button = form
            .query_selector(".btn-submit")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlButtonElement>()
            .unwrap();
        assert!(button.class_list().contains("loading"));
        assert!(button.disabled());
        // Stop the pending hand-off by detaching the page before it fires.
        teardown(&page, &root);
    }

    #[wasm_bindgen_test]
    fn invalid_message_shows_info_instead_of_navigating() {
        let (page, root) = fixture(FORM);
        let form = page
            .document
            .get_element_by_id("contact-form")
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap();
        let msg = ContactMessage {
            email: "not-an-email".into(),
            ..read_form(&form).unwrap()
        };
        assert!(!submit(&page, &form, &msg));
        let note = page
            .document
            .query_selector(".notification-info")
            .unwrap()
            .unwrap();
        assert!(note.text_content().unwrap().contains("not-an-email"));
        note.remove();
        teardown(&page, &root);
    }
}
