use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use portfolio_core::cage::{
    FACE_PRESS_MS, FACE_PRESS_SCALE, RESUME_DELAY_MS, RIPPLE_MS, VISIBLE_RESUME_DELAY_MS,
    ripple_geometry, without_press_scale,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

use crate::dom::{by_id, create_div, query_all, set_style, style_of};
use crate::notify::show_popup;
use crate::state::Page;

const CAGE_ID: &str = "rotatingCage";

fn first_touch(e: &TouchEvent) -> Option<(f64, f64)> {
    let t = e.touches().get(0)?;
    Some((t.client_x() as f64, t.client_y() as f64))
}

fn schedule_resume(page: &Page, cage: &HtmlElement) {
    let pg = page.clone();
    let cage = cage.clone();
    let generation = page.generation();
    Timeout::new(RESUME_DELAY_MS, move || {
        if !pg.is_current(generation) {
            return;
        }
        let mut drag = pg.cage.borrow_mut();
        if drag.should_resume() {
            drag.resume();
            set_style(&cage, "animation-play-state", "running");
            set_style(&cage, "transform", "");
        }
    })
    .forget();
}

fn apply_drag(page: &Page, cage: &HtmlElement, x: f64, y: f64) -> bool {
    let rotation = page.cage.borrow_mut().drag(x, y);
    match rotation {
        Some(r) => {
            set_style(cage, "transform", &r.transform());
            true
        }
        None => false,
    }
}

/// Pointer and touch dragging of the hero cage.
pub fn setup_cage_interaction(page: &Page, cage: &HtmlElement) -> Result<(), JsValue> {
    let doc = page.document.clone();
    let no_passive = EventListenerOptions::enable_prevent_default;

    {
        let pg = page.clone();
        let el = cage.clone();
        page.listen(EventListener::new(cage, "mousedown", move |e: &Event| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            pg.cage
                .borrow_mut()
                .press(e.client_x() as f64, e.client_y() as f64);
            set_style(&el, "animation-play-state", "paused");
            set_style(&el, "cursor", "grabbing");
        }));
    }
    {
        let pg = page.clone();
        let el = cage.clone();
        page.listen(EventListener::new(&doc, "mousemove", move |e: &Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                apply_drag(&pg, &el, e.client_x() as f64, e.client_y() as f64);
            }
        }));
    }
    {
        let pg = page.clone();
        let el = cage.clone();
        page.listen(EventListener::new(&doc, "mouseup", move |_e: &Event| {
            let ended = pg.cage.borrow_mut().release();
            if ended {
                set_style(&el, "cursor", "grab");
                schedule_resume(&pg, &el);
            }
        }));
    }
    {
        let pg = page.clone();
        let el = cage.clone();
        page.listen(EventListener::new_with_options(
            cage,
            "touchstart",
            no_passive(),
            move |e: &Event| {
                let Some(te) = e.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some((x, y)) = first_touch(te) else {
                    return;
                };
                pg.cage.borrow_mut().press(x, y);
                set_style(&el, "animation-play-state", "paused");
                e.prevent_default();
            },
        ));
    }
    {
        let pg = page.clone();
        let el = cage.clone();
        page.listen(EventListener::new_with_options(
            &doc,
            "touchmove",
            no_passive(),
            move |e: &Event| {
                let Some((x, y)) = e.dyn_ref::<TouchEvent>().and_then(first_touch) else {
                    return;
                };
                if apply_drag(&pg, &el, x, y) {
                    e.prevent_default();
                }
            },
        ));
    }
    for kind in ["touchend", "touchcancel"] {
        let pg = page.clone();
        let el = cage.clone();
        page.listen(EventListener::new(&doc, kind, move |_e: &Event| {
            let ended = pg.cage.borrow_mut().release();
            if ended {
                schedule_resume(&pg, &el);
            }
        }));
    }
    Ok(())
}

fn create_ripple_effect(page: &Page, face: &HtmlElement, e: &MouseEvent) -> Result<(), JsValue> {
    let rect = face.get_bounding_client_rect();
    let ripple = ripple_geometry(
        (rect.left(), rect.top(), rect.width(), rect.height()),
        (e.client_x() as f64, e.client_y() as f64),
    );
    let node = create_div(&page.document, "ripple")?;
    node.style().set_css_text(&ripple.css());
    set_style(face, "position", "relative");
    face.append_child(&node)?;
    Timeout::new(RIPPLE_MS, move || node.remove()).forget();
    Ok(())
}

/// Ripple, tech fact popup and a short press scale on each cage face.
pub fn setup_cage_face_clicks(page: &Page) {
    for face in query_all(&page.document, ".cage-face") {
        let pg = page.clone();
        let el = face.clone();
        page.listen(EventListener::new(&face, "click", move |e: &Event| {
            e.stop_propagation();
            if let Some(me) = e.dyn_ref::<MouseEvent>()
                && let Err(err) = create_ripple_effect(&pg, &el, me)
            {
                crate::dom::warn(&format!("ripple failed: {:?}", err));
            }
            let skill = el.get_attribute("data-skill").unwrap_or_default();
            show_popup(&pg, pg.config.fact_for(&skill));

            let pressed = format!("{}{}", style_of(&el, "transform"), FACE_PRESS_SCALE);
            set_style(&el, "transform", &pressed);
            let face = el.clone();
            Timeout::new(FACE_PRESS_MS, move || {
                let restored = without_press_scale(&style_of(&face, "transform"));
                set_style(&face, "transform", &restored);
            })
            .forget();
        }));
    }
}

/// Orbit items show their `data-tech` label as a tooltip.
pub fn setup_orbit_item_hovers(page: &Page) {
    for item in query_all(&page.document, ".orbit-item") {
        let el = item.clone();
        page.listen(EventListener::new(&item, "mouseenter", move |_e: &Event| {
            if let Some(tech) = el.get_attribute("data-tech") {
                el.set_title(&tech);
            }
        }));
    }
}

/// Pause the idle cage animation while the tab is hidden; resume shortly after
/// it becomes visible unless a drag is in progress.
pub fn setup_visibility(page: &Page) {
    let pg = page.clone();
    page.listen(EventListener::new(
        &page.document,
        "visibilitychange",
        move |_e: &Event| {
            let Some(cage) = by_id(&pg.document, CAGE_ID) else {
                return;
            };
            if pg.document.hidden() {
                set_style(&cage, "animation-play-state", "paused");
                return;
            }
            let pg2 = pg.clone();
            let generation = pg.generation();
            Timeout::new(VISIBLE_RESUME_DELAY_MS, move || {
                if pg2.is_current(generation) && pg2.cage.borrow().should_resume() {
                    set_style(&cage, "animation-play-state", "running");
                }
            })
            .forget();
        },
    ));
}

/// Hero section: cage drag, cage faces, mouse trail and orbit tooltips.
pub fn setup_hero_interactions(page: &Page) -> Result<(), JsValue> {
    if let Some(cage) = by_id(&page.document, CAGE_ID) {
        setup_cage_interaction(page, &cage)?;
        setup_cage_face_clicks(page);
    }
    crate::effects::setup_mouse_trail(page);
    setup_orbit_item_hovers(page);
    Ok(())
}
