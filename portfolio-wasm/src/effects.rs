use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use portfolio_core::matrix::MatrixRain;
use portfolio_core::particles::{
    MouseTrail, PARTICLE_LIFETIME_MS, ParticleStyle, TRAIL_LIFETIME_MS, px,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use crate::canvas::MatrixCanvas;
use crate::dom::{by_id, create_div, now_ms, random, set_style};
use crate::state::Page;

/// Falling-glyph backdrop on `#matrix-canvas`.
pub fn setup_matrix_rain(page: &Page) -> Result<(), JsValue> {
    if !page.config.effects.matrix {
        return Ok(());
    }
    let Some(canvas) = MatrixCanvas::find(&page.document)? else {
        return Ok(());
    };
    let rain = Rc::new(RefCell::new(MatrixRain::new(canvas.fit_to(&page.window))));

    {
        let win = page.window.clone();
        let canvas = canvas.clone();
        let rain = rain.clone();
        page.listen(EventListener::new(&page.window, "resize", move |_e: &Event| {
            let width = canvas.fit_to(&win);
            rain.borrow_mut().resize(width);
        }));
    }

    page.every(Interval::new(page.config.effects.matrix_interval_ms, move || {
        canvas.paint(&mut rain.borrow_mut());
    }));
    Ok(())
}

fn create_particle(page: &Page, container: &Element) -> Result<(), JsValue> {
    let style = ParticleStyle::random(&mut random);
    let particle = create_div(&page.document, "particle")?;
    set_style(&particle, "left", &style.left());
    set_style(&particle, "animation-duration", &style.duration());
    set_style(&particle, "animation-delay", &style.delay());
    container.append_child(&particle)?;
    Timeout::new(PARTICLE_LIFETIME_MS, move || {
        if particle.parent_node().is_some() {
            particle.remove();
        }
    })
    .forget();
    Ok(())
}

/// Ambient particles spawned into `#tech-particles` at a fixed rate.
pub fn setup_particle_system(page: &Page) {
    if !page.config.effects.particles {
        return;
    }
    let Some(container) = by_id(&page.document, "tech-particles") else {
        return;
    };
    let pg = page.clone();
    page.every(Interval::new(page.config.effects.particle_interval_ms, move || {
        let _ = create_particle(&pg, &container);
    }));
}

fn create_trail_particle(page: &Page, x: f64, y: f64) -> Result<(), JsValue> {
    let particle = create_div(&page.document, "trail-particle")?;
    set_style(&particle, "left", &px(x));
    set_style(&particle, "top", &px(y));
    page.document
        .body()
        .ok_or("no body")?
        .append_child(&particle)?;
    Timeout::new(TRAIL_LIFETIME_MS as u32, move || particle.remove()).forget();
    Ok(())
}

/// Occasional sparkles following the pointer while it is over the hero.
pub fn setup_mouse_trail(page: &Page) {
    if !page.config.effects.mouse_trail {
        return;
    }
    let mut trail = MouseTrail::new(page.config.effects.trail_probability);
    let pg = page.clone();
    page.listen(EventListener::new(&page.document, "mousemove", move |e: &Event| {
        let Some(me) = e.dyn_ref::<MouseEvent>() else {
            return;
        };
        let over_hero = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(".hero").ok().flatten())
            .is_some();
        if !over_hero {
            return;
        }
        let (x, y) = (me.client_x() as f64, me.client_y() as f64);
        let spawn = trail.record(x, y, now_ms(), &mut random);
        if spawn {
            let _ = create_trail_particle(&pg, x, y);
        }
    }));
}
