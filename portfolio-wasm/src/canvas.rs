use portfolio_core::matrix::{self, FADE_STYLE, GLYPH_STYLE, MatrixRain};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::dom::{random, viewport_size};

/// The `#matrix-canvas` backdrop and its 2D context.
#[derive(Clone)]
pub struct MatrixCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl MatrixCanvas {
    /// `Ok(None)` when the page has no `#matrix-canvas`.
    pub fn find(document: &Document) -> Result<Option<Self>, JsValue> {
        let Some(el) = document.get_element_by_id("matrix-canvas") else {
            return Ok(None);
        };
        let canvas = el.dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Some(MatrixCanvas { canvas, ctx }))
    }

    pub fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    /// Match the backing store to the window; returns the new width.
    pub fn fit_to(&self, window: &Window) -> f64 {
        let (w, h) = viewport_size(window);
        self.canvas.set_width(w.max(0.0) as u32);
        self.canvas.set_height(h.max(0.0) as u32);
        self.width()
    }

    /// Fade the previous frame, then draw one glyph per column.
    pub fn paint(&self, rain: &mut MatrixRain) {
        let h = self.canvas.height() as f64;
        self.fill_style(FADE_STYLE);
        self.ctx.fill_rect(0.0, 0.0, self.width(), h);
        self.fill_style(GLYPH_STYLE);
        self.ctx.set_font(&matrix::font());
        let mut buf = [0u8; 4];
        for g in rain.step(h, &mut random) {
            let _ = self.ctx.fill_text(g.ch.encode_utf8(&mut buf), g.x, g.y);
        }
    }

    // fillStyle is assigned as a property; the string setter is deprecated.
    fn fill_style(&self, css: &str) {
        let _ = js_sys::Reflect::set(
            self.ctx.as_ref(),
            &JsValue::from_str("fillStyle"),
            &JsValue::from_str(css),
        );
    }
}
