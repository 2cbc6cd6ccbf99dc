use crate::config::ScrollConfig;

/// Visual state derived from the current scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEffects {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    /// Hero `translateY` in px; `None` once the hero is scrolled out of view.
    pub parallax: Option<f64>,
}

impl ScrollEffects {
    pub fn at(scroll_y: f64, viewport_h: f64, cfg: &ScrollConfig) -> Self {
        ScrollEffects {
            navbar_scrolled: scroll_y > cfg.navbar_threshold,
            back_to_top_visible: scroll_y > cfg.back_to_top_threshold,
            parallax: (scroll_y < viewport_h).then(|| scroll_y * cfg.parallax_rate),
        }
    }
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}
