//! Style constants and observer settings for viewport-triggered animations.

/// IntersectionObserver settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const COUNTER_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: "0px 0px -100px 0px",
};

pub const PROGRESS_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: "0px 0px -50px 0px",
};

pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const PROGRESS_SELECTOR: &str = ".progress-fill";
pub const REVEAL_SELECTOR: &str = ".skill-card, .education-card, .cert-card, .timeline-item, \
                                   .contact-item, .award-item, .highlight-item";
pub const HOVER_CARD_SELECTOR: &str = ".skill-card, .education-card, .cert-card";

/// Delay between a progress bar entering view and its fill starting (ms).
pub const PROGRESS_DELAY_MS: u32 = 200;

/// `(opacity, transform)` before and after an element is revealed.
pub const HIDDEN: (&str, &str) = ("0", "translateY(30px)");
pub const SHOWN: (&str, &str) = ("1", "translateY(0)");
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const CARD_HOVER: &str = "translateY(-10px) scale(1.02)";
pub const CARD_REST: &str = "translateY(0) scale(1)";

/// Width to apply to a progress bar: any non-empty `data-width`, as given.
/// Invalid CSS is left for the browser to ignore.
pub fn progress_width(attr: &str) -> Option<&str> {
    Some(attr.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn passes_any_css_length_through() {
        assert_eq!(progress_width("85%"), Some("85%"));
        assert_eq!(progress_width(" 120px "), Some("120px"));
        assert_eq!(progress_width("3rem"), Some("3rem"));
        assert_eq!(progress_width("50vw"), Some("50vw"));
        assert_eq!(progress_width("calc(100% - 10px)"), Some("calc(100% - 10px)"));
    }

    #[test]
    fn blank_width_is_skipped() {
        assert_eq!(progress_width(""), None);
        assert_eq!(progress_width("   "), None);
    }
}
