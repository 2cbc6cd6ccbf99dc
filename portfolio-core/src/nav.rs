/// Layout snapshot of one `<section>` used for active-link highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the reader is currently in. Later sections win when
/// ranges overlap, so a matching section without an id clears the match.
pub fn active_section(sections: &[SectionBox], scroll_y: f64, offset: f64) -> Option<&str> {
    let mut current = None;
    for s in sections {
        let top = s.top - offset;
        if scroll_y >= top && scroll_y < top + s.height {
            current = s.id.as_deref().filter(|id| !id.is_empty());
        }
    }
    current
}

/// Whether a nav link's `href` points at the section `id`.
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Element id referenced by an in-page anchor (`#about` -> `about`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
