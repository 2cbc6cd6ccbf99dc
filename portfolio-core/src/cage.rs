/// Degrees of rotation per pixel of pointer travel.
pub const DRAG_SENSITIVITY: f64 = 0.5;
/// Delay before the idle animation takes over again after a drag (ms).
pub const RESUME_DELAY_MS: u32 = 2000;
/// Delay before resuming the idle animation when the tab becomes visible (ms).
pub const VISIBLE_RESUME_DELAY_MS: u32 = 1000;
pub const RIPPLE_MS: u32 = 600;
pub const FACE_PRESS_MS: u32 = 150;
pub const FACE_PRESS_SCALE: &str = " scale(0.95)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub fn transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.x, self.y)
    }
}

/// Pointer-drag tracker for the hero cage. Mouse and touch share one tracker,
/// so a second pointer cannot start a parallel drag.
#[derive(Clone, Debug, Default)]
pub struct CageDrag {
    dragging: bool,
    interacting: bool,
    last: (f64, f64),
    rotation: Rotation,
}

impl CageDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.interacting = true;
        self.last = (x, y);
    }

    /// Fold the pointer delta since the last event into the rotation.
    /// Returns `None` when no drag is in progress.
    pub fn drag(&mut self, x: f64, y: f64) -> Option<Rotation> {
        if !self.dragging {
            return None;
        }
        let dx = x - self.last.0;
        let dy = y - self.last.1;
        self.rotation.y += dx * DRAG_SENSITIVITY;
        self.rotation.x -= dy * DRAG_SENSITIVITY;
        self.last = (x, y);
        Some(self.rotation)
    }

    /// Ends the drag. Returns whether one was in progress, i.e. whether a
    /// delayed resume should be scheduled.
    pub fn release(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        self.interacting = false;
        true
    }

    pub fn should_resume(&self) -> bool {
        !self.interacting
    }

    /// The idle animation is back in charge; the inline transform is cleared,
    /// so the next drag starts from the neutral pose.
    pub fn resume(&mut self) {
        self.rotation = Rotation::default();
    }
}

/// Placement of a click ripple inside the clicked element, in px relative to
/// the element's box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple_geometry(
    rect: (f64, f64, f64, f64), // left, top, width, height
    click: (f64, f64),
) -> Ripple {
    let (left, top, w, h) = rect;
    let size = w.max(h);
    Ripple {
        size,
        left: click.0 - left - size / 2.0,
        top: click.1 - top - size / 2.0,
    }
}

impl Ripple {
    pub fn css(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(240, 147, 251, 0.6); \
             transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; \
             width: {s}px; height: {s}px; left: {l}px; top: {t}px; z-index: 1000;",
            s = self.size,
            l = self.left,
            t = self.top
        )
    }
}

/// Strip the transient press scale added on face click.
pub fn without_press_scale(transform: &str) -> String {
    transform.replacen(FACE_PRESS_SCALE, "", 1)
}
