/// Lifetime of an ambient particle node (ms).
pub const PARTICLE_LIFETIME_MS: u32 = 5000;
/// Lifetime of a mouse-trail particle node, and how long trail points are kept (ms).
pub const TRAIL_LIFETIME_MS: f64 = 1000.0;

/// Randomised inline style for one ambient particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleStyle {
    pub fn random(rng: &mut impl FnMut() -> f64) -> Self {
        ParticleStyle {
            left_pct: rng() * 100.0,
            duration_s: rng() * 3.0 + 2.0,
            delay_s: rng() * 2.0,
        }
    }

    pub fn left(&self) -> String {
        format!("{}%", self.left_pct)
    }

    pub fn duration(&self) -> String {
        format!("{}s", self.duration_s)
    }

    pub fn delay(&self) -> String {
        format!("{}s", self.delay_s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub at_ms: f64,
}

/// Recent pointer positions over the hero.
#[derive(Clone, Debug, Default)]
pub struct MouseTrail {
    points: Vec<TrailPoint>,
    spawn_probability: f64,
}

impl MouseTrail {
    pub fn new(spawn_probability: f64) -> Self {
        MouseTrail {
            points: Vec::new(),
            spawn_probability,
        }
    }

    /// Record a pointer sample and expire stale ones. Returns whether a trail
    /// particle should be spawned at this position.
    pub fn record(&mut self, x: f64, y: f64, now_ms: f64, rng: &mut impl FnMut() -> f64) -> bool {
        self.points.push(TrailPoint { x, y, at_ms: now_ms });
        self.points.retain(|p| now_ms - p.at_ms < TRAIL_LIFETIME_MS);
        rng() < self.spawn_probability
    }
}

pub fn px(v: f64) -> String {
    format!("{}px", v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn particle_style_ranges() {
        let mut seq = [0.5, 0.0, 1.0].into_iter();
        let s = ParticleStyle::random(&mut || seq.next().unwrap());
        assert_eq!(s.left(), "50%");
        assert_eq!(s.duration(), "2s");
        assert_eq!(s.delay(), "2s");
    }

    #[test]
    fn trail_expires_old_points() {
        let mut t = MouseTrail::new(0.1);
        let mut never = || 0.5;
        assert!(!t.record(1.0, 1.0, 0.0, &mut never));
        t.record(2.0, 2.0, 500.0, &mut never);
        t.record(3.0, 3.0, 1000.0, &mut never);
        assert_eq!(t.points.len(), 2);
        assert_eq!(t.points[0].x, 2.0);
    }

    #[test]
    fn trail_spawns_on_low_roll() {
        let mut t = MouseTrail::new(0.1);
        assert!(t.record(0.0, 0.0, 0.0, &mut || 0.05));
        assert_eq!(px(12.5), "12.5px");
    }
}
