pub const COUNT_DURATION_MS: f64 = 2000.0;
/// Nominal frame length the per-frame increment is computed for.
pub const FRAME_MS: f64 = 16.0;

/// Leading-integer parse: optional whitespace and sign, then the longest run
/// of ASCII digits. `"42+"` is 42, `"x42"` is `None`. Runs too long for an
/// `i64` saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let signed = if neg {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    Some(signed.parse().unwrap_or(if neg { i64::MIN } else { i64::MAX }))
}

/// Count-up from zero to `target`, one step per animation frame.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        CountUp {
            target,
            increment: target as f64 / (COUNT_DURATION_MS / FRAME_MS),
            current: 0.0,
            done: false,
        }
    }

    /// Advance one frame. Returns the text to display and whether another
    /// frame should be requested.
    pub fn step(&mut self) -> (String, bool) {
        if !self.done && self.current < self.target as f64 {
            self.current += self.increment;
            if self.current < self.target as f64 {
                return (format!("{}", self.current.ceil() as i64), true);
            }
        }
        self.done = true;
        (self.target.to_string(), false)
    }
}
