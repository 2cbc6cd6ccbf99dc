pub const GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%+-/~{[|`]}";
pub const FONT_SIZE: f64 = 10.0;
pub const FADE_STYLE: &str = "rgba(0, 0, 0, 0.04)";
pub const GLYPH_STYLE: &str = "#0F3";
/// A drop that has left the canvas restarts when the roll exceeds this.
pub const RESET_ROLL: f64 = 0.975;

/// One glyph to paint this frame, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// Per-column drop positions for the falling-glyph backdrop.
#[derive(Clone, Debug)]
pub struct MatrixRain {
    glyphs: Vec<char>,
    drops: Vec<u32>,
}

impl MatrixRain {
    pub fn new(width: f64) -> Self {
        let mut rain = MatrixRain {
            glyphs: GLYPHS.chars().collect(),
            drops: Vec::new(),
        };
        rain.resize(width);
        rain
    }

    /// Rebuild the columns for a new canvas width; every drop restarts at the
    /// first row.
    pub fn resize(&mut self, width: f64) {
        let columns = (width.max(0.0) / FONT_SIZE).ceil() as usize;
        self.drops = vec![1; columns];
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Advance every column one row and return what to draw.
    pub fn step(&mut self, height: f64, rng: &mut impl FnMut() -> f64) -> Vec<Glyph> {
        let mut out = Vec::with_capacity(self.drops.len());
        for (i, drop) in self.drops.iter_mut().enumerate() {
            let pick = ((rng() * self.glyphs.len() as f64) as usize).min(self.glyphs.len() - 1);
            out.push(Glyph {
                ch: self.glyphs[pick],
                x: i as f64 * FONT_SIZE,
                y: *drop as f64 * FONT_SIZE,
            });
            if *drop as f64 * FONT_SIZE > height && rng() > RESET_ROLL {
                *drop = 0;
            }
            *drop += 1;
        }
        out
    }
}

pub fn font() -> String {
    format!("{}px monospace", FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_column_per_glyph_width() {
        assert_eq!(MatrixRain::new(100.0).columns(), 10);
        assert_eq!(MatrixRain::new(105.0).columns(), 11);
        assert_eq!(MatrixRain::new(0.0).columns(), 0);
        assert_eq!(font(), "10px monospace");
    }

    #[test]
    fn drops_fall_one_row_per_step() {
        let mut rain = MatrixRain::new(30.0);
        let mut rng = || 0.0;
        let g = rain.step(1000.0, &mut rng);
        assert_eq!(g.len(), 3);
        assert_eq!(g[1], Glyph { ch: 'A', x: 10.0, y: 10.0 });
        assert_eq!(rain.drops(), &[2, 2, 2]);
    }

    #[test]
    fn off_canvas_drop_resets_only_on_high_roll() {
        let mut rain = MatrixRain::new(10.0);
        let mut low = || 0.5;
        for _ in 0..5 {
            rain.step(20.0, &mut low);
        }
        assert_eq!(rain.drops(), &[6]);
        let mut high = || 0.99;
        rain.step(20.0, &mut high);
        assert_eq!(rain.drops(), &[1]);
    }

    #[test]
    fn resize_rebuilds_columns() {
        let mut rain = MatrixRain::new(20.0);
        rain.step(100.0, &mut || 0.3);
        rain.resize(40.0);
        assert_eq!(rain.drops(), &[1, 1, 1, 1]);
    }

    #[test]
    fn top_roll_never_indexes_past_the_alphabet() {
        let mut rain = MatrixRain::new(10.0);
        let g = rain.step(100.0, &mut || 0.999_999_999);
        assert_eq!(g[0].ch, '}');
    }
}
