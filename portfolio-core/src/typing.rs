use crate::config::TypingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Text to show and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Types each phrase one character at a time, holds it, deletes it, then moves
/// on to the next phrase, forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    phase: Phase,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
}

impl Typewriter {
    pub fn new(cfg: &TypingConfig) -> Self {
        let phrases: Vec<Vec<char>> = cfg
            .phrases
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect())
            .collect();
        Typewriter {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            type_ms: cfg.type_ms,
            delete_ms: cfg.delete_ms,
            hold_ms: cfg.hold_ms,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn tick(&mut self) -> TypingFrame {
        let Some(current) = self.phrases.get(self.phrase) else {
            return TypingFrame {
                text: String::new(),
                delay_ms: self.hold_ms,
            };
        };
        let len = current.len();
        let delay_ms = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Deleting;
                    self.hold_ms
                } else {
                    self.type_ms
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                self.delete_ms
            }
        };
        let text: String = current[..self.shown].iter().collect();
        if self.phase == Phase::Deleting && self.shown == 0 {
            self.phase = Phase::Typing;
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }
        TypingFrame { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cfg(phrases: &[&str]) -> TypingConfig {
        TypingConfig {
            phrases: phrases.iter().map(|s| s.to_string()).collect(),
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut tw = Typewriter::new(&cfg(&["ab", "c"]));
        let frames: Vec<(String, u32)> = (0..7)
            .map(|_| {
                let f = tw.tick();
                (f.text, f.delay_ms)
            })
            .collect();
        let expected: Vec<(String, u32)> = [
            ("a", 100),
            ("ab", 2000),
            ("a", 50),
            ("", 50),
            ("c", 2000),
            ("", 50),
            ("a", 100),
        ]
        .iter()
        .map(|(t, d)| (t.to_string(), *d))
        .collect();
        assert_eq!(frames, expected);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = Typewriter::new(&cfg(&["día"]));
        assert_eq!(tw.tick().text, "d");
        assert_eq!(tw.tick().text, "dí");
        assert_eq!(tw.tick().text, "día");
    }

    #[test]
    fn skips_blank_phrases() {
        let mut tw = Typewriter::new(&cfg(&["", "x"]));
        assert!(!tw.is_empty());
        assert_eq!(tw.tick().text, "x");
        assert!(Typewriter::new(&cfg(&[""])).is_empty());
    }
}
