use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_RECIPIENT: &str = "murungadaniel2002@gmail.com";
pub const DEFAULT_FALLBACK_FACT: &str = "Technology enthusiast and lifelong learner!";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("typing phrases must not be empty")]
    EmptyPhrases,
    #[error("scroll threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
    #[error("contact recipient is not an email address: {0:?}")]
    InvalidRecipient(String),
}

/// Everything the page behaviour can be tuned with. Every field has a
/// default, so the host page only needs to provide what it overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
    pub effects: EffectsConfig,
    pub facts: FactsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            phrases: [
                "Mathematics & Economics Graduate",
                "Data Analyst & Researcher",
                "STEM Curriculum Developer",
                "Python & R Programming Expert",
                "Educational Technology Enthusiast",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

/// Scroll positions are CSS pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub navbar_threshold: f64,
    pub back_to_top_threshold: f64,
    pub section_offset: f64,
    pub parallax_rate: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            navbar_threshold: 50.0,
            back_to_top_threshold: 300.0,
            section_offset: 100.0,
            parallax_rate: -0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub matrix: bool,
    pub particles: bool,
    pub mouse_trail: bool,
    pub matrix_interval_ms: u32,
    pub particle_interval_ms: u32,
    pub trail_probability: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            matrix: true,
            particles: true,
            mouse_trail: true,
            matrix_interval_ms: 35,
            particle_interval_ms: 300,
            trail_probability: 0.1,
        }
    }
}

impl EffectsConfig {
    /// Turn off every purely decorative animation.
    pub fn disable_motion(&mut self) {
        self.matrix = false;
        self.particles = false;
        self.mouse_trail = false;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    pub skills: BTreeMap<String, String>,
    pub fallback: String,
}

impl Default for FactsConfig {
    fn default() -> Self {
        let skills = [
            (
                "Python Programming",
                "Python: My go-to language for data analysis, machine learning, and automation!",
            ),
            (
                "Database Management",
                "Databases: Experienced with SQL, data modeling, and database optimization.",
            ),
            (
                "Data Analysis",
                "Analytics: Transforming raw data into actionable insights and visualizations.",
            ),
            (
                "R Programming",
                "R: Statistical computing powerhouse for advanced data analysis and research.",
            ),
            (
                "Machine Learning",
                "AI/ML: Passionate about building intelligent systems and predictive models.",
            ),
            (
                "Software Development",
                "Development: Creating robust, scalable solutions with clean, efficient code.",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        FactsConfig {
            skills,
            fallback: DEFAULT_FALLBACK_FACT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a (possibly partial) JSON config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.phrases.iter().all(|p| p.is_empty()) {
            return Err(ConfigError::EmptyPhrases);
        }
        let s = &self.scroll;
        for v in [s.navbar_threshold, s.back_to_top_threshold, s.section_offset] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::InvalidThreshold(v));
            }
        }
        let r = self.contact.recipient.trim();
        match r.split_once('@') {
            Some((user, host)) if !user.is_empty() && !host.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidRecipient(r.to_string())),
        }
    }

    /// Fact shown when a cage face labelled `skill` is clicked.
    pub fn fact_for(&self, skill: &str) -> &str {
        self.facts
            .skills
            .get(skill)
            .map(String::as_str)
            .unwrap_or(&self.facts.fallback)
    }
}
