//! Parser configuration: confidence weights, practice-area scoring, limits.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_MATTER_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MAX_CLIENT_SUGGESTIONS: usize = 5;
pub const DEFAULT_MAX_TASK_SUGGESTIONS: usize = 10;

/// Weights applied to per-field confidences when computing the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfidenceWeights {
    pub time: f64,
    pub client: f64,
    pub matter: f64,
    pub practice_area: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            time: 0.35,
            client: 0.35,
            matter: 0.20,
            practice_area: 0.10,
        }
    }
}

impl ConfidenceWeights {
    pub fn sum(&self) -> f64 {
        self.time + self.client + self.matter + self.practice_area
    }
}

/// Keyword scoring for the practice-area classifier:
/// `min(base + keyword_len * per_char, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PracticeAreaScoring {
    pub base: f64,
    pub per_char: f64,
    pub cap: f64,
}

impl Default for PracticeAreaScoring {
    fn default() -> Self {
        Self {
            base: 0.7,
            per_char: 0.01,
            cap: 0.95,
        }
    }
}

impl PracticeAreaScoring {
    pub fn score(&self, keyword: &str) -> f64 {
        (self.base + keyword.chars().count() as f64 * self.per_char).min(self.cap)
    }
}

/// Top-level parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    pub weights: ConfidenceWeights,
    pub practice_area: PracticeAreaScoring,
    /// Matter confidence at or above which the matter phrase replaces the
    /// stripped description.
    pub matter_description_threshold: f64,
    pub max_client_suggestions: usize,
    pub max_task_suggestions: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            weights: ConfidenceWeights::default(),
            practice_area: PracticeAreaScoring::default(),
            matter_description_threshold: DEFAULT_MATTER_THRESHOLD,
            max_client_suggestions: DEFAULT_MAX_CLIENT_SUGGESTIONS,
            max_task_suggestions: DEFAULT_MAX_TASK_SUGGESTIONS,
        }
    }
}

impl ParserConfig {
    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: ParserConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        info!("Loaded parser config from {}", path.display());
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(t) = env_parse::<f64>("BILLABLE_MATTER_THRESHOLD")? {
            config.matter_description_threshold = t;
        }
        if let Some(n) = env_parse::<usize>("BILLABLE_MAX_CLIENT_SUGGESTIONS")? {
            config.max_client_suggestions = n;
        }
        if let Some(n) = env_parse::<usize>("BILLABLE_MAX_TASK_SUGGESTIONS")? {
            config.max_task_suggestions = n;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if [w.time, w.client, w.matter, w.practice_area]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            warn!("Rejected config: negative or non-finite weight");
            return Err(Error::Config("weights must be finite and non-negative".into()));
        }
        if (w.sum() - 1.0).abs() > 1e-6 {
            warn!("Rejected config: weights sum to {}", w.sum());
            return Err(Error::Config(format!(
                "weights must sum to 1.0, got {:.4}",
                w.sum()
            )));
        }

        let pa = &self.practice_area;
        if !(0.0..=1.0).contains(&pa.cap) || !(0.0..=1.0).contains(&pa.base) {
            return Err(Error::Config(
                "practice area base and cap must be within [0, 1]".into(),
            ));
        }
        if pa.per_char < 0.0 {
            return Err(Error::Config("practice area per_char must be non-negative".into()));
        }

        if !(0.0..=1.0).contains(&self.matter_description_threshold) {
            return Err(Error::Config(
                "matter description threshold must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, raw))),
        Err(_) => Ok(None),
    }
}
