use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default clustering distance threshold for relation properties
pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 0.8;

/// Default number of decimals kept when summing matched similarities
pub const DEFAULT_SCORE_PRECISION: u32 = 3;

/// Tunables for a mapping run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Distance threshold handed to the provider when clustering properties
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f32,

    /// Decimals kept when rounding a direction's matched similarity sum
    #[serde(default = "default_score_precision")]
    pub score_precision: u32,
}

fn default_distance_threshold() -> f32 {
    DEFAULT_DISTANCE_THRESHOLD
}

fn default_score_precision() -> u32 {
    DEFAULT_SCORE_PRECISION
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            score_precision: DEFAULT_SCORE_PRECISION,
        }
    }
}

impl MappingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.distance_threshold.is_finite() || self.distance_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "distance_threshold must be a positive number, got {}",
                self.distance_threshold
            )));
        }
        if self.score_precision > 9 {
            return Err(Error::InvalidConfig(format!(
                "score_precision must be at most 9, got {}",
                self.score_precision
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_distance_threshold(mut self, threshold: f32) -> Self {
        self.distance_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_score_precision(mut self, precision: u32) -> Self {
        self.score_precision = precision;
        self
    }

    /// Round `value` to the configured number of decimals
    pub fn round_score(&self, value: f32) -> f32 {
        let factor = 10f64.powi(self.score_precision as i32);
        ((value as f64 * factor).round() / factor) as f32
    }
}
