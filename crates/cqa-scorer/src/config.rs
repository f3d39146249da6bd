//! Scorer configuration.

use crate::error::{ScorerError, ScorerResult};

/// Thresholds applied to the similarity drop of each adjacent pair.
///
/// `drop = avg_similarity - pair_similarity`. A pair is reported when
/// `drop >= issue_drop_threshold` and described as severe when
/// `drop > severe_drop_threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerConfig {
    /// Minimum drop for a pair to be reported
    pub issue_drop_threshold: f64,
    /// Drop above which a pair is described as severe
    pub severe_drop_threshold: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            issue_drop_threshold: 0.1,
            severe_drop_threshold: 0.3,
        }
    }
}

impl ScorerConfig {
    /// Create config with explicit thresholds.
    pub fn new(issue_drop_threshold: f64, severe_drop_threshold: f64) -> ScorerResult<Self> {
        let config = Self {
            issue_drop_threshold,
            severe_drop_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both thresholds are finite numbers.
    pub fn validate(&self) -> ScorerResult<()> {
        if !self.issue_drop_threshold.is_finite() {
            return Err(ScorerError::invalid_config(format!(
                "issue_drop_threshold must be finite, got {}",
                self.issue_drop_threshold
            )));
        }
        if !self.severe_drop_threshold.is_finite() {
            return Err(ScorerError::invalid_config(format!(
                "severe_drop_threshold must be finite, got {}",
                self.severe_drop_threshold
            )));
        }
        Ok(())
    }
}
