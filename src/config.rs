//! Configuration for worker generation.
//!
//! The constants that shape a run: the attribute distribution, the candidate
//! pool size, the output size and the skill level tiers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attributes::MAX_ATTRIBUTE;
use crate::error::GenerateError;

/// A classification of workers by total score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    /// Tier label (e.g. "mid-lo").
    pub name: String,
    /// Fraction of the final output allocated to this tier, in [0, 1].
    pub percent: f64,
    /// Inclusive upper bound on the score qualifying for this tier.
    pub score: u32,
}

impl SkillLevel {
    pub fn new(name: impl Into<String>, percent: f64, score: u32) -> Self {
        Self {
            name: name.into(),
            percent,
            score,
        }
    }

    /// Number of workers this tier contributes out of `amount`.
    pub fn limit(&self, amount: usize) -> usize {
        (self.percent * amount as f64).floor() as usize
    }

    /// Whether a worker with this score is eligible for the tier.
    pub fn admits(&self, score: u32) -> bool {
        score <= self.score
    }

    /// The four standard tiers.
    pub fn defaults() -> Vec<SkillLevel> {
        vec![
            SkillLevel::new("lo", 0.25, 5),
            SkillLevel::new("mid-lo", 0.35, 15),
            SkillLevel::new("mid-hi", 0.30, 30),
            SkillLevel::new("hi", 0.10, 60),
        ]
    }
}

/// How tiers treat workers already picked by an earlier tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierOverlap {
    /// A worker is selected by at most one tier.
    #[default]
    Exclusive,
    /// Tiers sample independently; a worker may be selected more than once.
    Overlapping,
}

/// Configuration parameters for a generation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Mean of the attribute distribution.
    pub mu: f64,

    /// Standard deviation of the attribute distribution.
    pub sigma: f64,

    /// Size of the candidate pool.
    pub iters: usize,

    /// Target size of the output population.
    pub amount: usize,

    /// Tiers, sampled in this order.
    pub skill_levels: Vec<SkillLevel>,

    /// Cross-tier duplicate policy.
    pub overlap: TierOverlap,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mu: 5.0,
            sigma: 5.0,
            iters: 10_000,
            amount: 40,
            skill_levels: SkillLevel::defaults(),
            overlap: TierOverlap::Exclusive,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let text = fs::read_to_string(path).map_err(|e| GenerateError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: GeneratorConfig =
            serde_json::from_str(&text).map_err(|e| GenerateError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the constants describe a runnable generation.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !self.mu.is_finite() {
            return Err(GenerateError::InvalidConfig(format!("mu must be finite, got {}", self.mu)));
        }
        if self.mu > f64::from(MAX_ATTRIBUTE) {
            return Err(GenerateError::InvalidConfig(format!(
                "mu must be at most {}, got {}",
                MAX_ATTRIBUTE, self.mu
            )));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(GenerateError::InvalidConfig(format!(
                "sigma must be finite and non-negative, got {}",
                self.sigma
            )));
        }
        if self.iters == 0 {
            return Err(GenerateError::InvalidConfig("iters must be at least 1".to_string()));
        }

        let mut total = 0.0;
        for level in &self.skill_levels {
            if !(0.0..=1.0).contains(&level.percent) {
                return Err(GenerateError::InvalidConfig(format!(
                    "skill level '{}' percent {} is outside [0, 1]",
                    level.name, level.percent
                )));
            }
            total += level.percent;
        }
        if total > 1.0 + 1e-9 {
            return Err(GenerateError::InvalidConfig(format!(
                "skill level percents sum to {:.3}, more than 1",
                total
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.mu, 5.0);
        assert_eq!(config.sigma, 5.0);
        assert_eq!(config.iters, 10_000);
        assert_eq!(config.amount, 40);
        assert_eq!(config.skill_levels.len(), 4);
        assert_eq!(config.overlap, TierOverlap::Exclusive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_limits() {
        let limits: Vec<usize> = SkillLevel::defaults().iter().map(|l| l.limit(40)).collect();
        assert_eq!(limits, vec![10, 14, 12, 4]);
    }

    #[test]
    fn test_limit_floors() {
        let level = SkillLevel::new("lo", 0.25, 5);
        assert_eq!(level.limit(10), 2);
        assert_eq!(level.limit(3), 0);
    }

    #[test]
    fn test_admits_is_inclusive() {
        let level = SkillLevel::new("mid-lo", 0.35, 15);
        assert!(level.admits(15));
        assert!(!level.admits(16));
    }

    #[test]
    fn test_rejects_negative_sigma() {
        let config = GeneratorConfig { sigma: -1.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(GenerateError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_huge_mu() {
        let config = GeneratorConfig { mu: 1e9, sigma: 0.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(GenerateError::InvalidConfig(_))));

        let config = GeneratorConfig { mu: f64::from(MAX_ATTRIBUTE), ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_percent_overflow() {
        let config = GeneratorConfig {
            skill_levels: vec![SkillLevel::new("a", 0.6, 10), SkillLevel::new("b", 0.6, 20)],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            skill_levels: vec![SkillLevel::new("a", 1.5, 10)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_pool() {
        let config = GeneratorConfig { iters: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "amount": 10, "overlap": "overlapping" }"#).unwrap();
        assert_eq!(config.amount, 10);
        assert_eq!(config.iters, 10_000);
        assert_eq!(config.overlap, TierOverlap::Overlapping);
        assert_eq!(config.skill_levels, SkillLevel::defaults());
    }
}
