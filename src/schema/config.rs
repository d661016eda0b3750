//! Configuration types for Game of Life simulations.

use serde::{Deserialize, Serialize};

use crate::engine::Team;

use super::PatternKey;

/// Default alive probability for random seeding.
fn default_density() -> f64 {
    0.3
}

/// Top-level simulation configuration.
///
/// Grid dimensions and team mode are fixed for the lifetime of a
/// [`Simulation`](crate::engine::Simulation); a live grid is never resized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Enable the two-team conquest variant.
    #[serde(default)]
    pub team_mode: bool,
    /// Alive probability per cell for random seeding (0.0-1.0).
    #[serde(default = "default_density")]
    pub density: f64,
    /// Seed for the simulation RNG. Entropy-seeded when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Prefabs stamped onto the grid at startup instead of a random fill.
    #[serde(default)]
    pub stamps: Vec<StampConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 100,
            team_mode: false,
            density: default_density(),
            rng_seed: None,
            stamps: Vec::new(),
        }
    }
}

/// A single prefab placement applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StampConfig {
    /// Anchor row of the stamp's top-left corner.
    pub row: usize,
    /// Anchor column of the stamp's top-left corner.
    pub col: usize,
    /// Pattern name, e.g. "glider" or "queen-bee-shuttle".
    pub pattern: String,
    /// Team tag applied to the stamped cells (team mode only).
    #[serde(default)]
    pub team: Option<Team>,
}

impl SimulationConfig {
    /// Get total grid size (rows * cols).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity {
                density: self.density,
            });
        }
        for (i, stamp) in self.stamps.iter().enumerate() {
            if PatternKey::from_name(&stamp.pattern).is_none() {
                return Err(ConfigError::UnknownStampPattern {
                    stamp: i,
                    name: stamp.pattern.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Seeding density must be within [0, 1], got {density}")]
    InvalidDensity { density: f64 },
    #[error("Stamp {stamp} references unknown pattern {name:?}")]
    UnknownStampPattern { stamp: usize, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows, 30);
        assert_eq!(config.cols, 100);
        assert!(!config.team_mode);
    }

    #[test]
    fn test_density_out_of_range() {
        let config = SimulationConfig {
            density: 1.5,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDensity { .. })
        ));
    }

    #[test]
    fn test_unknown_stamp_pattern() {
        let config = SimulationConfig {
            stamps: vec![StampConfig {
                row: 0,
                col: 0,
                pattern: "heptomino".into(),
                team: None,
            }],
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownStampPattern { stamp: 0, .. })
        ));
    }

    #[test]
    fn test_serde_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"rows": 11, "cols": 22}"#).unwrap();
        assert_eq!(config.rows, 11);
        assert_eq!(config.cols, 22);
        assert_eq!(config.density, 0.3);
        assert!(config.rng_seed.is_none());
        assert!(config.stamps.is_empty());
    }
}
