//! Data-driven session tuning
//!
//! Physical constants (radii, speeds, rates) live in `consts`. This covers the
//! session knobs a host may want to change without a rebuild, loaded from JSON.
//! Missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at session start
    pub starting_lives: u32,
    /// Wall-clock gap between timed asteroid spawns
    pub asteroid_spawn_interval_ms: f64,
    /// Wall-clock delay between ship destruction and respawn
    pub respawn_delay_ms: f64,
    /// Sparks when a bullet breaks an asteroid
    pub hit_explosion_particles: usize,
    /// Sparks when the ship is destroyed
    pub ship_explosion_particles: usize,
    /// Fixed RNG seed; hosts pick one when absent
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            asteroid_spawn_interval_ms: 3000.0,
            respawn_delay_ms: 2000.0,
            hit_explosion_particles: 10,
            ship_explosion_particles: 20,
            seed: None,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        if !(self.asteroid_spawn_interval_ms > 0.0) {
            return Err(TuningError::Invalid {
                field: "asteroid_spawn_interval_ms",
                reason: "must be positive",
            });
        }
        if !(self.respawn_delay_ms >= 0.0) {
            return Err(TuningError::Invalid {
                field: "respawn_delay_ms",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
