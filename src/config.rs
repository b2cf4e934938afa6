//! Tunable parameters for the pressure estimator
//!
//! The host persists these settings and exposes them as editable widgets;
//! the estimator reads them fresh on every tick. Validation happens at the
//! configuration boundary, never mid-tick.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of displacement samples averaged per tick
pub const DEFAULT_SAMPLE_COUNT: usize = 30;

/// Default attenuation divisor applied to the averaged speed
pub const DEFAULT_ATTENUATION: f64 = 250.0;

/// Default amount subtracted from the normalized speed
pub const DEFAULT_SUBTRACT: f64 = 0.0;

/// Default upper clamp on the emitted strength
pub const DEFAULT_MAX_OUTPUT: f64 = 1.0;

/// Default lower clamp on the emitted strength
pub const DEFAULT_MIN_OUTPUT: f64 = 0.1;

/// Default falloff exponent shaping the response curve
pub const DEFAULT_FALLOFF: f64 = 0.5;

/// Legal range for the falloff exponent, matching the UI widget bounds
pub const FALLOFF_RANGE: (f64, f64) = (0.01, 5.0);

/// Errors from validating a [`PressureConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("sample count must be at least 1 (got {0})")]
    InvalidSampleCount(usize),

    #[error("minimum output {min} exceeds maximum output {max}")]
    InvertedOutputRange { min: f64, max: f64 },

    #[error("attenuation must be non-zero")]
    ZeroAttenuation,

    #[error("falloff exponent {0} outside supported range [0.01, 5]")]
    FalloffOutOfRange(f64),
}

/// Parameters controlling how pointer speed maps to brush strength
///
/// Mirrors the six numeric fields the host persists and exposes in the
/// panel. Immutable per tick: the session reads a reference each tick and
/// never caches it across ticks (aside from the sample count, which is
/// tracked to detect horizon changes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureConfig {
    /// Window size for the moving average (≥ 1)
    pub sample_count: usize,
    /// Divisor normalizing averaged pixel speed into strength units
    pub attenuation: f64,
    /// Flat amount subtracted after normalization
    pub subtract: f64,
    /// Upper clamp on the output strength (≥ 0)
    pub max_output: f64,
    /// Lower clamp on the output strength (≤ 1)
    pub min_output: f64,
    /// Power-curve exponent in [0.01, 5]
    pub falloff: f64,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            attenuation: DEFAULT_ATTENUATION,
            subtract: DEFAULT_SUBTRACT,
            max_output: DEFAULT_MAX_OUTPUT,
            min_output: DEFAULT_MIN_OUTPUT,
            falloff: DEFAULT_FALLOFF,
        }
    }
}

impl PressureConfig {
    /// Check the config against the same bounds the UI widgets enforce
    ///
    /// Call when accepting a config from the host (deserialization, command
    /// input). A config that passes here can never fault the estimator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count < 1 {
            return Err(ConfigError::InvalidSampleCount(self.sample_count));
        }
        if self.min_output > self.max_output {
            return Err(ConfigError::InvertedOutputRange {
                min: self.min_output,
                max: self.max_output,
            });
        }
        if self.attenuation == 0.0 {
            return Err(ConfigError::ZeroAttenuation);
        }
        let (lo, hi) = FALLOFF_RANGE;
        if !(self.falloff >= lo && self.falloff <= hi) {
            return Err(ConfigError::FalloffOutOfRange(self.falloff));
        }
        Ok(())
    }

    /// Coerce every field into its widget range
    ///
    /// Headless hosts have no input widgets to enforce bounds, so this
    /// reproduces the widget behavior: each field is clamped independently
    /// rather than rejected.
    pub fn clamped(&self) -> PressureConfig {
        let (falloff_min, falloff_max) = FALLOFF_RANGE;
        let max_output = self.max_output.max(0.0);
        PressureConfig {
            sample_count: self.sample_count.max(1),
            attenuation: self.attenuation,
            subtract: self.subtract,
            max_output,
            min_output: self.min_output.min(1.0).min(max_output),
            falloff: self.falloff.clamp(falloff_min, falloff_max),
        }
    }
}
