//! Scenario configuration (`navdrift.toml`).
//!
//! All sections are optional and default to the reference tactical-grade
//! scenario. Speed may be given in m/s or mph; the conversion happens here
//! so that the models only ever see SI units.
//!
//! ```toml
//! [shared]
//! log_level = "info"
//!
//! [accumulator]
//! bias_instability = [0.1, 0.3, 1.0]
//! angle_random_walk = [0.03]
//! total_time = 3000.0
//! time_step = 1.0
//! velocity_mph = 30.0
//!
//! [scale_factor]
//! turn_rate_deg_per_s = 10.0
//! speed = 2.8
//! duration = 0.25
//! errors = { start = -0.01, stop = 0.011, step = 0.001 }
//! ```

use navdrift_common::consts::{
    DEFAULT_ANGLE_RANDOM_WALK, DEFAULT_BIAS_INSTABILITY, DEFAULT_SF_START, DEFAULT_SF_STEP,
    DEFAULT_SF_STOP, DEFAULT_TIME_STEP, DEFAULT_TOTAL_TIME, DEFAULT_TURN_DURATION,
    DEFAULT_TURN_RATE_DEG_PER_S, DEFAULT_TURN_SPEED, DEFAULT_VELOCITY_MPH,
};
use navdrift_common::prelude::{ConfigError, SharedConfig, mph_to_mps};
use serde::{Deserialize, Serialize};

use crate::scale_factor::TurnParams;
use crate::sweep::{ScaleFactorRange, SimulationConfig};

// ─── Top-Level Config ───────────────────────────────────────────────

/// Complete scenario file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub shared: SharedConfig,

    #[serde(default)]
    pub accumulator: AccumulatorSection,

    #[serde(default)]
    pub scale_factor: ScaleFactorSection,
}

impl ScenarioConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.accumulator.validate()?;
        self.scale_factor.validate()?;
        Ok(())
    }
}

// ─── Cross-Track Accumulator ────────────────────────────────────────

/// `[accumulator]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccumulatorSection {
    /// Bias instability values [deg/hr].
    #[serde(default = "default_bias_instability")]
    pub bias_instability: Vec<f64>,

    /// Angle random walk values [deg/rt(hr)].
    #[serde(default = "default_angle_random_walk")]
    pub angle_random_walk: Vec<f64>,

    /// Simulated duration [s] (default: 3000).
    #[serde(default = "default_total_time")]
    pub total_time: f64,

    /// Sample spacing [s] (default: 1).
    #[serde(default = "default_time_step")]
    pub time_step: f64,

    /// Vehicle speed [m/s]. Mutually exclusive with `velocity_mph`.
    /// With neither set the reference 30 mph is used.
    #[serde(default)]
    pub velocity_mps: Option<f64>,

    /// Vehicle speed [mph]. Mutually exclusive with `velocity_mps`.
    #[serde(default)]
    pub velocity_mph: Option<f64>,

    #[serde(default = "default_true")]
    pub include_bias_instability: bool,

    #[serde(default = "default_true")]
    pub include_angle_random_walk: bool,
}

fn default_bias_instability() -> Vec<f64> {
    vec![DEFAULT_BIAS_INSTABILITY]
}
fn default_angle_random_walk() -> Vec<f64> {
    vec![DEFAULT_ANGLE_RANDOM_WALK]
}
fn default_total_time() -> f64 {
    DEFAULT_TOTAL_TIME
}
fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP
}
fn default_true() -> bool {
    true
}

impl Default for AccumulatorSection {
    fn default() -> Self {
        Self {
            bias_instability: default_bias_instability(),
            angle_random_walk: default_angle_random_walk(),
            total_time: DEFAULT_TOTAL_TIME,
            time_step: DEFAULT_TIME_STEP,
            velocity_mps: None,
            velocity_mph: None,
            include_bias_instability: true,
            include_angle_random_walk: true,
        }
    }
}

impl AccumulatorSection {
    /// Validate parameter bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.total_time.is_finite() && self.total_time > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "accumulator.total_time {} must be > 0",
                self.total_time
            )));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "accumulator.time_step {} must be > 0",
                self.time_step
            )));
        }
        let v = self.velocity()?;
        if !v.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "accumulator velocity {v} must be finite"
            )));
        }
        if let Some(bad) = self
            .bias_instability
            .iter()
            .chain(&self.angle_random_walk)
            .find(|x| !x.is_finite())
        {
            return Err(ConfigError::ValidationError(format!(
                "accumulator error figure {bad} must be finite"
            )));
        }
        Ok(())
    }

    /// Vehicle speed in m/s.
    pub fn velocity(&self) -> Result<f64, ConfigError> {
        match (self.velocity_mps, self.velocity_mph) {
            (Some(mps), None) => Ok(mps),
            (None, Some(mph)) => Ok(mph_to_mps(mph)),
            (None, None) => Ok(mph_to_mps(DEFAULT_VELOCITY_MPH)),
            (Some(_), Some(_)) => Err(ConfigError::ValidationError(
                "accumulator: set only one of velocity_mps, velocity_mph".to_string(),
            )),
        }
    }

    /// Build the model-level configuration.
    pub fn to_simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig {
            bias_instability: self.bias_instability.clone(),
            angle_random_walk: self.angle_random_walk.clone(),
            total_time: self.total_time,
            time_step: self.time_step,
            velocity: self.velocity()?,
            include_bias_instability: self.include_bias_instability,
            include_angle_random_walk: self.include_angle_random_walk,
        })
    }
}

// ─── Scale-Factor Turn ──────────────────────────────────────────────

/// `[scale_factor]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleFactorSection {
    /// True turn rate [deg/s] (default: 10).
    #[serde(default = "default_turn_rate")]
    pub turn_rate_deg_per_s: f64,

    /// Forward speed [m/s] (default: 2.8).
    #[serde(default = "default_turn_speed")]
    pub speed: f64,

    /// Turn duration [s] (default: 0.25).
    #[serde(default = "default_turn_duration")]
    pub duration: f64,

    /// Scale-factor errors to scan.
    #[serde(default)]
    pub errors: ScaleFactorErrors,
}

fn default_turn_rate() -> f64 {
    DEFAULT_TURN_RATE_DEG_PER_S
}
fn default_turn_speed() -> f64 {
    DEFAULT_TURN_SPEED
}
fn default_turn_duration() -> f64 {
    DEFAULT_TURN_DURATION
}

impl Default for ScaleFactorSection {
    fn default() -> Self {
        Self {
            turn_rate_deg_per_s: DEFAULT_TURN_RATE_DEG_PER_S,
            speed: DEFAULT_TURN_SPEED,
            duration: DEFAULT_TURN_DURATION,
            errors: ScaleFactorErrors::default(),
        }
    }
}

/// Either an explicit list or a half-open range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleFactorErrors {
    List(Vec<f64>),
    Range(ScaleFactorRange),
}

impl Default for ScaleFactorErrors {
    fn default() -> Self {
        Self::Range(ScaleFactorRange {
            start: DEFAULT_SF_START,
            stop: DEFAULT_SF_STOP,
            step: DEFAULT_SF_STEP,
        })
    }
}

impl ScaleFactorSection {
    /// Validate parameter bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.turn_rate_deg_per_s.is_finite() || self.turn_rate_deg_per_s == 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "scale_factor.turn_rate_deg_per_s {} must be finite and non-zero",
                self.turn_rate_deg_per_s
            )));
        }
        if !self.speed.is_finite() || !self.duration.is_finite() {
            return Err(ConfigError::ValidationError(
                "scale_factor.speed and duration must be finite".to_string(),
            ));
        }
        self.error_values().map(|_| ())
    }

    pub fn turn_params(&self) -> TurnParams {
        TurnParams {
            turn_rate_deg_per_s: self.turn_rate_deg_per_s,
            speed: self.speed,
            duration: self.duration,
        }
    }

    /// Expanded list of scale-factor errors.
    pub fn error_values(&self) -> Result<Vec<f64>, ConfigError> {
        match &self.errors {
            ScaleFactorErrors::List(v) => Ok(v.clone()),
            ScaleFactorErrors::Range(r) => r
                .values()
                .map_err(|e| ConfigError::ValidationError(format!("scale_factor.errors: {e}"))),
        }
    }
}
