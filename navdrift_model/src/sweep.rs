//! Parameter sweeps.
//!
//! Cross-track sweeps run the accumulator once per (BI, ARW) pair of the
//! configured cross product, BI-major. Every pair gets its own freshly
//! allocated [`ErrorSeries`]; no accumulator state survives between pairs.
//!
//! Scale-factor sweeps evaluate the turn model over a list or range of
//! scale-factor errors.

use navdrift_common::consts::MAX_SCALE_FACTOR_POINTS;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::accumulator::{AccumulatorParams, ErrorSeries, accumulate, sample_count};
use crate::error::{ModelError, ModelResult, bounded_count, require_finite, require_positive};
use crate::scale_factor::{TurnParams, solve_turn};

/// Cross-track simulation settings.
///
/// Velocity is in m/s. Unit conversion from other speed units belongs to
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Bias instability values to scan [deg/hr].
    pub bias_instability: Vec<f64>,
    /// Angle random walk values to scan [deg/rt(hr)].
    pub angle_random_walk: Vec<f64>,
    /// Simulated duration [s].
    pub total_time: f64,
    /// Sample spacing [s].
    pub time_step: f64,
    /// Vehicle speed [m/s].
    pub velocity: f64,
    pub include_bias_instability: bool,
    pub include_angle_random_walk: bool,
}

impl SimulationConfig {
    /// Check the kinematic parameters and every error figure.
    pub fn validate(&self) -> ModelResult<()> {
        require_positive("time_step", self.time_step)?;
        require_positive("total_time", self.total_time)?;
        sample_count(self.total_time, self.time_step)?;
        require_finite("velocity", self.velocity)?;
        for &bi in &self.bias_instability {
            require_finite("bi_deg_per_hr", bi)?;
        }
        for &arw in &self.angle_random_walk {
            require_finite("arw_deg_per_sqrt_hr", arw)?;
        }
        Ok(())
    }

    /// Number of (BI, ARW) combinations.
    pub fn combination_count(&self) -> usize {
        self.bias_instability.len() * self.angle_random_walk.len()
    }

    /// The cross product of the two error sequences, BI-major.
    pub fn combinations(&self) -> impl Iterator<Item = ImuErrorSpec> + '_ {
        self.bias_instability.iter().flat_map(move |&bi| {
            self.angle_random_walk
                .iter()
                .map(move |&arw| ImuErrorSpec {
                    bias_instability: bi,
                    angle_random_walk: arw,
                })
        })
    }

    /// Accumulator inputs for one combination.
    pub fn params_for(&self, spec: ImuErrorSpec) -> AccumulatorParams {
        AccumulatorParams {
            bi_deg_per_hr: spec.bias_instability,
            arw_deg_per_sqrt_hr: spec.angle_random_walk,
            velocity: self.velocity,
            total_time: self.total_time,
            time_step: self.time_step,
            include_bi: self.include_bias_instability,
            include_arw: self.include_angle_random_walk,
        }
    }
}

/// One gyro's error figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImuErrorSpec {
    /// [deg/hr]
    pub bias_instability: f64,
    /// [deg/rt(hr)]
    pub angle_random_walk: f64,
}

/// Series produced for one combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub spec: ImuErrorSpec,
    pub series: ErrorSeries,
}

/// Run the accumulator over every (BI, ARW) combination.
///
/// Parameters are validated before any series is computed. An empty BI or
/// ARW list yields an empty result.
pub fn sweep(config: &SimulationConfig) -> ModelResult<Vec<SweepResult>> {
    config.validate()?;

    debug!(
        combinations = config.combination_count(),
        samples = sample_count(config.total_time, config.time_step)?,
        "Starting cross-track sweep"
    );

    let mut results = Vec::with_capacity(config.combination_count());
    for spec in config.combinations() {
        let series = accumulate(&config.params_for(spec))?;
        if series.exceeds_small_angle_regime() {
            warn!(
                bi = spec.bias_instability,
                arw = spec.angle_random_walk,
                peak_heading_angle = series.peak_heading_angle,
                "Heading error reached pi/2; small-angle model no longer valid"
            );
        }
        debug!(
            bi = spec.bias_instability,
            arw = spec.angle_random_walk,
            final_error = series.final_error(),
            "Combination complete"
        );
        results.push(SweepResult { spec, series });
    }

    Ok(results)
}

/// Half-open range of scale-factor errors, `start + k·step < stop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactorRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl ScaleFactorRange {
    pub fn validate(&self) -> ModelResult<()> {
        require_finite("start", self.start)?;
        require_finite("stop", self.stop)?;
        require_positive("step", self.step)?;
        Ok(())
    }

    /// Expand to `ceil((stop - start) / step)` values, empty when
    /// `stop <= start`, at most [`MAX_SCALE_FACTOR_POINTS`].
    pub fn values(&self) -> ModelResult<Vec<f64>> {
        self.validate()?;
        if self.stop <= self.start {
            return Ok(Vec::new());
        }
        let n = bounded_count(
            "step",
            self.step,
            (self.stop - self.start) / self.step,
            MAX_SCALE_FACTOR_POINTS,
        )?;
        Ok((0..n).map(|k| self.start + k as f64 * self.step).collect())
    }
}

/// Position error for one scale-factor value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactorPoint {
    /// Fractional scale-factor error.
    pub scale_factor_error: f64,
    /// [m]
    pub position_error: f64,
}

/// Evaluate the turn model for each scale-factor error.
pub fn scale_factor_sweep(turn: &TurnParams, errors: &[f64]) -> ModelResult<Vec<ScaleFactorPoint>> {
    if turn.turn_rate_deg_per_s == 0.0 {
        return Err(ModelError::invalid(
            "turn_rate_deg_per_s",
            turn.turn_rate_deg_per_s,
            "turn rate must be non-zero (radius is speed / rate)",
        ));
    }

    debug!(points = errors.len(), "Starting scale-factor sweep");

    errors
        .iter()
        .map(|&k| {
            solve_turn(k, turn).map(|s| ScaleFactorPoint {
                scale_factor_error: k,
                position_error: s.position_error(),
            })
        })
        .collect()
}
