//! Cross-track error accumulator.
//!
//! Propagates gyro heading error into lateral position error for a vehicle
//! driving a straight line at constant speed.
//!
//! ```text
//! θ_bi[i]  = θ_bi[i-1] + BI·dt                 (linear heading drift)
//! e_bi[i]  = e_bi[i-1] + v·tan(θ_bi[i])·dt     (integrated deviation)
//! θ_arw[i] = ARW·√t[i]                         (1σ random-walk angle)
//! e_arw[i] = t[i]·v·tan(θ_arw[i])              (recomputed, not integrated)
//! e[i]     = e_bi[i] + e_arw[i]
//! ```
//!
//! Sample 0 is zero for every series. The model is a small-angle
//! approximation: once a heading angle approaches π/2 the tangent diverges.
//! That is left visible in the output rather than clamped.

use navdrift_common::consts::MAX_SAMPLES;
use navdrift_common::units::{angle_random_walk_to_rad_per_sqrt_s, bias_instability_to_rad_per_s};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ModelResult, bounded_count, require_finite, require_positive};

/// Inputs for a single accumulator run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorParams {
    /// Bias instability [deg/hr].
    pub bi_deg_per_hr: f64,
    /// Angle random walk [deg/rt(hr)].
    pub arw_deg_per_sqrt_hr: f64,
    /// Vehicle speed [m/s].
    pub velocity: f64,
    /// Simulated duration [s], > 0.
    pub total_time: f64,
    /// Sample spacing [s], > 0.
    pub time_step: f64,
    /// Accumulate the bias instability contribution.
    pub include_bi: bool,
    /// Add the angle random walk contribution.
    pub include_arw: bool,
}

impl AccumulatorParams {
    /// Validate time parameters and velocity.
    pub fn validate(&self) -> ModelResult<()> {
        require_positive("time_step", self.time_step)?;
        require_positive("total_time", self.total_time)?;
        sample_count(self.total_time, self.time_step)?;
        require_finite("velocity", self.velocity)?;
        require_finite("bi_deg_per_hr", self.bi_deg_per_hr)?;
        require_finite("arw_deg_per_sqrt_hr", self.arw_deg_per_sqrt_hr)?;
        Ok(())
    }

    /// Number of samples: `ceil(total_time / time_step)`.
    #[inline]
    pub fn sample_count(&self) -> ModelResult<usize> {
        sample_count(self.total_time, self.time_step)
    }
}

/// `ceil(total_time / time_step)`, the length of `[0, total_time)` sampled
/// every `time_step`, capped at [`MAX_SAMPLES`]. Callers validate both as
/// positive first.
#[inline]
pub(crate) fn sample_count(total_time: f64, time_step: f64) -> ModelResult<usize> {
    bounded_count("time_step", time_step, total_time / time_step, MAX_SAMPLES)
}

/// Accumulated position error, sampled on a uniform time grid.
///
/// All four vectors have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSeries {
    /// Sample times [s], `time[i] = i·dt`.
    pub time: Vec<f64>,
    /// Bias instability contribution [m].
    pub bias_error: Vec<f64>,
    /// Angle random walk contribution [m].
    pub arw_error: Vec<f64>,
    /// `bias_error + arw_error` [m].
    pub total_error: Vec<f64>,
    /// Largest heading angle reached by either contribution [rad].
    pub peak_heading_angle: f64,
}

impl ErrorSeries {
    fn zeroed(n: usize) -> Self {
        Self {
            time: vec![0.0; n],
            bias_error: vec![0.0; n],
            arw_error: vec![0.0; n],
            total_error: vec![0.0; n],
            peak_heading_angle: 0.0,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Ordered `(time, total_error)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.total_error.iter().copied())
    }

    /// Total error at the last sample, 0 for an empty series.
    pub fn final_error(&self) -> f64 {
        self.total_error.last().copied().unwrap_or(0.0)
    }

    /// True once a heading angle reached π/2, where tan diverges.
    pub fn exceeds_small_angle_regime(&self) -> bool {
        self.peak_heading_angle.abs() >= core::f64::consts::FRAC_PI_2
    }
}

/// Run the accumulator for one BI/ARW pair.
///
/// # Errors
///
/// `ModelError::InvalidParameter` when `time_step` or `total_time` is not a
/// positive finite number, or an error figure/velocity is not finite.
pub fn accumulate(params: &AccumulatorParams) -> ModelResult<ErrorSeries> {
    params.validate()?;

    let n = params.sample_count()?;
    let dt = params.time_step;
    let v = params.velocity;
    let bi_rad = bias_instability_to_rad_per_s(params.bi_deg_per_hr);
    let arw_rad = angle_random_walk_to_rad_per_sqrt_s(params.arw_deg_per_sqrt_hr);

    let mut series = ErrorSeries::zeroed(n);
    let mut angle_bi = 0.0_f64;
    let mut peak = 0.0_f64;

    for i in 1..n {
        let t = i as f64 * dt;
        series.time[i] = t;

        if params.include_bi {
            angle_bi += bi_rad * dt;
            series.bias_error[i] = series.bias_error[i - 1] + v * angle_bi.tan() * dt;
            peak = peak.max(angle_bi.abs());
        }

        if params.include_arw {
            let angle_arw = arw_rad * t.sqrt();
            series.arw_error[i] = t * v * angle_arw.tan();
            peak = peak.max(angle_arw.abs());
        }

        series.total_error[i] = series.bias_error[i] + series.arw_error[i];
    }
    series.peak_heading_angle = peak;

    trace!(
        bi = params.bi_deg_per_hr,
        arw = params.arw_deg_per_sqrt_hr,
        samples = n,
        final_error = series.final_error(),
        "Accumulator run complete"
    );

    Ok(series)
}
