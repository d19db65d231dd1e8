//! Scale-factor turn error.
//!
//! A gyro with scale-factor error `k` reports `ω·(1 + k)` for a true rate
//! `ω`. Dead-reckoning a constant-speed turn with that rate puts the vehicle
//! on a circle of the wrong radius. The error is the straight-line distance
//! between the true and the perceived arc end points after `duration`:
//!
//! ```text
//! r   = v / ω                  r'  = v / (ω·(1 + k))
//! θ   = 2π · (v·T) / (2π·r)    θ'  = 2π · (v·T) / (2π·r')
//!     = ω·T                        = ω·(1 + k)·T
//! P   = (r·sin θ, r·cos θ)     P'  = (r'·sin θ', r'·cos θ')
//! err = |P' − P|
//! ```
//!
//! The angle is evaluated as `ω·T` so that `v = 0` gives a zero-radius
//! arc at the origin instead of 0/0.
//!
//! Independent of the cross-track accumulator.

use navdrift_common::units::deg_per_s_to_rad_per_s;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult, require_finite};

/// Kinematics of the turn being dead-reckoned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnParams {
    /// True turn rate [deg/s], non-zero.
    pub turn_rate_deg_per_s: f64,
    /// Forward speed [m/s].
    pub speed: f64,
    /// Turn duration [s].
    pub duration: f64,
}

/// End point of a circular arc in the turn frame [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnEndpoint {
    pub x: f64,
    pub y: f64,
}

impl TurnEndpoint {
    /// End point after turning at `rate` [rad/s] for `duration` at `speed`.
    fn on_arc(speed: f64, rate: f64, duration: f64) -> Self {
        let radius = speed / rate;
        let theta = rate * duration;
        Self {
            x: radius * theta.sin(),
            y: radius * theta.cos(),
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &TurnEndpoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// True and perceived arc end points for one scale-factor error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnSolution {
    pub true_end: TurnEndpoint,
    pub perceived_end: TurnEndpoint,
}

impl TurnSolution {
    /// Position error [m].
    #[inline]
    pub fn position_error(&self) -> f64 {
        self.true_end.distance_to(&self.perceived_end)
    }
}

/// Solve the true and perceived turns.
///
/// # Errors
///
/// `InvalidParameter` when the turn rate is zero, when
/// `scale_factor_error == -1` (perceived rate is zero), or when any input is
/// not finite.
pub fn solve_turn(scale_factor_error: f64, turn: &TurnParams) -> ModelResult<TurnSolution> {
    require_finite("scale_factor_error", scale_factor_error)?;
    require_finite("turn_rate_deg_per_s", turn.turn_rate_deg_per_s)?;
    require_finite("speed", turn.speed)?;
    require_finite("duration", turn.duration)?;
    if turn.turn_rate_deg_per_s == 0.0 {
        return Err(ModelError::invalid(
            "turn_rate_deg_per_s",
            turn.turn_rate_deg_per_s,
            "turn rate must be non-zero (radius is speed / rate)",
        ));
    }

    let true_rate = deg_per_s_to_rad_per_s(turn.turn_rate_deg_per_s);
    let perceived_rate = true_rate * (1.0 + scale_factor_error);
    if perceived_rate == 0.0 {
        return Err(ModelError::invalid(
            "scale_factor_error",
            scale_factor_error,
            "perceived turn rate is zero",
        ));
    }

    Ok(TurnSolution {
        true_end: TurnEndpoint::on_arc(turn.speed, true_rate, turn.duration),
        perceived_end: TurnEndpoint::on_arc(turn.speed, perceived_rate, turn.duration),
    })
}

/// Position error [m] after a turn dead-reckoned with a mis-scaled gyro.
///
/// `scale_factor_error` is fractional (0.01 = 1 %), `turn_rate_deg_per_s`
/// must be non-zero, `speed` in m/s, `duration` in s.
pub fn calculate_position_error(
    scale_factor_error: f64,
    turn_rate_deg_per_s: f64,
    speed: f64,
    duration: f64,
) -> ModelResult<f64> {
    let turn = TurnParams {
        turn_rate_deg_per_s,
        speed,
        duration,
    };
    solve_turn(scale_factor_error, &turn).map(|s| s.position_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_scale_factor_gives_zero_error() {
        for rate in [10.0, -10.0, 0.5, 90.0] {
            let err = calculate_position_error(0.0, rate, 2.8, 0.25).unwrap();
            assert_eq!(err, 0.0);
        }
    }

    #[test]
    fn reference_turn() {
        let err = calculate_position_error(0.01, 10.0, 2.8, 0.25).unwrap();
        assert!(err > 0.0);
        assert!((err - 0.158_992_427_751_921_88).abs() < 1e-12);

        let err = calculate_position_error(-0.01, 10.0, 2.8, 0.25).unwrap();
        assert!((err - 0.162_201_313_744_097_88).abs() < 1e-12);
    }

    #[test]
    fn reference_turn_matches_direct_formula() {
        let (k, rate, v, t) = (0.01, 10.0_f64, 2.8, 0.25);
        let w = rate.to_radians();
        let r = v / w;
        let rp = v / (w * (1.0 + k));
        let th = v * t / r;
        let thp = v * t / rp;
        let expected = ((rp * thp.sin() - r * th.sin()).powi(2)
            + (rp * thp.cos() - r * th.cos()).powi(2))
        .sqrt();
        let err = calculate_position_error(k, rate, v, t).unwrap();
        assert!((err - expected).abs() < 1e-9);
    }

    #[test]
    fn error_grows_with_magnitude() {
        let small = calculate_position_error(0.001, 10.0, 2.8, 0.25).unwrap();
        let large = calculate_position_error(0.005, 10.0, 2.8, 0.25).unwrap();
        assert!(small > 0.0);
        assert!(large > small);
    }

    #[test]
    fn zero_speed_gives_zero_error() {
        assert_eq!(calculate_position_error(0.01, 10.0, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(calculate_position_error(-0.5, -30.0, 0.0, 0.25).unwrap(), 0.0);

        let turn = TurnParams {
            turn_rate_deg_per_s: 10.0,
            speed: 0.0,
            duration: 1.0,
        };
        let sol = solve_turn(0.01, &turn).unwrap();
        assert_eq!(sol.true_end, TurnEndpoint { x: 0.0, y: 0.0 });
        assert!(sol.perceived_end.x.is_finite() && sol.perceived_end.y.is_finite());
    }

    #[test]
    fn zero_turn_rate_is_invalid() {
        assert!(matches!(
            calculate_position_error(0.01, 0.0, 2.8, 0.25),
            Err(ModelError::InvalidParameter {
                name: "turn_rate_deg_per_s",
                ..
            })
        ));
    }

    #[test]
    fn minus_one_scale_factor_is_invalid() {
        assert!(matches!(
            calculate_position_error(-1.0, 10.0, 2.8, 0.25),
            Err(ModelError::InvalidParameter {
                name: "scale_factor_error",
                ..
            })
        ));
    }

    #[test]
    fn true_endpoint_lies_on_circle() {
        let turn = TurnParams {
            turn_rate_deg_per_s: 10.0,
            speed: 2.8,
            duration: 3.0,
        };
        let sol = solve_turn(0.02, &turn).unwrap();
        let r = 2.8 / 10.0_f64.to_radians();
        let p = sol.true_end;
        assert!(((p.x * p.x + p.y * p.y).sqrt() - r).abs() < 1e-9);
        assert!((sol.position_error() - sol.perceived_end.distance_to(&p)).abs() < 1e-15);
    }
}
