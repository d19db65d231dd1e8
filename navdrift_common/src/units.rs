//! Gyro error and speed unit conversions.
//!
//! Datasheets quote bias instability in deg/hr and angle random walk in
//! deg/rt(hr). The models work in SI radians and seconds:
//!
//! ```text
//! BI  [rad/s]     = BI  [deg/hr]     × (π/180) / 3600
//! ARW [rad/rt(s)] = ARW [deg/rt(hr)] × (π/180) / √3600
//! ```
//!
//! Keep the operation order; folding the factors changes the last bit.

use core::f64::consts::PI;

use crate::consts::{MPH_PER_MPS, SECONDS_PER_HOUR};

/// Convert bias instability from deg/hr to rad/s.
#[inline]
pub fn bias_instability_to_rad_per_s(deg_per_hr: f64) -> f64 {
    deg_per_hr * PI / 180.0 / SECONDS_PER_HOUR
}

/// Convert angle random walk from deg/rt(hr) to rad/rt(s).
#[inline]
pub fn angle_random_walk_to_rad_per_sqrt_s(deg_per_sqrt_hr: f64) -> f64 {
    deg_per_sqrt_hr * PI / 180.0 / SECONDS_PER_HOUR.sqrt()
}

/// Convert a turn rate from deg/s to rad/s.
#[inline]
pub fn deg_per_s_to_rad_per_s(deg_per_s: f64) -> f64 {
    deg_per_s.to_radians()
}

/// Convert miles per hour to metres per second.
#[inline]
pub fn mph_to_mps(mph: f64) -> f64 {
    mph / MPH_PER_MPS
}
