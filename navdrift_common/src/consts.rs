//! Workspace-wide constants.
//!
//! Single source of truth for conversion factors and the default demo
//! scenario. Imported by all crates, no duplication permitted.

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Miles-per-hour per metre-per-second, as used by the field scripts.
///
/// Rounded; the exact value is 2.236936...
pub const MPH_PER_MPS: f64 = 2.237;

/// Default bias instability [deg/hr].
pub const DEFAULT_BIAS_INSTABILITY: f64 = 0.3;

/// Default angle random walk [deg/rt(hr)].
pub const DEFAULT_ANGLE_RANDOM_WALK: f64 = 0.03;

/// Default simulated duration [s].
pub const DEFAULT_TOTAL_TIME: f64 = 3000.0;

/// Default integration step [s].
pub const DEFAULT_TIME_STEP: f64 = 1.0;

/// Default vehicle speed [mph].
pub const DEFAULT_VELOCITY_MPH: f64 = 30.0;

/// Default turn rate for the scale-factor model [deg/s].
pub const DEFAULT_TURN_RATE_DEG_PER_S: f64 = 10.0;

/// Default forward speed for the scale-factor model [m/s].
pub const DEFAULT_TURN_SPEED: f64 = 2.8;

/// Default turn duration for the scale-factor model [s].
pub const DEFAULT_TURN_DURATION: f64 = 0.25;

/// Default scale-factor sweep bounds, half-open `[START, STOP)`.
pub const DEFAULT_SF_START: f64 = -0.01;
pub const DEFAULT_SF_STOP: f64 = 0.011;
pub const DEFAULT_SF_STEP: f64 = 0.001;

/// Largest accumulator series length, `ceil(total_time / time_step)`.
///
/// Four `f64` vectors per series: 10 M samples is ~320 MB.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Largest number of values a scale-factor range may expand to.
pub const MAX_SCALE_FACTOR_POINTS: usize = 1_000_000;

/// Default configuration file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "navdrift.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_consistent() {
        assert!(SECONDS_PER_HOUR > 0.0);
        assert!(MPH_PER_MPS > 2.0 && MPH_PER_MPS < 2.5);
        assert!(DEFAULT_TOTAL_TIME > 0.0);
        assert!(DEFAULT_TIME_STEP > 0.0);
        assert!(DEFAULT_TURN_RATE_DEG_PER_S != 0.0);
        assert!((DEFAULT_TOTAL_TIME / DEFAULT_TIME_STEP) as usize <= MAX_SAMPLES);
        assert!(MAX_SCALE_FACTOR_POINTS > 0);
    }

    #[test]
    fn default_sf_range_is_ascending() {
        assert!(DEFAULT_SF_START < DEFAULT_SF_STOP);
        assert!(DEFAULT_SF_STEP > 0.0);
        // 21 samples: -1.0% .. +1.0% inclusive.
        let n = ((DEFAULT_SF_STOP - DEFAULT_SF_START) / DEFAULT_SF_STEP).ceil() as usize;
        assert_eq!(n, 21);
    }
}
