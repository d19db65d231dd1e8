//! # navdrift Model Library
//!
//! Position error models for IMU dead-reckoning:
//!
//! - [`accumulator`] - cross-track error from gyro bias instability and
//!   angle random walk, as a time series
//! - [`scale_factor`] - end-point error of a turn dead-reckoned with a
//!   mis-scaled gyro, as a scalar
//! - [`sweep`] - cross-product and scale-factor parameter scans
//!
//! All models are pure functions in SI units. Scenario loading
//! ([`config`]) and output formatting ([`report`]) serve the `navdrift`
//! binary.

pub mod accumulator;
pub mod config;
pub mod error;
pub mod report;
pub mod scale_factor;
pub mod sweep;

pub use accumulator::{AccumulatorParams, ErrorSeries, accumulate};
pub use error::{ModelError, ModelResult};
pub use scale_factor::{TurnParams, calculate_position_error};
pub use sweep::{SimulationConfig, SweepResult, scale_factor_sweep, sweep};
