//! Prelude module for common re-exports.
//!
//! ```rust
//! use navdrift_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Units ──────────────────────────────────────────────────────────
pub use crate::consts::{MPH_PER_MPS, SECONDS_PER_HOUR};
pub use crate::units::{
    angle_random_walk_to_rad_per_sqrt_s, bias_instability_to_rad_per_s, deg_per_s_to_rad_per_s,
    mph_to_mps,
};
