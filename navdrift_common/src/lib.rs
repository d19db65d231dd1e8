//! navdrift Common Library
//!
//! This crate provides shared unit conversions, constants and configuration
//! loading utilities for all navdrift workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Conversion factors and default scenario values
//! - [`units`] - Gyro error and speed unit conversions
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! Add to your `Cargo.toml` with alias for shorter imports:
//! ```toml
//! [dependencies]
//! navdrift = { package = "navdrift_common", path = "../navdrift_common" }
//! ```
//!
//! Then import:
//! ```rust
//! use navdrift_common::units::bias_instability_to_rad_per_s;
//! use navdrift_common::config::{ConfigLoader, SharedConfig};
//! ```

pub mod config;
pub mod consts;
pub mod prelude;
pub mod units;
