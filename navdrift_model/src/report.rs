//! Presentation helpers for the `navdrift` binary.
//!
//! Legend labels and JSON/CSV writers for the model output. Nothing in here
//! feeds back into the models; plotting tools consume what is written.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::accumulator::ErrorSeries;
use crate::sweep::{ImuErrorSpec, ScaleFactorPoint, SimulationConfig, SweepResult};

/// Errors while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Legend label for one combination.
///
/// Names whichever parameter is being scanned: BI when several BI values
/// are configured, otherwise ARW when several ARW values are, otherwise the
/// vehicle speed.
pub fn legend_label(config: &SimulationConfig, spec: &ImuErrorSpec) -> String {
    if config.bias_instability.len() > 1 {
        format!("BI = {} deg/hr", spec.bias_instability)
    } else if config.angle_random_walk.len() > 1 {
        format!("ARW = {} deg/rt(hr)", spec.angle_random_walk)
    } else {
        format!("Velocity = {:.2} m/s", config.velocity)
    }
}

/// A sweep result with its legend label.
#[derive(Debug, Clone, Serialize)]
pub struct LabelledSeries<'a> {
    pub label: String,
    pub spec: ImuErrorSpec,
    pub series: &'a ErrorSeries,
}

/// Attach labels to sweep results, preserving order.
pub fn label_results<'a>(
    config: &SimulationConfig,
    results: &'a [SweepResult],
) -> Vec<LabelledSeries<'a>> {
    results
        .iter()
        .map(|r| LabelledSeries {
            label: legend_label(config, &r.spec),
            spec: r.spec,
            series: &r.series,
        })
        .collect()
}

/// One CSV row of a labelled series.
#[derive(Debug, Serialize)]
struct SeriesRow<'a> {
    label: &'a str,
    time_min: f64,
    bias_error_m: f64,
    arw_error_m: f64,
    total_error_m: f64,
}

/// One CSV row of a scale-factor sweep.
#[derive(Debug, Serialize)]
struct ScaleFactorRow {
    scale_factor_error_pct: f64,
    position_error_m: f64,
}

/// Write labelled series.
///
/// CSV has one row per sample with time in minutes, the unit plots use.
pub fn write_series<W: Write>(
    out: &mut W,
    series: &[LabelledSeries<'_>],
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, series)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for ls in series {
                let s = ls.series;
                for i in 0..s.len() {
                    writer.serialize(SeriesRow {
                        label: &ls.label,
                        time_min: s.time[i] / 60.0,
                        bias_error_m: s.bias_error[i],
                        arw_error_m: s.arw_error[i],
                        total_error_m: s.total_error[i],
                    })?;
                }
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write a scale-factor sweep. CSV reports the error in percent.
pub fn write_scale_factor<W: Write>(
    out: &mut W,
    points: &[ScaleFactorPoint],
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, points)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for p in points {
                writer.serialize(ScaleFactorRow {
                    scale_factor_error_pct: p.scale_factor_error * 100.0,
                    position_error_m: p.position_error,
                })?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
