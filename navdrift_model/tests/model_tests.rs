//! End-to-end model properties through the public API.
//!
//! Series shape and grid, contribution switches, monotonic bias growth,
//! cross-product independence and the scale-factor reference turn.

use navdrift_model::accumulator::{AccumulatorParams, accumulate};
use navdrift_model::scale_factor::{TurnParams, calculate_position_error};
use navdrift_model::sweep::{ScaleFactorRange, SimulationConfig, scale_factor_sweep, sweep};
use navdrift_model::ModelError;

fn tactical_grade(total_time: f64, time_step: f64) -> SimulationConfig {
    SimulationConfig {
        bias_instability: vec![0.3],
        angle_random_walk: vec![0.03],
        total_time,
        time_step,
        velocity: 30.0 / 2.237,
        include_bias_instability: true,
        include_angle_random_walk: true,
    }
}

#[test]
fn reference_scenario_shape() {
    let results = sweep(&tactical_grade(3000.0, 1.0)).unwrap();
    assert_eq!(results.len(), 1);
    let s = &results[0].series;
    assert_eq!(s.len(), 3000);
    assert_eq!(s.time[0], 0.0);
    assert!(s.time.windows(2).all(|w| w[1] > w[0]));
    for i in 0..s.len() {
        assert_eq!(s.total_error[i], s.bias_error[i] + s.arw_error[i]);
    }
    // ~107 m after 50 minutes at 30 mph.
    assert!((s.final_error() - 106.965_238_600_579_94).abs() < 1e-6);
}

#[test]
fn fractional_step_grid() {
    let results = sweep(&tactical_grade(1.0, 0.1)).unwrap();
    let s = &results[0].series;
    assert_eq!(s.len(), 10);
    for (i, t) in s.time.iter().enumerate() {
        assert_eq!(*t, i as f64 * 0.1);
    }
}

#[test]
fn switches_disable_contributions() {
    let mut cfg = tactical_grade(600.0, 1.0);
    cfg.include_bias_instability = false;
    let s = &sweep(&cfg).unwrap()[0].series;
    assert!(s.bias_error.iter().all(|&e| e == 0.0));

    cfg.include_bias_instability = true;
    cfg.include_angle_random_walk = false;
    let s = &sweep(&cfg).unwrap()[0].series;
    assert!(s.arw_error.iter().all(|&e| e == 0.0));
}

#[test]
fn bias_error_grows_monotonically_with_bias() {
    let cfg = SimulationConfig {
        bias_instability: vec![0.1, 1.0, 10.0],
        include_angle_random_walk: false,
        ..tactical_grade(1800.0, 0.5)
    };
    let results = sweep(&cfg).unwrap();
    assert_eq!(results.len(), 3);
    for r in &results {
        assert!(r.series.bias_error.windows(2).all(|w| w[1] >= w[0]));
    }
    assert!(results[0].series.final_error() < results[1].series.final_error());
    assert!(results[1].series.final_error() < results[2].series.final_error());
}

#[test]
fn sweep_results_do_not_share_state() {
    let cfg = SimulationConfig {
        bias_instability: vec![0.3, 0.3],
        angle_random_walk: vec![0.03, 0.03],
        ..tactical_grade(300.0, 1.0)
    };
    let results = sweep(&cfg).unwrap();
    assert_eq!(results.len(), 4);
    for r in &results[1..] {
        assert_eq!(r.series, results[0].series);
    }
}

#[test]
fn invalid_time_parameters() {
    let p = AccumulatorParams {
        bi_deg_per_hr: 0.3,
        arw_deg_per_sqrt_hr: 0.03,
        velocity: 10.0,
        total_time: 0.0,
        time_step: 1.0,
        include_bi: true,
        include_arw: true,
    };
    assert!(matches!(
        accumulate(&p),
        Err(ModelError::InvalidParameter { .. })
    ));
    assert!(sweep(&tactical_grade(100.0, -1.0)).is_err());
}

#[test]
fn scale_factor_reference_turn() {
    assert_eq!(calculate_position_error(0.0, 10.0, 2.8, 0.25).unwrap(), 0.0);
    let err = calculate_position_error(0.01, 10.0, 2.8, 0.25).unwrap();
    assert!(err > 0.0 && err < 1.0);
    assert!((err - 0.158_992_427_751_921_88).abs() < 1e-12);
    assert!(calculate_position_error(0.01, 0.0, 2.8, 0.25).is_err());
}

#[test]
fn scale_factor_default_scan() {
    let turn = TurnParams {
        turn_rate_deg_per_s: 10.0,
        speed: 2.8,
        duration: 0.25,
    };
    let errors = ScaleFactorRange {
        start: -0.01,
        stop: 0.011,
        step: 0.001,
    }
    .values()
    .unwrap();
    let points = scale_factor_sweep(&turn, &errors).unwrap();
    assert_eq!(points.len(), 21);

    let min = points
        .iter()
        .min_by(|a, b| a.position_error.total_cmp(&b.position_error))
        .unwrap();
    assert!(min.scale_factor_error.abs() < 1e-12);
    assert!(min.position_error < 1e-12);
    assert!(points.iter().all(|p| p.position_error >= 0.0));
}
