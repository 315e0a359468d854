//! Property-based tests for the differential model using proptest.
//!
//! Covers: wheel speed ordering, the fixed torque/speed relation, the time
//! grid, and the shape of the pressure and stability curves.

use drivetrain_models::models::drivetrain::differential::{
    InputField, SimulationInputs, evaluate,
};
use proptest::prelude::*;
use uom::si::{angular_velocity::radian_per_second, time::second, torque::newton_meter};

fn valid_inputs() -> impl Strategy<Value = SimulationInputs> {
    (500.0..=5000.0_f64, 5.0..=50.0_f64, 2.0..=6.0_f64).prop_map(|(rpm, radius, ratio)| {
        SimulationInputs::from_dashboard(rpm, radius, ratio)
    })
}

proptest! {
    /// The outer wheel always turns faster than the inner wheel.
    #[test]
    fn outer_wheel_is_faster(inputs in valid_inputs()) {
        let out = evaluate(&inputs).unwrap();

        prop_assert!(out.outer_wheel_speed > out.inner_wheel_speed);
        prop_assert!(out.torque_outer > out.torque_inner);
    }

    /// Torque is exactly 50 N·m per rad/s of wheel speed.
    #[test]
    fn torque_tracks_wheel_speed(inputs in valid_inputs()) {
        let out = evaluate(&inputs).unwrap();

        let inner = out.torque_inner.get::<newton_meter>()
            / out.inner_wheel_speed.get::<radian_per_second>();
        let outer = out.torque_outer.get::<newton_meter>()
            / out.outer_wheel_speed.get::<radian_per_second>();

        prop_assert!((inner - 50.0).abs() < 1e-9, "inner ratio {}", inner);
        prop_assert!((outer - 50.0).abs() < 1e-9, "outer ratio {}", outer);
    }

    /// Out-of-range engine speeds are rejected and named.
    #[test]
    fn rejects_engine_speed_outside_range(
        rpm in prop_oneof![0.0..499.0_f64, 5001.0..20_000.0_f64],
    ) {
        let err = evaluate(&SimulationInputs::from_dashboard(rpm, 20.0, 4.0)).unwrap_err();
        prop_assert_eq!(err.field, InputField::EngineSpeed);
    }

    /// Out-of-range turn radii (including zero) are rejected and named.
    #[test]
    fn rejects_turn_radius_outside_range(
        radius in prop_oneof![-10.0..4.99_f64, 50.01..500.0_f64],
    ) {
        let err = evaluate(&SimulationInputs::from_dashboard(1500.0, radius, 4.0)).unwrap_err();
        prop_assert_eq!(err.field, InputField::TurnRadius);
    }

    /// Out-of-range gear ratios (including zero) are rejected and named.
    #[test]
    fn rejects_gear_ratio_outside_range(
        ratio in prop_oneof![-1.0..1.99_f64, 6.01..20.0_f64],
    ) {
        let err = evaluate(&SimulationInputs::from_dashboard(1500.0, 20.0, ratio)).unwrap_err();
        prop_assert_eq!(err.field, InputField::GearRatio);
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn time_grid_has_fixed_resolution() {
    let out = evaluate(&SimulationInputs::default()).unwrap();

    assert_eq!(out.time.len(), 500);
    assert_eq!(out.pressure.len(), 500);
    assert_eq!(out.stability.len(), 500);
    assert_eq!(out.time[0].get::<second>(), 0.0);
    assert_eq!(out.time[499].get::<second>(), 5.0);
    assert!(out.time.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn pressure_peaks_at_midpoint_and_is_symmetric() {
    let out = evaluate(&SimulationInputs::default()).unwrap();
    let p = &out.pressure;

    // No sample lands exactly on 2.5 s; samples 249 and 250 straddle it.
    let peak = p.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak <= 100.0);
    assert!(peak > 99.99);
    assert!((p[249] - peak).abs() < 1e-9);
    assert!((p[250] - peak).abs() < 1e-9);

    for i in 0..p.len() {
        assert!(
            (p[i] - p[p.len() - 1 - i]).abs() < 1e-9,
            "asymmetric at sample {i}"
        );
    }
}

#[test]
fn stability_rises_through_zero_at_midpoint() {
    let out = evaluate(&SimulationInputs::default()).unwrap();
    let s = &out.stability;

    assert!(s.windows(2).all(|w| w[0] < w[1]));
    assert!(s.iter().all(|v| v.abs() < 1.0));
    assert!(s[249] < 0.0 && s[250] > 0.0);
    assert!((s[249] + s[250]).abs() < 1e-9);
}

#[test]
fn outputs_ignore_inputs_for_profiles() {
    let slow = evaluate(&SimulationInputs::from_dashboard(500.0, 5.0, 6.0)).unwrap();
    let fast = evaluate(&SimulationInputs::from_dashboard(5000.0, 50.0, 2.0)).unwrap();

    assert_eq!(slow.time, fast.time);
    assert_eq!(slow.pressure, fast.pressure);
    assert_eq!(slow.stability, fast.stability);
}
