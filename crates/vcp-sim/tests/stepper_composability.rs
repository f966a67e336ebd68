//! Integration test: forced Duffing resonator through the stepper.
//!
//! Checks that a multi-step call and a chain of single-step calls agree,
//! and that the default step count is one.

use std::sync::Arc;

use proptest::prelude::*;
use vcp_core::{Tolerances, nearly_equal};
use vcp_sim::{
    DuffingFactory, Excitation, ForcedOscillatorStepper, IntegratorType, ResonatorConfig,
    ResonatorState,
};

fn stepper() -> ForcedOscillatorStepper {
    ForcedOscillatorStepper::new(Arc::new(DuffingFactory::default()))
}

fn config() -> ResonatorConfig {
    ResonatorConfig {
        frequency_hz: 2.0,
        q_factor: 25.0,
        beta: 0.5,
    }
}

fn excitation() -> Excitation {
    Excitation {
        amplitude: 1.5,
        frequency_hz: 1.8,
        phase: 0.3,
    }
}

fn assert_states_close(a: &ResonatorState, b: &ResonatorState) {
    let tol = Tolerances::default();
    assert!(nearly_equal(a.x, b.x, tol), "x: {} vs {}", a.x, b.x);
    assert!(nearly_equal(a.v, b.v, tol), "v: {} vs {}", a.v, b.v);
    assert!(nearly_equal(a.energy, b.energy, tol), "energy: {} vs {}", a.energy, b.energy);
    assert!(nearly_equal(a.phase, b.phase, tol), "phase: {} vs {}", a.phase, b.phase);
    assert!(nearly_equal(a.time, b.time, tol), "time: {} vs {}", a.time, b.time);
}

#[test]
fn two_steps_equal_two_chained_single_steps() {
    let s = stepper();
    let s0 = ResonatorState::at(0.1, 0.0);
    let dt = 0.01;

    let both = s.simulate(&config(), &s0, &excitation(), dt, 2).unwrap();
    let first = s.simulate(&config(), &s0, &excitation(), dt, 1).unwrap();
    let second = s.simulate(&config(), &first, &excitation(), dt, 1).unwrap();

    assert_states_close(&both, &second);
}

#[test]
fn long_run_equals_chained_run() {
    let s = stepper();
    let mut chained = ResonatorState::at(0.0, 0.2);
    let whole = s
        .simulate(&config(), &chained, &excitation(), 0.005, 400)
        .unwrap();
    for _ in 0..400 {
        chained = s
            .simulate(&config(), &chained, &excitation(), 0.005, 1)
            .unwrap();
    }
    assert_states_close(&whole, &chained);
}

#[test]
fn default_steps_is_one() {
    let s = stepper();
    let s0 = ResonatorState::at(0.4, -0.1);
    let once = s.simulate_once(&config(), &s0, &excitation(), 0.02).unwrap();
    let explicit = s.simulate(&config(), &s0, &excitation(), 0.02, 1).unwrap();
    assert_eq!(once, explicit);
}

#[test]
fn input_energy_and_phase_are_ignored() {
    // Only x, v and time seed the engine; energy/phase are recomputed.
    let s = stepper();
    let a = ResonatorState {
        x: 0.3,
        v: 0.1,
        energy: 0.0,
        phase: 0.0,
        time: 0.5,
    };
    let b = ResonatorState {
        energy: 99.0,
        phase: -2.0,
        ..a
    };
    let out_a = s.simulate(&config(), &a, &excitation(), 0.01, 5).unwrap();
    let out_b = s.simulate(&config(), &b, &excitation(), 0.01, 5).unwrap();
    assert_eq!(out_a, out_b);
}

#[test]
fn reported_energy_is_non_negative_for_hardening_spring() {
    let s = stepper();
    let out = s
        .simulate(&config(), &ResonatorState::at(1.0, 0.0), &excitation(), 0.001, 1_000)
        .unwrap();
    assert!(out.energy >= 0.0);
    assert!((out.time - 1.0).abs() < 1e-9);
}

#[test]
fn driven_resonator_gains_energy_from_rest() {
    let s = stepper();
    let on_resonance = Excitation {
        amplitude: 1.0,
        frequency_hz: 2.0,
        phase: 0.0,
    };
    let out = s
        .simulate(&config(), &ResonatorState::default(), &on_resonance, 0.001, 2_000)
        .unwrap();
    assert!(out.energy > 0.0);
}

#[test]
fn forward_euler_backend_is_composable_too() {
    let euler = DuffingFactory::new(IntegratorType::ForwardEuler, 4).unwrap();
    let s = ForcedOscillatorStepper::new(Arc::new(euler));
    let s0 = ResonatorState::at(0.1, 0.0);
    let both = s.simulate(&config(), &s0, &excitation(), 0.01, 2).unwrap();
    let first = s.simulate(&config(), &s0, &excitation(), 0.01, 1).unwrap();
    let second = s.simulate(&config(), &first, &excitation(), 0.01, 1).unwrap();
    assert_states_close(&both, &second);
}

proptest! {
    #[test]
    fn composability_holds_for_arbitrary_inputs(
        x0 in -1.0_f64..1.0,
        v0 in -1.0_f64..1.0,
        t0 in 0.0_f64..10.0,
        amplitude in 0.0_f64..5.0,
        drive_hz in 0.0_f64..5.0,
        drive_phase in -3.0_f64..3.0,
        dt in 1e-4_f64..1e-2,
        steps in 1_u32..20,
    ) {
        let s = stepper();
        let exc = Excitation { amplitude, frequency_hz: drive_hz, phase: drive_phase };
        let start = ResonatorState { time: t0, ..ResonatorState::at(x0, v0) };

        let whole = s.simulate(&config(), &start, &exc, dt, steps).unwrap();
        let mut chained = start;
        for _ in 0..steps {
            chained = s.simulate(&config(), &chained, &exc, dt, 1).unwrap();
        }

        let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
        prop_assert!(nearly_equal(whole.x, chained.x, tol));
        prop_assert!(nearly_equal(whole.v, chained.v, tol));
        prop_assert!(nearly_equal(whole.time, chained.time, tol));
    }
}
