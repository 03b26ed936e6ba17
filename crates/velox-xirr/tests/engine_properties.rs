//! Property and sensitivity tests for the XIRR engine.

use proptest::prelude::*;

use velox_core::Date;
use velox_xirr::{XirrConfig, XirrEngine};

const SECONDS_PER_DAY: i64 = 86_400;

fn xirr_ts(cashflows: &[(f64, i64)], config: XirrConfig) -> f64 {
    XirrEngine::with_config(config)
        .calculate_from_timestamps(cashflows)
        .unwrap()
}

fn sample_series() -> Vec<(f64, Date)> {
    vec![
        (-1000.0, Date::from_ymd(1985, 1, 1).unwrap()),
        (600.0, Date::from_ymd(1990, 1, 1).unwrap()),
        (6000.0, Date::from_ymd(1995, 1, 1).unwrap()),
    ]
}

// ============================================================================
// Sensitivity to configuration
// ============================================================================

#[test]
fn starved_iteration_budget_flips_to_nan() {
    let series = sample_series();

    let generous = XirrEngine::new().calculate(&series).unwrap();
    assert!(generous.is_finite());

    let starved = XirrEngine::with_config(XirrConfig::default().with_max_iterations(2))
        .calculate(&series)
        .unwrap();
    assert!(starved.is_nan());
}

#[test]
fn unreachable_tolerance_flips_to_nan() {
    // Root pinned just above -100%, where the NPV gradient is so steep
    // that no probed rate can land on an exact zero
    let series = vec![
        (-1000.0, Date::from_ymd(1985, 1, 1).unwrap()),
        (383.325, Date::from_ymd(1985, 1, 20).unwrap()),
    ];

    let sane = XirrConfig::default()
        .with_tolerance(1e-6)
        .with_max_iterations(50);
    let rate = XirrEngine::with_config(sane).calculate(&series).unwrap();
    assert!(rate.is_finite());

    // 1e-20 sits below f64 resolution at this root; the same budget must
    // give up rather than spin
    let unreachable = XirrConfig::default()
        .with_tolerance(1e-20)
        .with_max_iterations(50);
    let rate = XirrEngine::with_config(unreachable)
        .calculate(&series)
        .unwrap();
    assert!(rate.is_nan());
}

#[test]
fn loose_tolerance_stays_within_its_band() {
    let series = sample_series();

    let tight = XirrEngine::with_config(XirrConfig::default().with_tolerance(1e-9))
        .calculate(&series)
        .unwrap();
    let loose = XirrEngine::with_config(XirrConfig::default().with_tolerance(1e-3))
        .calculate(&series)
        .unwrap();

    assert!(tight.is_finite());
    assert!(loose.is_finite());
    assert!((loose - tight).abs() < 1e-2);
}

// ============================================================================
// Structural properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Zero-amount flows never change the result, wherever they land.
    #[test]
    fn zero_amount_flows_are_neutral(
        flows in prop::collection::vec((-1e6..1e6f64, 0i64..3650), 2..8),
        zero_days in prop::collection::vec(0i64..3650, 1..4),
    ) {
        // Pin the first flow to day zero so inserted zeros never move the
        // series origin.
        let mut base: Vec<(f64, i64)> = vec![(flows[0].0, 0)];
        base.extend(
            flows[1..]
                .iter()
                .map(|&(amount, day)| (amount, day * SECONDS_PER_DAY)),
        );

        let mut padded = base.clone();
        padded.extend(zero_days.iter().map(|&day| (0.0, day * SECONDS_PER_DAY)));

        let plain = xirr_ts(&base, XirrConfig::default());
        let with_zeros = xirr_ts(&padded, XirrConfig::default());

        prop_assert_eq!(plain.to_bits(), with_zeros.to_bits());
    }

    /// Negating both flows of a two-flow series leaves the rate unchanged.
    #[test]
    fn two_flow_sign_flip_keeps_the_rate(
        outlay in 1.0..1e6f64,
        payoff in 1.0..1e6f64,
        days in 30i64..7300,
    ) {
        let forward = xirr_ts(
            &[(outlay, 0), (-payoff, days * SECONDS_PER_DAY)],
            XirrConfig::default(),
        );
        let flipped = xirr_ts(
            &[(-outlay, 0), (payoff, days * SECONDS_PER_DAY)],
            XirrConfig::default(),
        );

        // The NPV of one series is the exact negation of the other, so the
        // solvers walk identical trajectories.
        prop_assert_eq!(forward.to_bits(), flipped.to_bits());
    }
}
