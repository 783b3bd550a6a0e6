use passforge::scorer::speed::{speed_multiplier, SpeedRegime};
use rstest::rstest;

const EPS: f64 = 1e-9;

// --- STANDARD MODE ---
#[rstest]
#[case(None, 1.0)] // Unmodified
#[case(Some(1.0), 1.0)]
#[case(Some(0.5), 0.0)] // Slowed
#[case(Some(0.999), 0.0)]
#[case(Some(1.05), 0.8125)] // 25(s - 1.1)^2 + 0.75
#[case(Some(1.15), 0.75)] // Trough
#[case(Some(1.2), 0.75)]
#[case(Some(1.22), 0.77)] // 50(s - 1.2)^2 + 0.75
#[case(Some(1.27), 0.955)] // -50(s - 1.3)^2 + 1
#[case(Some(1.4), 1.0)] // Plateau
#[case(Some(1.6), 1.02)] // 2(s - 1.5)^2 + 1
#[case(Some(1.9), 1.23)] // -2(s - 2)^2 + 1.25
#[case(Some(2.0), 0.0)] // Overspeed
#[case(Some(3.5), 0.0)]
fn test_standard_speed_multiplier(#[case] speed: Option<f64>, #[case] expected: f64) {
    let m = speed_multiplier(speed, false);
    assert!(
        (m - expected).abs() < EPS,
        "Speed multiplier at {:?} was {}, expected {}",
        speed,
        m,
        expected
    );
}

#[rstest]
#[case(1.1, SpeedRegime::EaseIn)]
#[case(1.2, SpeedRegime::Trough)]
#[case(1.25, SpeedRegime::RecoveryLow)]
#[case(1.3, SpeedRegime::RecoveryHigh)]
#[case(1.5, SpeedRegime::Plateau)]
#[case(1.75, SpeedRegime::BoostLow)]
fn test_continuous_at_breakpoint(#[case] breakpoint: f64, #[case] left: SpeedRegime) {
    // The piece to the left of the breakpoint, evaluated at the breakpoint,
    // must agree with the piece that owns it.
    let left_limit = left.evaluate(Some(breakpoint));
    let at = speed_multiplier(Some(breakpoint), false);
    assert_ne!(SpeedRegime::classify(Some(breakpoint), false), left);
    assert!(
        (left_limit - at).abs() < EPS,
        "Discontinuity at {}: left {} vs {}",
        breakpoint,
        left_limit,
        at
    );
}

#[test]
fn test_continuous_leaving_unmodified() {
    let left = SpeedRegime::EaseIn.evaluate(Some(1.0));
    assert!((left - speed_multiplier(Some(1.0), false)).abs() < EPS);
}

#[test]
fn test_overspeed_cliff_at_two() {
    // The ranked curve peaks at 1.25 just below 2x and drops to zero at 2x.
    let left = SpeedRegime::BoostHigh.evaluate(Some(2.0));
    assert!((left - 1.25).abs() < EPS);
    assert_eq!(speed_multiplier(Some(2.0), false), 0.0);
}

#[rstest]
#[case(None, SpeedRegime::Unmodified)]
#[case(Some(1.0), SpeedRegime::Unmodified)]
#[case(Some(0.8), SpeedRegime::Slowed)]
#[case(Some(1.05), SpeedRegime::EaseIn)]
#[case(Some(1.1), SpeedRegime::Trough)]
#[case(Some(1.2), SpeedRegime::RecoveryLow)]
#[case(Some(1.25), SpeedRegime::RecoveryHigh)]
#[case(Some(1.3), SpeedRegime::Plateau)]
#[case(Some(1.5), SpeedRegime::BoostLow)]
#[case(Some(1.75), SpeedRegime::BoostHigh)]
#[case(Some(2.0), SpeedRegime::Overspeed)]
fn test_classify_standard(#[case] speed: Option<f64>, #[case] expected: SpeedRegime) {
    assert_eq!(SpeedRegime::classify(speed, false), expected);
}

// --- DESERT-BUS MODE ---
#[rstest]
#[case(None, 1.0)]
#[case(Some(1.0), 1.0)]
#[case(Some(1.2), 0.8)] // 2 - s
#[case(Some(1.5), 0.5)]
#[case(Some(2.0), 0.0)]
#[case(Some(2.5), -0.5)] // Unclamped; the raw score floor absorbs it
#[case(Some(0.9), 0.0)] // Slowed Desert-Bus scores nothing
#[case(Some(0.5), 0.0)]
fn test_desert_bus_speed_multiplier(#[case] speed: Option<f64>, #[case] expected: f64) {
    let m = speed_multiplier(speed, true);
    assert!(
        (m - expected).abs() < EPS,
        "Desert-Bus multiplier at {:?} was {}, expected {}",
        speed,
        m,
        expected
    );
}

#[test]
fn test_desert_bus_never_uses_standard_pieces() {
    for s in [0.5, 0.99, 1.01, 1.15, 1.4, 1.9, 3.0] {
        let regime = SpeedRegime::classify(Some(s), true);
        assert!(
            matches!(
                regime,
                SpeedRegime::DesertBusFast | SpeedRegime::DesertBusSlow
            ),
            "Speed {} classified as {}",
            s,
            regime
        );
    }
}

#[test]
fn test_regime_names() {
    assert_eq!(SpeedRegime::BoostHigh.to_string(), "boost_high");
    assert_eq!(SpeedRegime::DesertBusSlow.to_string(), "desert_bus_slow");
}
