use passforge::config::ScoringParams;
use passforge::scorer::speed::SpeedRegime;
use passforge::scorer::{compute_score_v2, DifficultyParameters, PassAttempt, Scorer};
use passforge::{JudgementTally, PassForgeError, Tier};
use rstest::rstest;

const EPS: f64 = 1e-9;

fn perfect_attempt(speed: Option<f64>, no_hold: bool) -> PassAttempt {
    PassAttempt::new(JudgementTally::all_perfect(100), speed, no_hold).unwrap()
}

fn level(base: f64, code: i64) -> DifficultyParameters {
    DifficultyParameters::new(base, code).unwrap()
}

#[test]
fn test_perfect_clean_run() {
    let score = compute_score_v2(&perfect_attempt(Some(1.0), false), &level(1000.0, 18));
    assert!((score - 6600.0).abs() < EPS, "Score was {}", score);
}

#[test]
fn test_no_hold_tap_takes_ten_percent() {
    let score = compute_score_v2(&perfect_attempt(Some(1.0), true), &level(1000.0, 18));
    assert!((score - 5940.0).abs() < EPS, "Score was {}", score);
}

#[test]
fn test_absent_speed_matches_unit_speed() {
    let diff = level(1000.0, 18);
    assert_eq!(
        compute_score_v2(&perfect_attempt(None, false), &diff),
        compute_score_v2(&perfect_attempt(Some(1.0), false), &diff)
    );
}

#[test]
fn test_speed_scales_linearly() {
    let diff = level(1000.0, 18);
    let normal = compute_score_v2(&perfect_attempt(Some(1.0), false), &diff);
    let trough = compute_score_v2(&perfect_attempt(Some(1.2), false), &diff);
    assert!((trough - normal * 0.75).abs() < EPS);
}

#[rstest]
#[case(1.0, 6600.0)]
#[case(1.4, 6600.0)]
#[case(1.6, 6732.0)] // 6600 * 1.02
#[case(0.9, 0.0)]
#[case(2.0, 0.0)]
fn test_speed_on_perfect_run(#[case] speed: f64, #[case] expected: f64) {
    let score = compute_score_v2(&perfect_attempt(Some(speed), false), &level(1000.0, 18));
    assert!(
        (score - expected).abs() < 1e-6,
        "Score at {}x was {}, expected {}",
        speed,
        score,
        expected
    );
}

#[test]
fn test_misses_compose_with_accuracy() {
    // 2 early doubles, 98 perfects: accuracy (0.4 + 98) / 100 = 0.984
    let tally = JudgementTally::all_perfect(98).with(Tier::EarlyDouble, 2);
    let attempt = PassAttempt::new(tally, None, false).unwrap();
    let diff = level(500.0, 18);

    let details = Scorer::default().score_details(&attempt, &diff);
    assert!((details.accuracy - 0.984).abs() < EPS);
    assert_eq!(details.excess_misses, 2);
    assert!((details.miss_multiplier - 0.8786885138281594).abs() < EPS);

    let expected_raw = 500.0 * details.accuracy_multiplier;
    assert!((details.raw_score - expected_raw).abs() < EPS);
    assert!((details.score_v2 - expected_raw * details.miss_multiplier).abs() < EPS);
}

// --- DESERT BUS ---
#[test]
fn test_desert_bus_floor() {
    let scorer = Scorer::default();
    let diff = level(0.5, 64);
    let attempt = PassAttempt::new(JudgementTally::all_perfect(10), Some(1.9), false).unwrap();

    let details = scorer.score_details(&attempt, &diff);
    assert!(details.is_desert_bus);
    assert!(details.floor_applied);
    assert_eq!(details.raw_score, 1.0);
    assert_eq!(details.speed_regime, SpeedRegime::DesertBusFast);
}

#[test]
fn test_desert_bus_floor_covers_negative_multiplier() {
    let scorer = Scorer::default();
    let diff = level(2000.0, 64);
    let attempt = PassAttempt::new(JudgementTally::all_perfect(10), Some(3.0), false).unwrap();
    assert_eq!(scorer.raw_score(&attempt, &diff), 1.0);
}

#[test]
fn test_desert_bus_slowed_pass_is_floored() {
    let scorer = Scorer::default();
    let diff = level(2000.0, 64);
    let attempt = PassAttempt::new(JudgementTally::all_perfect(10), Some(0.8), false).unwrap();
    let details = scorer.score_details(&attempt, &diff);
    assert_eq!(details.speed_regime, SpeedRegime::DesertBusSlow);
    assert_eq!(details.speed_multiplier, 0.0);
    assert_eq!(details.raw_score, 1.0);
}

#[test]
fn test_desert_bus_regular_score_above_floor() {
    let scorer = Scorer::default();
    let diff = level(1000.0, 64);
    let attempt = perfect_attempt(Some(1.5), false);
    let details = scorer.score_details(&attempt, &diff);
    assert!(!details.floor_applied);
    assert!((details.raw_score - 3000.0).abs() < EPS);
    assert!((details.score_v2 - 3300.0).abs() < EPS);
}

#[test]
fn test_regular_level_has_no_floor() {
    let attempt = perfect_attempt(Some(0.9), false);
    let details = Scorer::default().score_details(&attempt, &level(1000.0, 63));
    assert!(!details.is_desert_bus);
    assert_eq!(details.raw_score, 0.0);
}

#[test]
fn test_custom_desert_bus_code() {
    let params = ScoringParams {
        desert_bus_diff_code: 99,
        ..Default::default()
    };
    let scorer = Scorer::new(params).unwrap();
    assert!(scorer.is_desert_bus(&level(10.0, 99)));
    assert!(!scorer.is_desert_bus(&level(10.0, 64)));
}

// --- IDEMPOTENCE ---
#[test]
fn test_repeated_calls_are_bit_identical() {
    let tally = JudgementTally::from_array([7, 31, 140, 2900, 120, 25, 3]);
    let attempt = PassAttempt::new(tally, Some(1.37), true).unwrap();
    let diff = level(812.5, 18);

    let first = compute_score_v2(&attempt, &diff);
    for _ in 0..100 {
        assert_eq!(compute_score_v2(&attempt, &diff).to_bits(), first.to_bits());
    }
}

// --- CHECKED ENTRY POINT ---
#[rstest]
#[case(Some(0.0))]
#[case(Some(-1.0))]
#[case(Some(f64::NAN))]
#[case(Some(f64::INFINITY))]
fn test_rejects_bad_speed(#[case] speed: Option<f64>) {
    let res = PassAttempt::new(JudgementTally::all_perfect(1), speed, false);
    assert!(matches!(res, Err(PassForgeError::InvalidSpeed(_))));
}

#[rstest]
#[case(-1.0)]
#[case(f64::NAN)]
fn test_rejects_bad_base_score(#[case] base: f64) {
    let res = DifficultyParameters::new(base, 18);
    assert!(matches!(res, Err(PassForgeError::InvalidDifficulty(_))));
}

#[test]
fn test_try_score_details_checks_raw_structs() {
    let attempt = PassAttempt {
        judgements: JudgementTally::all_perfect(1),
        speed: Some(-2.0),
        is_no_hold_tap: false,
    };
    let res = Scorer::default().try_score_details(&attempt, &level(100.0, 18));
    assert!(matches!(res, Err(PassForgeError::InvalidSpeed(_))));
}

#[test]
fn test_empty_tally_scores() {
    // No hits: zero accuracy and no misses, so multiplier 1 and bonus 1.1.
    let attempt = PassAttempt::new(JudgementTally::default(), None, false).unwrap();
    let score = compute_score_v2(&attempt, &level(100.0, 18));
    assert!((score - 110.0).abs() < EPS);
}
