use crate::consts::{DISPLAY_ACCURACY_DIGITS, PERFECT_ACCURACY_MULTIPLIER};
use crate::judgements::{JudgementTally, Tier};
use strum_macros::Display;

/// The two call sites of the accuracy helper: the percentage shown to the
/// player and the raw fraction fed into the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AccuracyMode {
    Display,
    Scoring,
}

/// Credit each tier earns toward accuracy. Late doubles count toward the
/// total but earn nothing.
pub const TIER_WEIGHTS: [(Tier, f64); 7] = [
    (Tier::EarlyDouble, 0.2),
    (Tier::EarlySingle, 0.4),
    (Tier::EPerfect, 0.75),
    (Tier::Perfect, 1.0),
    (Tier::LPerfect, 0.75),
    (Tier::LateSingle, 0.4),
    (Tier::LateDouble, 0.0),
];

/// Weighted accuracy in `[0, 1]`. An empty tally has no accuracy and
/// reports `0.0`.
pub fn accuracy_fraction(tally: &JudgementTally, mode: AccuracyMode) -> f64 {
    if tally.is_empty() {
        return 0.0;
    }
    let total = tally.total();

    let weighted: f64 = TIER_WEIGHTS
        .iter()
        .map(|&(tier, w)| tally.get(tier) as f64 * w)
        .sum();
    let raw = weighted / total as f64;

    match mode {
        AccuracyMode::Scoring => raw,
        AccuracyMode::Display => {
            let scale = 10f64.powi(DISPLAY_ACCURACY_DIGITS);
            (raw * scale).round() / scale
        }
    }
}

/// Percentage string for the live preview, e.g. `"97.35%"`.
pub fn format_accuracy(fraction: f64) -> String {
    let text = (fraction * 100.0).to_string();
    let clipped: String = text.chars().take(7).collect();
    format!("{}%", clipped)
}

/// Multiplier from the accuracy curve.
///
/// Breakpoints at 95, 99, 99.8 and 100 percent are taken verbatim from the
/// ranked formula; the 100% jump is intentional.
pub fn accuracy_multiplier(fraction: f64) -> f64 {
    let p = fraction * 100.0;

    if p < 95.0 {
        1.0
    } else if p < 99.0 {
        (p - 94.0).powf(1.6) / 12.1326 + 0.9176
    } else if p < 99.8 {
        (p - 97.0).powf(1.5484) - 0.9249
    } else if p < 100.0 {
        (p - 99.0) * 5.0
    } else {
        PERFECT_ACCURACY_MULTIPLIER
    }
}
