use crate::config::MissCurve;
use crate::judgements::JudgementTally;

/// Misses beyond the free allowance of one per `tolerance_ratio` tiles.
pub fn excess_misses(tally: &JudgementTally, curve: &MissCurve) -> u64 {
    let allowance = tally.tiles() / curve.tolerance_ratio.max(1) as u64;
    tally.misses().saturating_sub(allowance)
}

/// Miss penalty multiplier for a tally.
///
/// A clean run (no early doubles at all) earns the bonus even when the
/// allowance would have absorbed misses.
pub fn miss_multiplier(tally: &JudgementTally, curve: &MissCurve) -> f64 {
    if tally.misses() == 0 {
        return curve.zero_miss_bonus;
    }
    excess_multiplier(excess_misses(tally, curve) as f64, curve)
}

/// The penalty curve over excess misses, without the clean-run bonus.
pub fn excess_multiplier(excess: f64, curve: &MissCurve) -> f64 {
    if excess <= 0.0 {
        1.0
    } else if excess <= curve.regime_start {
        1.0 - curve.deduc_start / 100.0
    } else if excess <= curve.turning_point() {
        ramp(excess, curve)
    } else if excess <= curve.regime_end {
        tail(excess, curve)
    } else {
        1.0 - curve.deduc_end / 100.0
    }
}

// Concave drop from the start deduction down to the turning point.
fn ramp(excess: f64, curve: &MissCurve) -> f64 {
    let tp = curve.turning_point();
    let k = ((excess - curve.regime_start) / (tp - curve.regime_start)).powf(curve.curve_power)
        * (curve.turning_deduction() - curve.deduc_start)
        / 100.0;
    1.0 - curve.deduc_start / 100.0 - k
}

// Mirrored approach from the turning point to the end deduction.
fn tail(excess: f64, curve: &MissCurve) -> f64 {
    let tp = curve.turning_point();
    let k = ((curve.regime_end - excess) / (curve.regime_end - tp)).powf(curve.curve_power)
        * (curve.deduc_end - curve.turning_deduction())
        / 100.0;
    1.0 + k - curve.deduc_end / 100.0
}
