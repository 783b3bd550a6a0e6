pub mod accuracy;
pub mod miss;
pub mod speed;
pub mod types;

use self::accuracy::{accuracy_fraction, accuracy_multiplier, AccuracyMode};
use self::speed::SpeedRegime;
pub use self::types::{DifficultyParameters, PassAttempt, ScoreDetails};
use crate::config::ScoringParams;
use crate::SfResult;
use tracing::debug;

/// The ScoreV2 engine. Stateless apart from its parameters, so one instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    pub params: ScoringParams,
}

impl Scorer {
    pub fn new(params: ScoringParams) -> SfResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn is_desert_bus(&self, diff: &DifficultyParameters) -> bool {
        diff.legacy_diff_code == self.params.desert_bus_diff_code
    }

    /// Score before the miss penalty: base × accuracy × speed, floored on
    /// Desert-Bus levels.
    pub fn raw_score(&self, attempt: &PassAttempt, diff: &DifficultyParameters) -> f64 {
        self.score_details(attempt, diff).raw_score
    }

    /// Miss multiplier including the no-hold-tap reduction.
    pub fn miss_multiplier(&self, attempt: &PassAttempt) -> f64 {
        let mut mtp = miss::miss_multiplier(&attempt.judgements, &self.params.miss);
        if attempt.is_no_hold_tap {
            mtp *= self.params.no_hold_tap_factor;
        }
        mtp
    }

    pub fn score_v2(&self, attempt: &PassAttempt, diff: &DifficultyParameters) -> f64 {
        self.score_details(attempt, diff).score_v2
    }

    /// Full breakdown of one computation. Inputs are trusted; use
    /// [`Scorer::try_score_details`] on unchecked data.
    pub fn score_details(&self, attempt: &PassAttempt, diff: &DifficultyParameters) -> ScoreDetails {
        let accuracy = accuracy_fraction(&attempt.judgements, AccuracyMode::Scoring);
        let xacc = accuracy_multiplier(accuracy);

        let is_desert_bus = self.is_desert_bus(diff);
        let speed_regime = SpeedRegime::classify(attempt.speed, is_desert_bus);
        let speed_mtp = speed::speed_multiplier(attempt.speed, is_desert_bus);

        let unfloored = diff.base_score * xacc * speed_mtp;
        let (raw_score, floor_applied) = if is_desert_bus {
            let floored = unfloored.max(self.params.desert_bus_floor);
            (floored, unfloored < self.params.desert_bus_floor)
        } else {
            (unfloored, false)
        };
        if floor_applied {
            debug!(
                "Desert-Bus score {:.4} raised to floor {}",
                unfloored, self.params.desert_bus_floor
            );
        }

        let excess_misses = miss::excess_misses(&attempt.judgements, &self.params.miss);
        let miss_multiplier = self.miss_multiplier(attempt);
        let score_v2 = raw_score * miss_multiplier;

        debug!(
            accuracy,
            xacc,
            speed_mtp,
            miss_multiplier,
            raw_score,
            score_v2,
            "Scored pass ({})",
            speed_regime
        );

        ScoreDetails {
            accuracy,
            accuracy_multiplier: xacc,
            speed_regime,
            speed_multiplier: speed_mtp,
            excess_misses,
            miss_multiplier,
            is_desert_bus,
            floor_applied,
            raw_score,
            score_v2,
        }
    }

    /// Checks both inputs before scoring; the authoritative entry point.
    pub fn try_score_details(
        &self,
        attempt: &PassAttempt,
        diff: &DifficultyParameters,
    ) -> SfResult<ScoreDetails> {
        attempt.check()?;
        diff.check()?;
        Ok(self.score_details(attempt, diff))
    }
}

/// ScoreV2 with the ranked parameters.
pub fn compute_score_v2(attempt: &PassAttempt, diff: &DifficultyParameters) -> f64 {
    Scorer::default().score_v2(attempt, diff)
}
