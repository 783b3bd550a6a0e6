use crate::judgements::JudgementTally;
use crate::scorer::speed::SpeedRegime;
use crate::{PassForgeError, SfResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyParameters {
    /// Points for a perfect play at normal speed.
    pub base_score: f64,
    pub legacy_diff_code: i64,
}

impl DifficultyParameters {
    pub fn new(base_score: f64, legacy_diff_code: i64) -> SfResult<Self> {
        let diff = Self {
            base_score,
            legacy_diff_code,
        };
        diff.check()?;
        Ok(diff)
    }

    pub fn check(&self) -> SfResult<()> {
        if !(self.base_score.is_finite() && self.base_score >= 0.0) {
            return Err(PassForgeError::InvalidDifficulty(format!(
                "base score must be a non-negative number, got {}",
                self.base_score
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassAttempt {
    pub judgements: JudgementTally,
    /// Playback rate; `None` is unmodified playback.
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub is_no_hold_tap: bool,
}

impl PassAttempt {
    pub fn new(
        judgements: JudgementTally,
        speed: Option<f64>,
        is_no_hold_tap: bool,
    ) -> SfResult<Self> {
        let attempt = Self {
            judgements,
            speed,
            is_no_hold_tap,
        };
        attempt.check()?;
        Ok(attempt)
    }

    pub fn check(&self) -> SfResult<()> {
        if let Some(s) = self.speed {
            if !(s.is_finite() && s > 0.0) {
                return Err(PassForgeError::InvalidSpeed(format!(
                    "speed must be a positive number, got {}",
                    s
                )));
            }
        }
        Ok(())
    }
}

/// Every intermediate value of one ScoreV2 computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub accuracy: f64,
    pub accuracy_multiplier: f64,

    pub speed_regime: SpeedRegime,
    pub speed_multiplier: f64,

    pub excess_misses: u64,
    /// Miss multiplier after the no-hold-tap factor.
    pub miss_multiplier: f64,

    pub is_desert_bus: bool,
    pub floor_applied: bool,

    pub raw_score: f64,
    pub score_v2: f64,
}

