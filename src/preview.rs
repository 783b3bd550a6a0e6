//! Live score preview for a half-filled submission form.
//!
//! Runs on every edit, so it never fails: anything that keeps the score from
//! being computed maps to a "not enough information" state instead.

use crate::judgements::JudgementTally;
use crate::scorer::accuracy::{accuracy_fraction, format_accuracy, AccuracyMode};
use crate::scorer::{DifficultyParameters, PassAttempt, Scorer};
use crate::validate::parse_speed;
use crate::PassForgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Raw form fields as typed by the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassForm {
    pub level_id: String,
    pub speed: String,
    /// Judgement fields in tier order.
    pub judgements: [String; 7],
    pub is_no_hold_tap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "score", rename_all = "camelCase")]
pub enum Preview {
    Score(f64),
    /// No level chosen yet.
    NeedLevel,
    /// A judgement field is empty or not a count.
    NeedJudgements,
    /// Some other field (speed) is unusable.
    NeedInfo,
    /// A level id is set but its difficulty data has not arrived.
    LevelNotLoaded,
}

impl Preview {
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Score(s) => Some(*s),
            _ => None,
        }
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(s) => write!(f, "{:.2}", s),
            Self::NeedLevel => write!(f, "Level ID needed"),
            Self::NeedJudgements => write!(f, "Judgements needed"),
            Self::NeedInfo => write!(f, "More information needed"),
            Self::LevelNotLoaded => write!(f, "Level information unavailable"),
        }
    }
}

/// Previews ScoreV2 for the current form state.
pub fn preview(form: &PassForm, level: Option<&DifficultyParameters>, scorer: &Scorer) -> Preview {
    if form.level_id.trim().is_empty() {
        return Preview::NeedLevel;
    }

    let judgements = match JudgementTally::parse_fields(&form.judgements) {
        Ok(j) => j,
        Err(e) => {
            debug!("Preview unavailable: {}", e);
            return Preview::NeedJudgements;
        }
    };

    let attempt = match parse_speed(&form.speed)
        .and_then(|speed| PassAttempt::new(judgements, speed, form.is_no_hold_tap))
    {
        Ok(a) => a,
        Err(e) => {
            debug!("Preview unavailable: {}", e);
            return Preview::NeedInfo;
        }
    };

    match level {
        Some(diff) => match scorer.try_score_details(&attempt, diff) {
            Ok(details) => Preview::Score(details.score_v2),
            Err(PassForgeError::InvalidDifficulty(msg)) => {
                debug!("Preview unavailable: {}", msg);
                Preview::LevelNotLoaded
            }
            Err(e) => {
                debug!("Preview unavailable: {}", e);
                Preview::NeedInfo
            }
        },
        None => Preview::LevelNotLoaded,
    }
}

/// Accuracy text shown next to the judgement fields, or `None` while any
/// judgement is missing or malformed.
pub fn accuracy_preview(form: &PassForm) -> Option<String> {
    let judgements = JudgementTally::parse_fields(&form.judgements).ok()?;
    Some(format_accuracy(accuracy_fraction(
        &judgements,
        AccuracyMode::Display,
    )))
}
