use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::warn;

/// Named pieces of the speed curve, in ascending rate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpeedRegime {
    /// No rate modifier (absent or exactly 1.0).
    Unmodified,
    /// Desert-Bus level sped up: linear falloff `2 - speed`.
    DesertBusFast,
    /// Desert-Bus level slowed down: scores nothing.
    DesertBusSlow,
    /// Slowed playback on a regular level: scores nothing.
    Slowed,
    EaseIn,
    Trough,
    RecoveryLow,
    RecoveryHigh,
    Plateau,
    BoostLow,
    BoostHigh,
    /// 2x and above: scores nothing.
    Overspeed,
}

impl SpeedRegime {
    pub fn classify(speed: Option<f64>, is_desert_bus: bool) -> Self {
        let s = match speed {
            None => return Self::Unmodified,
            Some(s) if s == 1.0 => return Self::Unmodified,
            Some(s) => s,
        };

        if is_desert_bus {
            return if s > 1.0 {
                Self::DesertBusFast
            } else {
                Self::DesertBusSlow
            };
        }

        if s < 1.0 {
            Self::Slowed
        } else if s < 1.1 {
            Self::EaseIn
        } else if s < 1.2 {
            Self::Trough
        } else if s < 1.25 {
            Self::RecoveryLow
        } else if s < 1.3 {
            Self::RecoveryHigh
        } else if s < 1.5 {
            Self::Plateau
        } else if s < 1.75 {
            Self::BoostLow
        } else if s < 2.0 {
            Self::BoostHigh
        } else {
            Self::Overspeed
        }
    }

    /// Evaluates this piece of the curve at `speed` (absent means 1.0).
    pub fn evaluate(self, speed: Option<f64>) -> f64 {
        let s = speed.unwrap_or(1.0);
        match self {
            Self::Unmodified => 1.0,
            Self::DesertBusFast => 2.0 - s,
            Self::DesertBusSlow | Self::Slowed | Self::Overspeed => 0.0,
            Self::EaseIn => 25.0 * (s - 1.1).powi(2) + 0.75,
            Self::Trough => 0.75,
            Self::RecoveryLow => 50.0 * (s - 1.2).powi(2) + 0.75,
            Self::RecoveryHigh => -50.0 * (s - 1.3).powi(2) + 1.0,
            Self::Plateau => 1.0,
            Self::BoostLow => 2.0 * (s - 1.5).powi(2) + 1.0,
            Self::BoostHigh => -2.0 * (s - 2.0).powi(2) + 1.25,
        }
    }
}

/// Speed multiplier for a pass.
pub fn speed_multiplier(speed: Option<f64>, is_desert_bus: bool) -> f64 {
    let regime = SpeedRegime::classify(speed, is_desert_bus);
    if regime == SpeedRegime::DesertBusSlow {
        warn!(
            "Desert-Bus pass slowed to {:?}; applying the slowed-playback multiplier of 0",
            speed
        );
    }
    regime.evaluate(speed)
}
