use crate::consts::{
    CURVE_POWER, DEDUC_END, DEDUC_START, DESERT_BUS_DIFF_CODE, DESERT_BUS_SCORE_FLOOR,
    NO_HOLD_TAP_FACTOR, REGIME_END, REGIME_START, TOLERANCE_RATIO, ZERO_MISS_BONUS,
};
use crate::{PassForgeError, SfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Tunables of the scoring engine. The defaults are the ranked values;
/// client previews and the server must run with identical parameters.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    #[command(flatten)]
    pub miss: MissCurve,

    #[arg(long, default_value_t = NO_HOLD_TAP_FACTOR)]
    pub no_hold_tap_factor: f64,

    #[arg(long, default_value_t = DESERT_BUS_DIFF_CODE)]
    pub desert_bus_diff_code: i64,
    #[arg(long, default_value_t = DESERT_BUS_SCORE_FLOOR)]
    pub desert_bus_floor: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            miss: MissCurve::default(),
            no_hold_tap_factor: NO_HOLD_TAP_FACTOR,
            desert_bus_diff_code: DESERT_BUS_DIFF_CODE,
            desert_bus_floor: DESERT_BUS_SCORE_FLOOR,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissCurve {
    // === TOLERANCE ===
    #[arg(long, default_value_t = TOLERANCE_RATIO)]
    pub tolerance_ratio: u32,
    #[arg(long, default_value_t = ZERO_MISS_BONUS)]
    pub zero_miss_bonus: f64,

    // === REGIME (excess misses) ===
    #[arg(long, default_value_t = REGIME_START)]
    pub regime_start: f64,
    #[arg(long, default_value_t = REGIME_END)]
    pub regime_end: f64,

    // === DEDUCTION (percent) ===
    #[arg(long, default_value_t = DEDUC_START)]
    pub deduc_start: f64,
    #[arg(long, default_value_t = DEDUC_END)]
    pub deduc_end: f64,

    #[arg(long, default_value_t = CURVE_POWER)]
    pub curve_power: f64,
}

impl Default for MissCurve {
    fn default() -> Self {
        Self {
            tolerance_ratio: TOLERANCE_RATIO,
            zero_miss_bonus: ZERO_MISS_BONUS,
            regime_start: REGIME_START,
            regime_end: REGIME_END,
            deduc_start: DEDUC_START,
            deduc_end: DEDUC_END,
            curve_power: CURVE_POWER,
        }
    }
}

impl MissCurve {
    /// Midpoint of the regime, where the two curve halves meet.
    #[inline(always)]
    pub fn turning_point(&self) -> f64 {
        (self.regime_start + self.regime_end) / 2.0
    }

    /// Deduction (percent) at the turning point.
    #[inline(always)]
    pub fn turning_deduction(&self) -> f64 {
        (self.deduc_start + self.deduc_end) / 2.0
    }
}

impl ScoringParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let path = path.as_ref();
        info!("⚖️  Loading scoring parameters from {}", path.display());
        let content = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> SfResult<()> {
        let m = &self.miss;
        if m.tolerance_ratio == 0 {
            return Err(PassForgeError::Config(
                "tolerance_ratio must be at least 1".to_string(),
            ));
        }
        if !(m.regime_start >= 0.0 && m.regime_start < m.regime_end) {
            return Err(PassForgeError::Config(format!(
                "miss regime must satisfy 0 <= start < end (got {} .. {})",
                m.regime_start, m.regime_end
            )));
        }
        if !(0.0..=100.0).contains(&m.deduc_start)
            || !(0.0..=100.0).contains(&m.deduc_end)
            || m.deduc_start > m.deduc_end
        {
            return Err(PassForgeError::Config(format!(
                "deductions must satisfy 0 <= start <= end <= 100 (got {} .. {})",
                m.deduc_start, m.deduc_end
            )));
        }
        if !(m.curve_power.is_finite() && m.curve_power > 0.0) {
            return Err(PassForgeError::Config(format!(
                "curve_power must be positive (got {})",
                m.curve_power
            )));
        }
        for (name, v) in [
            ("zero_miss_bonus", m.zero_miss_bonus),
            ("no_hold_tap_factor", self.no_hold_tap_factor),
            ("desert_bus_floor", self.desert_bus_floor),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(PassForgeError::Config(format!(
                    "{} must be a non-negative number (got {})",
                    name, v
                )));
            }
        }
        Ok(())
    }

    /// Overlays only the flags the user actually typed, keeping file values
    /// for everything left at its clap default.
    pub fn merge_from_cli(&mut self, cli: &ScoringParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($($field:ident).+, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$($field).+ = cli.$($field).+;
                }
            };
        }

        update_if_present!(miss.tolerance_ratio, "tolerance_ratio");
        update_if_present!(miss.zero_miss_bonus, "zero_miss_bonus");
        update_if_present!(miss.regime_start, "regime_start");
        update_if_present!(miss.regime_end, "regime_end");
        update_if_present!(miss.deduc_start, "deduc_start");
        update_if_present!(miss.deduc_end, "deduc_end");
        update_if_present!(miss.curve_power, "curve_power");

        update_if_present!(no_hold_tap_factor, "no_hold_tap_factor");
        update_if_present!(desert_bus_diff_code, "desert_bus_diff_code");
        update_if_present!(desert_bus_floor, "desert_bus_floor");
    }
}
