//! Field-level checks applied to raw submission strings before they reach
//! the scoring engine.

use crate::{PassForgeError, SfResult};
use once_cell::sync::Lazy;
use regex::Regex;

// PGU notation: a letter followed by 1..=20.
const PGU: &str = r"[PGUpgu]([1-9]|1[0-9]|20)";
const PGU_EXTENDED: &str = r"[PGUpgu]([1-9]|1[0-9]|20)((-|~)([1-9]|1[0-9]|20))?";
// Legacy numeric notation: 1-17, 18/19 with optional plus, 20.x, 21.0-21.4.
const LEGACY: &str = r"([1-9]|1[0-7])|(1[8-9]\+?)|(20(\.[0-9])?\+?)|(21(\.[0-4])?\+?)";
const Q_DIFF: &str = r"[qQ][2-4]\+?";
const EXTRAS: &str = r"-2|-21|Marathon|MA|U";

static SPEED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^$|^1(\.[0-9]+)?$").unwrap());

static COUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

static RATING_SINGLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^$|^({PGU})$|^({EXTRAS})$|^({Q_DIFF})$|^({LEGACY})$"
    ))
    .unwrap()
});

static RATING_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^({PGU})(~|-)({PGU})$|^({Q_DIFF})(~|-)({Q_DIFF})$|^({LEGACY})(~|-)({LEGACY})$|^({PGU_EXTENDED})$"
    ))
    .unwrap()
});

/// Empty (unmodified playback), `1` or `1.x`.
pub fn is_valid_speed(value: &str) -> bool {
    SPEED_RE.is_match(value)
}

/// Plain non-negative decimal count.
pub fn is_valid_count(value: &str) -> bool {
    COUNT_RE.is_match(value)
}

/// Difficulty-feeling rating in PGU or legacy notation. Ranges such as
/// `G5~G7`, `P12-14` or `18+~19` are accepted only when `allow_range` is set.
pub fn is_valid_feeling_rating(value: &str, allow_range: bool) -> bool {
    RATING_SINGLE_RE.is_match(value) || (allow_range && RATING_RANGE_RE.is_match(value))
}

/// Converts the raw speed field into the engine's optional rate.
pub fn parse_speed(value: &str) -> SfResult<Option<f64>> {
    let value = value.trim();
    if !is_valid_speed(value) {
        return Err(PassForgeError::InvalidSpeed(format!(
            "'{}' is not a playback rate of the form 1 or 1.x",
            value
        )));
    }
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|e| PassForgeError::InvalidSpeed(format!("'{}': {}", value, e)))
}
