use crate::consts::TIER_COUNT;
use crate::validate::is_valid_count;
use crate::{PassForgeError, SfResult};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Timing buckets, ordered from worst-early to worst-late.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    EarlyDouble,
    EarlySingle,
    EPerfect,
    Perfect,
    LPerfect,
    LateSingle,
    LateDouble,
}

impl Tier {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Judgement counts for one pass.
///
/// Slot 0 (`EarlyDouble`) doubles as the miss count for the miss penalty
/// curve; every other slot counts as a hit tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; TIER_COUNT]", into = "[u32; TIER_COUNT]")]
pub struct JudgementTally {
    counts: [u32; TIER_COUNT],
}

impl From<[u32; TIER_COUNT]> for JudgementTally {
    fn from(counts: [u32; TIER_COUNT]) -> Self {
        Self { counts }
    }
}

impl From<JudgementTally> for [u32; TIER_COUNT] {
    fn from(tally: JudgementTally) -> Self {
        tally.counts
    }
}

impl JudgementTally {
    pub fn from_array(counts: [u32; TIER_COUNT]) -> Self {
        Self { counts }
    }

    /// Tally with only `perfect` hits.
    pub fn all_perfect(count: u32) -> Self {
        let mut counts = [0; TIER_COUNT];
        counts[Tier::Perfect.index()] = count;
        Self { counts }
    }

    pub fn with(mut self, tier: Tier, count: u32) -> Self {
        self.counts[tier.index()] = count;
        self
    }

    #[inline(always)]
    pub fn get(&self, tier: Tier) -> u32 {
        self.counts[tier.index()]
    }

    /// Early doubles, treated as misses.
    #[inline(always)]
    pub fn misses(&self) -> u64 {
        self.counts[Tier::EarlyDouble.index()] as u64
    }

    /// Sum of every tier except early doubles.
    pub fn tiles(&self) -> u64 {
        self.counts[1..].iter().map(|&c| c as u64).sum()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Parses the seven raw form fields, in tier order.
    ///
    /// An empty field means the form is not filled in yet; anything that is
    /// not a plain decimal count is malformed.
    pub fn parse_fields<S: AsRef<str>>(fields: &[S]) -> SfResult<Self> {
        if fields.len() != TIER_COUNT {
            return Err(PassForgeError::MalformedJudgements(format!(
                "expected {} judgement fields, got {}",
                TIER_COUNT,
                fields.len()
            )));
        }

        let mut counts = [0u32; TIER_COUNT];
        for (tier, raw) in Tier::iter().zip(fields) {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                return Err(PassForgeError::IncompleteInput(format!(
                    "judgement '{}' is missing",
                    tier
                )));
            }
            if !is_valid_count(raw) {
                return Err(PassForgeError::MalformedJudgements(format!(
                    "judgement '{}' is not a non-negative integer: '{}'",
                    tier, raw
                )));
            }
            counts[tier.index()] = raw.parse().map_err(|_| {
                PassForgeError::MalformedJudgements(format!(
                    "judgement '{}' is out of range: '{}'",
                    tier, raw
                ))
            })?;
        }

        Ok(Self { counts })
    }
}
