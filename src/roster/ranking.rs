use super::champion::Champion;
use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

pub const MIN_WEIGHT: u32 = 0;
pub const MAX_WEIGHT: u32 = 60;
pub const WEIGHT_STEP: u32 = 5;
pub const DEFAULT_WEIGHT: u32 = 25;

/// Score given to champions whose mastery has no defined log2 (zero or negative).
pub const UNRANKED_SCORE: f64 = f64::MIN;

/// Win-rate baseline subtracted before scaling by mastery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(u32);

impl Weight {
    pub fn new(value: u32) -> Result<Self, AppError> {
        if value > MAX_WEIGHT || value % WEIGHT_STEP != 0 {
            return Err(AppError::InvalidWeight(value));
        }
        Ok(Weight(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn step_up(self) -> Self {
        Weight((self.0 + WEIGHT_STEP).min(MAX_WEIGHT))
    }

    pub fn step_down(self) -> Self {
        Weight(self.0.saturating_sub(WEIGHT_STEP))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight(DEFAULT_WEIGHT)
    }
}

impl FromStr for Weight {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::WeightInput(raw.to_string()))?;
        Weight::new(value)
    }
}

impl Weight {
    /// Prompt input: `up`/`+` and `down`/`-` step from `self`, anything else is a value.
    pub fn adjust(self, input: &str) -> Result<Self, AppError> {
        match input.trim() {
            "up" | "+" => Ok(self.step_up()),
            "down" | "-" => Ok(self.step_down()),
            raw => raw.parse(),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ranking score ("metric") of a champion:
/// - (win_rate - weight) × log2(mastery)
/// - mastery <= 0 yields `UNRANKED_SCORE`
pub fn rank(champion: &Champion, weight: Weight) -> f64 {
    if champion.mastery <= 0 {
        return UNRANKED_SCORE;
    }

    let score = (champion.win_rate - weight.value() as f64) * (champion.mastery as f64).log2();
    if score.is_finite() {
        score
    } else {
        UNRANKED_SCORE
    }
}

pub fn is_unranked(score: f64) -> bool {
    score == UNRANKED_SCORE
}
