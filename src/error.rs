use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Rate limited by the roster service, please try again later")]
    RateLimited,

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("No eligible champion to pick")]
    EmptyCandidateSet,

    #[error("Invalid weight {0}: must be a multiple of 5 between 0 and 60")]
    InvalidWeight(u32),

    #[error("Not a weight: {0:?} (expected a number, `up` or `down`)")]
    WeightInput(String),

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("Discarded stale roster fetch #{ticket} (snapshot #{applied} already applied)")]
    StaleFetch { ticket: u64, applied: u64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// True for every way fetching the roster from the backend can fail.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::RateLimited | AppError::JsonError(_)
        )
    }
}
