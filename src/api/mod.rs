pub mod client;
pub mod endpoints;
pub mod models;

use crate::error::AppError;
use crate::roster::champion::{Champion, ChampionId};

/// The roster service the view talks to.
pub trait RosterBackend {
    /// Current roster snapshot. Must not change anything on the service.
    fn fetch_roster(&self) -> Result<Vec<Champion>, AppError>;

    /// Fire-and-forget; callers log failures and move on.
    fn notify_selection(&self, id: ChampionId) -> Result<(), AppError>;

    fn notify_randomize_teams(&self) -> Result<(), AppError>;
}

impl<B: RosterBackend + ?Sized> RosterBackend for &B {
    fn fetch_roster(&self) -> Result<Vec<Champion>, AppError> {
        (**self).fetch_roster()
    }

    fn notify_selection(&self, id: ChampionId) -> Result<(), AppError> {
        (**self).notify_selection(id)
    }

    fn notify_randomize_teams(&self) -> Result<(), AppError> {
        (**self).notify_randomize_teams()
    }
}
