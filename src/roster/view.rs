use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info, warn};

use super::champion::{Champion, ChampionId};
use super::filter::{visible, FilterState, FlagField, TriState};
use super::ranking::Weight;
use super::selector::Selection;
use super::sort::{sort_champions, SortDirection, SortKey, SortState};
use crate::api::RosterBackend;
use crate::error::AppError;

/// Handle for one roster fetch. Tickets are issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// All state behind the champion table, owned by one controller.
pub struct RosterView<B> {
    backend: B,
    champions: Vec<Champion>,
    fetched_at: Option<DateTime<Utc>>,
    weight: Weight,
    sort: SortState,
    filter: FilterState,
    selection: Selection,
    issued: u64,
    applied: u64,
}

impl<B: RosterBackend> RosterView<B> {
    pub fn new(backend: B, weight: Weight) -> Self {
        RosterView {
            backend,
            champions: Vec::new(),
            fetched_at: None,
            weight,
            sort: SortState::default(),
            filter: FilterState::default(),
            selection: Selection::default(),
            issued: 0,
            applied: 0,
        }
    }

    pub fn champions(&self) -> &[Champion] {
        &self.champions
    }

    pub fn champion(&self, id: ChampionId) -> Option<&Champion> {
        self.champions.iter().find(|c| c.id == id)
    }

    /// Look a champion up by numeric id, then by case-insensitive name.
    pub fn resolve(&self, query: &str) -> Result<ChampionId, AppError> {
        let query = query.trim();
        if let Ok(raw) = query.parse::<i64>() {
            if let Some(champ) = self.champion(ChampionId(raw)) {
                return Ok(champ.id);
            }
        }

        let lowered = query.to_lowercase();
        self.champions
            .iter()
            .find(|c| c.name.to_lowercase() == lowered)
            .map(|c| c.id)
            .ok_or_else(|| AppError::UnknownChampion(query.to_string()))
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn last_picked(&self) -> Option<ChampionId> {
        self.selection.last_picked()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Champion> + '_ {
        visible(&self.champions, &self.filter)
    }

    // ----- refresh -----

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        debug!("Issued roster fetch #{}", self.issued);
        RefreshTicket(self.issued)
    }

    /// Apply a fetch outcome. The store is replaced in one step, or not at all.
    ///
    /// Results for tickets older than the last applied snapshot are discarded,
    /// and a failed fetch leaves the previous snapshot in place.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Champion>, AppError>,
    ) -> Result<usize, AppError> {
        let mut champions = match result {
            Ok(champions) => champions,
            Err(e) => {
                warn!("Roster fetch #{} failed, keeping previous snapshot: {}", ticket.0, e);
                return Err(e);
            }
        };

        if ticket.0 <= self.applied {
            warn!("Discarding stale roster fetch #{} (applied #{})", ticket.0, self.applied);
            return Err(AppError::StaleFetch {
                ticket: ticket.0,
                applied: self.applied,
            });
        }

        sort_champions(&mut champions, SortKey::Metric, SortDirection::Descending, self.weight);
        let count = champions.len();
        self.champions = champions;
        self.fetched_at = Some(Utc::now());
        self.applied = ticket.0;

        info!("Applied roster fetch #{} with {} champions", ticket.0, count);
        Ok(count)
    }

    /// Fetch a fresh roster, ordered by metric descending. Sort, filter and
    /// selection state are left as they are.
    pub fn refresh(&mut self) -> Result<usize, AppError> {
        let ticket = self.begin_refresh();
        let result = self.backend.fetch_roster();
        self.complete_refresh(ticket, result)
    }

    // ----- sort -----

    /// Column-header click.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        debug!("Sorting by {} {:?}", self.sort.key, self.sort.direction);
        sort_champions(&mut self.champions, self.sort.key, self.sort.direction, self.weight);
    }

    pub fn set_weight(&mut self, weight: Weight) {
        if weight == self.weight {
            return;
        }
        self.weight = weight;

        if self.sort.key == SortKey::Metric {
            // recompute keeps the current direction
            self.apply_sort();
        }
    }

    // ----- filter -----

    pub fn set_flag_filter(&mut self, field: FlagField, value: TriState) {
        self.filter.set(field, value);
    }

    pub fn set_search(&mut self, search: &str) {
        self.filter.search = search.to_string();
    }

    // ----- selection -----

    pub fn pick(&mut self, id: ChampionId) {
        if self.champion(id).is_none() {
            debug!("Picked id {} is not in the current snapshot", id);
        }
        self.selection.record(id);

        if let Err(e) = self.backend.notify_selection(id) {
            warn!("Failed to report selection of champion {}: {}", id, e);
        }
    }

    /// Random pick among the visible champions, skipping the previous pick.
    ///
    /// Returns `EmptyCandidateSet` without touching state or notifying when
    /// nothing is eligible.
    pub fn pick_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ChampionId, AppError> {
        let id = self
            .selection
            .draw(visible(&self.champions, &self.filter), rng)
            .ok_or(AppError::EmptyCandidateSet)?;
        self.pick(id);
        Ok(id)
    }

    pub fn randomize_teams(&self) {
        if let Err(e) = self.backend.notify_randomize_teams() {
            warn!("Failed to request team randomization: {}", e);
        }
    }
}
