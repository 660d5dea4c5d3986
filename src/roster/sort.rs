use super::champion::Champion;
use super::ranking::{rank, Weight};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    WinRate,
    Mastery,
    Metric,
    Won,
    Played,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Ascending comparison of two champions on one column.
pub type Comparator = fn(&Champion, &Champion, Weight) -> Ordering;

impl SortKey {
    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Name => |a, b, _| a.name.cmp(&b.name),
            SortKey::WinRate => |a, b, _| a.win_rate.total_cmp(&b.win_rate),
            SortKey::Mastery => |a, b, _| a.mastery.cmp(&b.mastery),
            SortKey::Metric => |a, b, w| rank(a, w).total_cmp(&rank(b, w)),
            SortKey::Won => |a, b, _| a.won.cmp(&b.won),
            SortKey::Played => |a, b, _| a.played.cmp(&b.played),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::WinRate => "winrate",
            SortKey::Mastery => "mastery",
            SortKey::Metric => "metric",
            SortKey::Won => "won",
            SortKey::Played => "played",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            key: SortKey::Metric,
            direction: SortDirection::default(),
        }
    }
}

impl SortState {
    /// Column-header click: the active key flips direction, a new key starts descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::default();
        }
    }
}

/// Stable in-place sort; ties keep their current relative order.
pub fn sort_champions(
    champions: &mut [Champion],
    key: SortKey,
    direction: SortDirection,
    weight: Weight,
) {
    let compare = key.comparator();
    match direction {
        SortDirection::Ascending => champions.sort_by(|a, b| compare(a, b, weight)),
        SortDirection::Descending => champions.sort_by(|a, b| compare(b, a, weight)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(champions: &[Champion]) -> Vec<&str> {
        champions.iter().map(|c| c.name.as_str()).collect()
    }

    fn roster() -> Vec<Champion> {
        vec![
            Champion::new(1, "Lux", 51.0, 2048).with_flags(true, true),
            Champion::new(2, "ahri", 55.0, 1024).with_flags(false, true),
            Champion::new(3, "Zed", 45.0, 4).with_flags(true, false),
            Champion::new(4, "Annie", 49.5, 0).with_flags(false, false),
        ]
    }

    #[test]
    fn name_sort_is_case_sensitive() {
        let mut champs = roster();
        sort_champions(&mut champs, SortKey::Name, SortDirection::Ascending, Weight::default());
        assert_eq!(names(&champs), vec!["Annie", "Lux", "Zed", "ahri"]);
    }

    #[test]
    fn numeric_sort_descending() {
        let mut champs = roster();
        sort_champions(&mut champs, SortKey::WinRate, SortDirection::Descending, Weight::default());
        assert_eq!(names(&champs), vec!["ahri", "Lux", "Annie", "Zed"]);

        sort_champions(&mut champs, SortKey::Mastery, SortDirection::Ascending, Weight::default());
        assert_eq!(names(&champs), vec!["Annie", "Zed", "ahri", "Lux"]);
    }

    #[test]
    fn metric_sort_puts_unranked_last_when_descending() {
        let mut champs = roster();
        sort_champions(&mut champs, SortKey::Metric, SortDirection::Descending, Weight::default());
        // Lux: 26 * 11 = 286, ahri: 30 * 10 = 300, Zed: 20 * 2 = 40
        assert_eq!(names(&champs), vec!["ahri", "Lux", "Zed", "Annie"]);
    }

    #[test]
    fn metric_sort_follows_weight() {
        let mut champs = vec![
            Champion::new(1, "Garen", 52.0, 1 << 20),
            Champion::new(2, "Katarina", 60.0, 1 << 4),
        ];
        let w0 = Weight::new(0).unwrap();
        sort_champions(&mut champs, SortKey::Metric, SortDirection::Descending, w0);
        assert_eq!(names(&champs), vec!["Garen", "Katarina"]);

        // Garen: 2 * 20 = 40, Katarina: 10 * 4 = 40 -> tie keeps order
        let w50 = Weight::new(50).unwrap();
        sort_champions(&mut champs, SortKey::Metric, SortDirection::Descending, w50);
        assert_eq!(names(&champs), vec!["Garen", "Katarina"]);

        let w55 = Weight::new(55).unwrap();
        sort_champions(&mut champs, SortKey::Metric, SortDirection::Descending, w55);
        assert_eq!(names(&champs), vec!["Katarina", "Garen"]);
    }

    #[test]
    fn boolean_sort_false_before_true() {
        let mut champs = roster();
        sort_champions(&mut champs, SortKey::Won, SortDirection::Ascending, Weight::default());
        assert_eq!(names(&champs), vec!["ahri", "Annie", "Lux", "Zed"]);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut champs = roster();
        sort_champions(&mut champs, SortKey::Played, SortDirection::Descending, Weight::default());
        assert_eq!(names(&champs), vec!["Lux", "ahri", "Zed", "Annie"]);

        sort_champions(&mut champs, SortKey::Played, SortDirection::Ascending, Weight::default());
        assert_eq!(names(&champs), vec!["Zed", "Annie", "Lux", "ahri"]);
    }

    #[test]
    fn double_toggle_restores_order() {
        let mut champs = roster();
        let mut state = SortState::default();
        state.toggle(SortKey::WinRate);
        sort_champions(&mut champs, state.key, state.direction, Weight::default());
        let first = names(&champs).join(",");

        state.toggle(SortKey::WinRate);
        sort_champions(&mut champs, state.key, state.direction, Weight::default());
        let mut reversed: Vec<&str> = first.split(',').collect();
        reversed.reverse();
        assert_eq!(names(&champs), reversed);

        state.toggle(SortKey::WinRate);
        sort_champions(&mut champs, state.key, state.direction, Weight::default());
        assert_eq!(names(&champs).join(","), first);
    }

    #[test]
    fn toggle_resets_direction_on_new_key() {
        let mut state = SortState::default();
        assert_eq!(state.key, SortKey::Metric);
        assert_eq!(state.direction, SortDirection::Descending);

        state.toggle(SortKey::Metric);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortKey::Name);
        assert_eq!(state.key, SortKey::Name);
        assert_eq!(state.direction, SortDirection::Descending);
    }
}
