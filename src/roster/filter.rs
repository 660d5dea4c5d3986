use super::champion::Champion;
use std::fmt;

pub const SEARCH_DELIMITER: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    #[default]
    Both,
    OnlyTrue,
    OnlyFalse,
}

impl TriState {
    pub fn passes(self, value: bool) -> bool {
        match self {
            TriState::Both => true,
            TriState::OnlyTrue => value,
            TriState::OnlyFalse => !value,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TriState::Both => "both",
            TriState::OnlyTrue => "yes",
            TriState::OnlyFalse => "no",
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Boolean columns that can carry a tri-state filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    Played,
    Won,
}

impl FlagField {
    pub fn accessor(self) -> fn(&Champion) -> bool {
        match self {
            FlagField::Played => |c| c.played,
            FlagField::Won => |c| c.won,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub played: TriState,
    pub won: TriState,
    pub search: String,
}

impl FilterState {
    pub fn set(&mut self, field: FlagField, value: TriState) {
        match field {
            FlagField::Played => self.played = value,
            FlagField::Won => self.won = value,
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }
}

enum Rule {
    // lowercased sub-terms, any match shows the record
    Search(Vec<String>),
    Flags(Vec<(fn(&Champion) -> bool, TriState)>),
}

impl Rule {
    fn from_state(filter: &FilterState) -> Self {
        if filter.is_searching() {
            Rule::Search(
                filter
                    .search
                    .split(SEARCH_DELIMITER)
                    .map(str::to_lowercase)
                    .collect(),
            )
        } else {
            Rule::Flags(vec![
                (FlagField::Played.accessor(), filter.played),
                (FlagField::Won.accessor(), filter.won),
            ])
        }
    }

    fn matches(&self, champion: &Champion) -> bool {
        match self {
            Rule::Search(terms) => {
                let name = champion.name.to_lowercase();
                terms.iter().any(|term| name.contains(term.as_str()))
            }
            Rule::Flags(flags) => flags
                .iter()
                .all(|(field, state)| state.passes(field(champion))),
        }
    }
}

/// Records passing the active rule, in store order.
///
/// A non-empty search string replaces the tri-state filters entirely.
pub fn visible<'a>(
    champions: &'a [Champion],
    filter: &FilterState,
) -> impl Iterator<Item = &'a Champion> + 'a {
    let rule = Rule::from_state(filter);
    champions.iter().filter(move |c| rule.matches(c))
}
