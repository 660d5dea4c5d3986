use std::fmt;

/// Backend-assigned champion identifier, unique within one fetched snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChampionId(pub i64);

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    pub icon: String,
    pub win_rate: f64, // percent, 0-100
    pub mastery: i64,
    pub won: bool,
    pub played: bool,
}

impl Champion {
    pub fn new(id: i64, name: &str, win_rate: f64, mastery: i64) -> Self {
        Champion {
            id: ChampionId(id),
            name: name.to_string(),
            icon: String::new(),
            win_rate,
            mastery,
            won: false,
            played: false,
        }
    }

    pub fn with_flags(mut self, won: bool, played: bool) -> Self {
        self.won = won;
        self.played = played;
        self
    }
}
