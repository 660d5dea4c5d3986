use super::champion::{Champion, ChampionId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Remembers the last reported pick so the next random draw can skip it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    last_picked: Option<ChampionId>,
}

impl Selection {
    pub fn last_picked(&self) -> Option<ChampionId> {
        self.last_picked
    }

    pub fn record(&mut self, id: ChampionId) {
        self.last_picked = Some(id);
    }

    /// Visible records minus the last pick. Display is not affected by the exclusion.
    pub fn candidates<'a, I>(&self, visible: I) -> Vec<&'a Champion>
    where
        I: IntoIterator<Item = &'a Champion>,
    {
        visible
            .into_iter()
            .filter(|c| Some(c.id) != self.last_picked)
            .collect()
    }

    /// Uniform draw over the candidates; `None` when nothing is eligible.
    pub fn draw<'a, I, R>(&self, visible: I, rng: &mut R) -> Option<ChampionId>
    where
        I: IntoIterator<Item = &'a Champion>,
        R: Rng + ?Sized,
    {
        self.candidates(visible).choose(rng).map(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn roster() -> Vec<Champion> {
        vec![
            Champion::new(1, "Ahri", 55.0, 1024),
            Champion::new(2, "Zed", 45.0, 4),
            Champion::new(3, "Lux", 51.0, 2048),
        ]
    }

    #[test]
    fn draw_never_returns_last_pick() {
        let champs = roster();
        let mut selection = Selection::default();
        selection.record(ChampionId(2));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let id = selection.draw(&champs, &mut rng).unwrap();
            assert_ne!(id, ChampionId(2));
        }
    }

    #[test]
    fn draw_with_only_last_pick_is_none() {
        let champs = vec![Champion::new(2, "Zed", 45.0, 4)];
        let mut selection = Selection::default();
        selection.record(ChampionId(2));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(selection.draw(&champs, &mut rng), None);
    }

    #[test]
    fn draw_from_empty_is_none() {
        let empty: Vec<Champion> = Vec::new();
        let selection = Selection::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(selection.draw(&empty, &mut rng), None);
    }

    #[test]
    fn draw_covers_every_candidate() {
        let champs = roster();
        let selection = Selection::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<ChampionId, usize> = HashMap::new();

        for _ in 0..3000 {
            let id = selection.draw(&champs, &mut rng).unwrap();
            *counts.entry(id).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        for count in counts.values() {
            // expected 1000 each
            assert!(*count > 800 && *count < 1200, "skewed draw: {:?}", counts);
        }
    }

    #[test]
    fn candidates_keep_visible_order() {
        let champs = roster();
        let mut selection = Selection::default();
        selection.record(ChampionId(1));
        let ids: Vec<_> = selection.candidates(&champs).iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
