use crate::Establishment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-game mutable state for one seat. Identity is the name, unique within
/// a game; resolution compares players by name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub establishments: HashMap<Establishment, u32>,
    pub stash: i64,
}

impl Player {
    /// Standard starting seat: one Wheat Field, one Bakery, three coins.
    pub fn new(name: impl Into<String>) -> Self {
        let mut establishments = HashMap::new();
        establishments.insert(Establishment::WheatField, 1);
        establishments.insert(Establishment::Bakery, 1);
        Self {
            name: name.into(),
            establishments,
            stash: 3,
        }
    }

    /// Seat with explicit holdings and stash, for tests and scenario setup.
    /// Resolution code never constructs players.
    pub fn with_holdings(
        name: impl Into<String>,
        holdings: &[(Establishment, u32)],
        stash: i64,
    ) -> Self {
        Self {
            name: name.into(),
            establishments: holdings.iter().copied().collect(),
            stash,
        }
    }

    /// Owned count for one establishment; absent entries mean zero.
    pub fn owned(&self, key: Establishment) -> u32 {
        self.establishments.get(&key).copied().unwrap_or(0)
    }

    pub fn add_establishment(&mut self, key: Establishment, count: u32) {
        *self.establishments.entry(key).or_insert(0) += count;
    }

    /// Applies a resolved net income. Resolution already caps losses at the
    /// stash, but external mutation paths may race, so clamp at zero anyway.
    pub fn apply_income(&mut self, delta: i64) {
        self.stash = (self.stash + delta).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_seat() {
        let player = Player::new("Alfred");
        assert_eq!(player.name, "Alfred");
        assert_eq!(player.owned(Establishment::WheatField), 1);
        assert_eq!(player.owned(Establishment::Bakery), 1);
        assert_eq!(player.owned(Establishment::Cafe), 0);
        assert_eq!(player.stash, 3);
    }

    #[test]
    fn apply_income_clamps_at_zero() {
        let mut player = Player::with_holdings("Bradley", &[], 2);
        player.apply_income(-5);
        assert_eq!(player.stash, 0);
        player.apply_income(4);
        assert_eq!(player.stash, 4);
    }
}
