use rand::{rngs::StdRng, Rng, SeedableRng};

/// Die-roll source. Seeded for reproducible games.
#[derive(Debug, Clone)]
pub struct DiceRng {
    seed: u64,
    rng: StdRng,
}

impl DiceRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One six-sided die, uniform in 1..=6.
    pub fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }

    /// Total of `dice` dice, so two-die trigger rows are reachable.
    pub fn roll_total(&mut self, dice: u8) -> u8 {
        (0..dice).map(|_| self.roll()).sum()
    }
}
