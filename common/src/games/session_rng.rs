use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of the few random choices a round makes, so a round can be
/// replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        let left: Vec<bool> = (0..32).map(|_| a.random_bool()).collect();
        let right: Vec<bool> = (0..32).map(|_| b.random_bool()).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), 99);
    }
}
