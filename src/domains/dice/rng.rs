//! Random number source for dice rolls.
//!
//! All randomness in the server flows through [`Roller`], so tests can
//! substitute a seeded instance and tools never touch `rand` directly.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A random source backed by a seedable RNG.
///
/// Each tool invocation creates its own `Roller` from OS entropy, so no
/// state is shared across invocations.
#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    /// Create a roller seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller with a fixed seed. Deterministic; used in tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[low, high]`, inclusive on both ends.
    pub fn range(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }

    /// Roll a single die: uniform in `[1, sides]`.
    pub fn die(&mut self, sides: i64) -> i64 {
        self.range(1, sides)
    }

    /// Roll `count` dice of `sides` sides.
    pub fn roll_set(&mut self, count: i64, sides: i64) -> Vec<i64> {
        (0..count).map(|_| self.die(sides)).collect()
    }

    /// Fair coin flip.
    pub fn flip(&mut self) -> bool {
        self.rng.random()
    }
}

impl Default for Roller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rollers_agree() {
        let mut a = Roller::from_seed(42);
        let mut b = Roller::from_seed(42);
        for _ in 0..50 {
            assert_eq!(a.die(20), b.die(20));
        }
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut roller = Roller::from_seed(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..1000 {
            let v = roller.range(-1, 1);
            assert!((-1..=1).contains(&v));
            seen_low |= v == -1;
            seen_high |= v == 1;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_die_bounds() {
        let mut roller = Roller::from_seed(1);
        for _ in 0..500 {
            let v = roller.die(6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn test_roll_set_length() {
        let mut roller = Roller::from_seed(3);
        let rolls = roller.roll_set(10, 8);
        assert_eq!(rolls.len(), 10);
        assert!(rolls.iter().all(|r| (1..=8).contains(r)));
    }
}
