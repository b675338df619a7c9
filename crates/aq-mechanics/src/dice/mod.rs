//! Random sources for combat.
//!
//! Every draw the combat resolver makes goes through [`RandomSource`]:
//! inclusive integer ranges and probability checks. [`SeededRandom`] wraps
//! a seeded `StdRng` for play; [`ScriptedRandom`] replays queued values so
//! tests can pin an exact sequence of rolls.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random draws.
pub trait RandomSource {
    /// A uniform integer in `low..=high`.
    fn roll(&mut self, low: i32, high: i32) -> i32;

    /// True with the given probability (a uniform draw in `[0, 1)` below `probability`).
    fn chance(&mut self, probability: f64) -> bool;

    /// Pick one of two outcomes with even odds. `false` selects the first.
    fn coin_flip(&mut self) -> bool {
        self.roll(0, 1) == 1
    }
}

/// Production random source backed by a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a reproducible source from a seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }
}

/// A random source that replays queued values.
///
/// Queued rolls are clamped into the requested range. Once a queue runs dry,
/// rolls return the midpoint of the range and chances return `false`, so an
/// empty `ScriptedRandom` gives average damage and never triggers a
/// proc.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<i32>,
    chances: VecDeque<bool>,
}

impl ScriptedRandom {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer rolls.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue probability outcomes.
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Rolls not yet consumed.
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }

    /// Chances not yet consumed.
    pub fn remaining_chances(&self) -> usize {
        self.chances.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        match self.rolls.pop_front() {
            Some(value) => value.clamp(low, high.max(low)),
            None => low + (high - low) / 2,
        }
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
