//! The five-bar puzzle and its shuffle/sort primitives

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::BASELINE;

/// In-place Fisher-Yates shuffle, walking from the last index down to 1
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// True iff every adjacent pair is non-decreasing
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// A permutation of the baseline sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle([u32; 5]);

impl Default for Puzzle {
    fn default() -> Self {
        Self::baseline()
    }
}

impl Puzzle {
    pub fn baseline() -> Self {
        Self(BASELINE)
    }

    /// Build from explicit values. Returns `None` unless `values` is a
    /// permutation of the baseline.
    pub fn from_values(values: [u32; 5]) -> Option<Self> {
        let mut sorted = values;
        sorted.sort_unstable();
        (sorted == BASELINE).then_some(Self(values))
    }

    pub fn values(&self) -> &[u32; 5] {
        &self.0
    }

    pub fn is_sorted(&self) -> bool {
        is_sorted(&self.0)
    }

    pub fn reset(&mut self) {
        self.0 = BASELINE;
    }
}

/// Source of puzzle permutations
///
/// The session never draws randomness directly; it asks a `Shuffler`, so tests
/// can replay exact outcomes.
pub trait Shuffler {
    fn shuffle(&mut self, puzzle: &mut Puzzle);
}

/// Uniform shuffles from a seeded PCG stream
#[derive(Debug, Clone)]
pub struct RngShuffler {
    rng: Pcg32,
}

impl RngShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Shuffler for RngShuffler {
    fn shuffle(&mut self, puzzle: &mut Puzzle) {
        shuffle(&mut puzzle.0, &mut self.rng);
    }
}

/// Replays a fixed list of arrangements, one per shuffle
///
/// Once the script runs out the puzzle is left untouched.
#[derive(Debug, Clone, Default)]
pub struct ScriptedShuffler {
    script: VecDeque<Puzzle>,
}

impl ScriptedShuffler {
    pub fn new(script: impl IntoIterator<Item = Puzzle>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Convenience constructor from raw arrays; non-permutations are skipped
    pub fn from_arrays(arrays: impl IntoIterator<Item = [u32; 5]>) -> Self {
        Self::new(arrays.into_iter().filter_map(Puzzle::from_values))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Shuffler for ScriptedShuffler {
    fn shuffle(&mut self, puzzle: &mut Puzzle) {
        if let Some(next) = self.script.pop_front() {
            *puzzle = next;
        }
    }
}
