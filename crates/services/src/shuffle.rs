use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides the display order of a question's options.
pub trait Shuffler: Send + Sync {
    fn shuffle(&self, options: &mut [String]);
}

/// In-place Fisher–Yates: every permutation is equally likely given a uniform `rng`.
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Unseeded shuffling backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FisherYatesShuffler;

impl Shuffler for FisherYatesShuffler {
    fn shuffle(&self, options: &mut [String]) {
        let mut rng = rand::rng();
        fisher_yates(options, &mut rng);
    }
}

/// Reproducible shuffling for tests.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&self, options: &mut [String]) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        fisher_yates(options, &mut *rng);
    }
}

/// Keeps source order: correct answer first, then the incorrect ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&self, _options: &mut [String]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn shuffle_keeps_the_same_elements() {
        let shuffler = SeededShuffler::new(7);
        let mut options: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
        shuffler.shuffle(&mut options);
        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(sorted, ["a", "b", "c", "d"]);
    }

    #[test]
    fn fisher_yates_is_roughly_uniform() {
        const TRIALS: usize = 60_000;
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

        for _ in 0..TRIALS {
            let mut items = [0_u8, 1, 2];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "every permutation should appear");
        let expected = TRIALS / 6;
        for (perm, count) in counts {
            assert!(
                count.abs_diff(expected) < 600,
                "{perm:?} appeared {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn seeded_shufflers_agree() {
        let first = SeededShuffler::new(99);
        let second = SeededShuffler::new(99);
        let mut a: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        let mut b = a.clone();
        first.shuffle(&mut a);
        second.shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn identity_leaves_order_alone() {
        let mut options: Vec<String> = ["x", "y"].map(String::from).to_vec();
        IdentityShuffler.shuffle(&mut options);
        assert_eq!(options, ["x", "y"]);
    }

    #[test]
    fn single_and_empty_slices_are_fine() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);
        let mut one = [5_u8];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, [5]);
    }
}
