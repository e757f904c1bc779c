//! In-place shuffling

use rand::Rng;

/// Randomly permutes a slice in place
pub trait Shuffler {
    /// Shuffle `items` using randomness from `rng`
    fn shuffle<T, R: Rng + ?Sized>(&self, items: &mut [T], rng: &mut R);
}

/// Backward Fisher-Yates shuffle
///
/// For each index from the last down to 1, swaps it with a uniformly chosen
/// index at or below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FisherYates;

impl Shuffler for FisherYates {
    fn shuffle<T, R: Rng + ?Sized>(&self, items: &mut [T], rng: &mut R) {
        for i in (1..items.len()).rev() {
            let j = rng.random_range(0..=i);
            items.swap(i, j);
        }
    }
}
