//! Core domain types for Boggle
//!
//! Dice and the shuffler that reorders them. Randomness is always passed in,
//! so everything here is reproducible under a seeded generator.

mod die;
mod shuffle;

pub use die::{Die, DieError};
pub use shuffle::{FisherYates, Shuffler};
