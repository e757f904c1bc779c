//! Command implementations

pub mod benchmark;
pub mod check;
pub mod roll;
pub mod simple;

pub use benchmark::{BenchmarkResult, brute_force_similar, run_benchmark};
pub use check::{CheckResult, SimilarResult, check_word, similar_words};
pub use roll::{RollResult, roll_board};
pub use simple::run_simple;
