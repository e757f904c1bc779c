//! Benchmark command
//!
//! Measures lookup throughput of the word store and cross-checks the
//! similarity search against a full scan.

use crate::dictionary::{SIMILARITY_THRESHOLD, Suggestions, WordStore, hamming_distance};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub dictionary_size: usize,
    pub total_suggestions: usize,
    pub average_suggestions: f64,
    pub max_suggestions: usize,
    pub mismatches: Vec<String>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Similar words found by checking every stored word
///
/// Reference answer for [`WordStore::words_similar_to`].
#[must_use]
pub fn brute_force_similar(store: &WordStore, word: &str) -> Suggestions {
    let Some(first) = word.chars().next() else {
        return Suggestions::new();
    };

    store
        .words()
        .iter()
        .filter(|w| w.starts_with(first) && hamming_distance(word, w) <= SIMILARITY_THRESHOLD)
        .cloned()
        .collect()
}

/// Run `contains` and `words_similar_to` on every `step`-th stored word
///
/// Queries run in parallel; the store is only read. Each result is compared
/// with [`brute_force_similar`], and any word where the two disagree is
/// reported in `mismatches`.
#[must_use]
pub fn run_benchmark(store: &WordStore, count: usize) -> BenchmarkResult {
    let step = (store.len() / count.max(1)).max(1);
    let sample: Vec<&String> = store.words().iter().step_by(step).take(count).collect();

    let pb = ProgressBar::new(sample.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes: Vec<(usize, Option<String>)> = sample
        .par_iter()
        .map(|word| {
            let found = store.contains(word);
            let similar = store.words_similar_to(word);
            let mismatch = (!found || similar != brute_force_similar(store, word))
                .then(|| (*word).clone());
            pb.inc(1);
            (similar.len(), mismatch)
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let total_queries = outcomes.len();
    let total_suggestions: usize = outcomes.iter().map(|(n, _)| n).sum();
    let max_suggestions = outcomes.iter().map(|(n, _)| *n).max().unwrap_or(0);
    let mismatches = outcomes.into_iter().filter_map(|(_, m)| m).collect();

    BenchmarkResult {
        total_queries,
        dictionary_size: store.len(),
        total_suggestions,
        average_suggestions: if total_queries > 0 {
            total_suggestions as f64 / total_queries as f64
        } else {
            0.0
        },
        max_suggestions,
        mismatches,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let store = WordStore::embedded().unwrap();
        let result = run_benchmark(&store, 50);

        assert_eq!(result.total_queries, 50);
        assert_eq!(result.dictionary_size, store.len());
        // Every stored word is similar to itself
        assert!(result.average_suggestions >= 1.0);
        assert!(result.max_suggestions >= 1);
    }

    #[test]
    fn benchmark_finds_no_mismatches() {
        let store = WordStore::embedded().unwrap();
        let result = run_benchmark(&store, store.len());

        assert_eq!(result.total_queries, store.len());
        assert!(result.mismatches.is_empty(), "{:?}", result.mismatches);
    }

    #[test]
    fn benchmark_empty_store() {
        let store = WordStore::default();
        let result = run_benchmark(&store, 10);

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.total_suggestions, 0);
        assert!(result.mismatches.is_empty());
    }

    #[test]
    fn brute_force_matches_scenario() {
        let store = WordStore::from_words(["can", "car", "cat", "dog"]);
        let similar: Vec<_> = brute_force_similar(&store, "cat").into_iter().collect();
        assert_eq!(similar, ["can", "car", "cat"]);
    }
}
