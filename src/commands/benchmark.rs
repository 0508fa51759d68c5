//! Benchmark command
//!
//! Times ladder searches over random same-length word pairs.

use crate::core::Word;
use crate::graph::{AdjacencyMap, Ladder, shortest_path};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Benchmark settings
pub struct BenchmarkConfig {
    /// Number of random pairs to query
    pub count: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub found: usize,
    pub no_path: usize,
    /// Mean distance over queries that found a ladder
    pub average_distance: f64,
    pub max_distance: usize,
    pub longest: Option<Ladder>,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Run shortest-path queries on random pairs of equal-length words
///
/// Pairs of different lengths can never be connected, so the goal is always
/// drawn from the start word's length bucket.
pub fn run_benchmark<R: Rng + ?Sized>(
    graph: &AdjacencyMap,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> BenchmarkResult {
    let mut buckets: FxHashMap<usize, Vec<&Word>> = FxHashMap::default();
    for word in graph.words() {
        buckets.entry(word.len()).or_default().push(word);
    }
    let all_words: Vec<&Word> = graph.words().collect();

    let total_queries = if all_words.is_empty() { 0 } else { config.count };

    let pb = if config.show_progress {
        let pb = ProgressBar::new(total_queries as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut found = 0;
    let mut total_distance = 0;
    let mut max_distance = 0;
    let mut longest: Option<Ladder> = None;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    let start = Instant::now();

    for _ in 0..total_queries {
        let Some(&from) = all_words.choose(rng) else {
            break;
        };
        let Some(&to) = buckets.get(&from.len()).and_then(|b| b.choose(rng)) else {
            break;
        };

        if let Some(ladder) = shortest_path(from.text(), to.text(), graph) {
            found += 1;
            total_distance += ladder.distance;
            *distribution.entry(ladder.distance).or_insert(0) += 1;
            if longest.is_none() || ladder.distance > max_distance {
                max_distance = ladder.distance;
                longest = Some(ladder);
            }
        }

        pb.inc(1);
        pb.set_message(format!("{found} ladders"));
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    log::info!(
        "benchmark: {total_queries} queries, {found} ladders in {:.3}s",
        duration.as_secs_f64()
    );

    BenchmarkResult {
        total_queries,
        found,
        no_path: total_queries - found,
        average_distance: if found == 0 {
            0.0
        } else {
            total_distance as f64 / found as f64
        },
        max_distance,
        longest,
        distribution,
        duration,
        queries_per_second: if duration.is_zero() {
            0.0
        } else {
            total_queries as f64 / duration.as_secs_f64()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::{words_from_slice, words_from_str};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiet(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_runs() {
        let graph = AdjacencyMap::build(words_from_slice(DICTIONARY));
        let mut rng = StdRng::seed_from_u64(7);
        let result = run_benchmark(&graph, &quiet(25), &mut rng);

        assert_eq!(result.total_queries, 25);
        assert_eq!(result.found + result.no_path, 25);
        assert!(result.average_distance <= result.max_distance as f64);
    }

    #[test]
    fn benchmark_distribution_sums_to_found() {
        let graph = AdjacencyMap::build(words_from_slice(DICTIONARY));
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_benchmark(&graph, &quiet(40), &mut rng);

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.found);
    }

    #[test]
    fn benchmark_longest_matches_max_distance() {
        let graph = AdjacencyMap::build(words_from_str("cat cot cog dog dot"));
        let mut rng = StdRng::seed_from_u64(3);
        let result = run_benchmark(&graph, &quiet(30), &mut rng);

        // Every pair in a single component connects
        assert_eq!(result.found, 30);
        let longest = result.longest.unwrap();
        assert_eq!(longest.distance, result.max_distance);
        assert!(result.max_distance <= 3);
    }

    #[test]
    fn benchmark_is_deterministic_for_a_seed() {
        let graph = AdjacencyMap::build(words_from_slice(DICTIONARY));
        let a = run_benchmark(&graph, &quiet(20), &mut StdRng::seed_from_u64(42));
        let b = run_benchmark(&graph, &quiet(20), &mut StdRng::seed_from_u64(42));

        assert_eq!(a.found, b.found);
        assert_eq!(a.max_distance, b.max_distance);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_empty_dictionary() {
        let graph = AdjacencyMap::build(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        let result = run_benchmark(&graph, &quiet(10), &mut rng);

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.found, 0);
        assert!(result.longest.is_none());
    }
}
