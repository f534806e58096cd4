//! Parallel syllable counting using Rayon.
//!
//! The word list is split by index into one contiguous partition per worker.
//! Each partition is summed independently on a dedicated thread pool and the
//! partial sums are added together once every worker is done.
//!
//! # Design
//!
//! - `partition` computes the fixed index ranges, one per busy worker
//! - `SyllableAggregator` owns the worker count and runs the fan-out/fan-in
//! - A single worker (or a single word) runs inline without a thread pool
//!
//! Partitioning depends only on the word count and the worker count, never
//! on completion order, so every worker count yields the same total as the
//! sequential path.

use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::text::count_syllables;

/// Split `0..len` into contiguous ranges, one per busy worker.
///
/// Returns `min(max(workers, 1), max(len, 1))` ranges of
/// `ceil(len / parts)` indices each. Workers beyond the word count would only
/// get empty ranges and contribute nothing, so they get no range at all.
/// The last range may be shorter or, for an empty input, empty.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let parts = workers.max(1).min(len.max(1));
    let chunk_size = len.div_ceil(parts);

    (0..parts)
        .map(|i| {
            let start = (i * chunk_size).min(len);
            let end = (start + chunk_size).min(len);
            start..end
        })
        .collect()
}

/// Sums syllable counts over a word list with a fixed number of workers.
#[derive(Debug, Clone)]
pub struct SyllableAggregator {
    workers: usize,
}

impl SyllableAggregator {
    /// Create an aggregator. A worker count of 0 is treated as 1.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Create an aggregator that counts on the calling thread.
    pub fn sequential() -> Self {
        Self::new(1)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Total syllables across `words`.
    ///
    /// For one worker or at most one word, counts inline without creating a
    /// thread pool. Otherwise fans out over Rayon and blocks until every
    /// partition has been summed.
    pub fn count(&self, words: &[&str]) -> usize {
        if words.is_empty() {
            return 0;
        }

        if self.workers == 1 || words.len() == 1 {
            return sum_syllables(words);
        }

        self.count_parallel(words)
    }

    fn count_parallel(&self, words: &[&str]) -> usize {
        let ranges = partition(words.len(), self.workers);
        let threads = self.workers.min(available_threads());

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("syllables-{}", i))
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!(error = %e, "Failed to create thread pool, counting sequentially");
                return sum_syllables(words);
            }
        };

        debug!(
            words = words.len(),
            workers = self.workers,
            threads,
            "Counting syllables in parallel"
        );

        pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| sum_syllables(&words[range]))
                .sum()
        })
    }
}

impl Default for SyllableAggregator {
    fn default() -> Self {
        Self::sequential()
    }
}

/// Count syllables of `words` using `workers` parallel workers.
pub fn count_syllables_parallel(words: &[&str], workers: usize) -> usize {
    SyllableAggregator::new(workers).count(words)
}

fn sum_syllables(words: &[&str]) -> usize {
    words.iter().map(|word| count_syllables(word)).sum()
}

fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}
