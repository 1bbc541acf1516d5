//! # Run Statistics
//!
//! Counters collected while a search runs, reported once at the end.

use std::time::{Duration, Instant};

use crate::pipelines::analysis::AnalysisResult;

/// Tallies over every mating analysed in one run
#[derive(Clone, Debug)]
pub struct RunStats {
    start: Instant,
    n_analysed: usize,
    n_danger: usize,
    n_interesting: usize,
    n_wonderful: usize,
    n_elaborated: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            n_analysed: 0,
            n_danger: 0,
            n_interesting: 0,
            n_wonderful: 0,
            n_elaborated: 0,
        }
    }

    pub fn record(&mut self, result: &AnalysisResult) {
        self.n_analysed += 1;
        self.n_danger += usize::from(result.cross().any_danger());
        self.n_interesting += usize::from(result.is_interesting());
        self.n_wonderful += usize::from(result.is_wonderful());
        self.n_elaborated += usize::from(result.is_elaborated());
    }

    pub fn n_analysed(&self) -> usize {
        self.n_analysed
    }

    pub fn n_danger(&self) -> usize {
        self.n_danger
    }

    pub fn n_interesting(&self) -> usize {
        self.n_interesting
    }

    pub fn n_wonderful(&self) -> usize {
        self.n_wonderful
    }

    pub fn n_elaborated(&self) -> usize {
        self.n_elaborated
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
