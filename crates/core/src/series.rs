use std::collections::VecDeque;
use std::sync::Arc;

/// Fixed-capacity history of numeric samples, oldest first.
///
/// Pushing past `capacity` evicts the oldest sample.  The buffer performs no
/// validation of its own; callers coerce missing or non-finite values before
/// pushing.
#[derive(Debug, Clone)]
pub struct BoundedSeries {
    samples:  VecDeque<f64>,
    capacity: usize,
}

impl BoundedSeries {
    /// Create an empty series.  A zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Immutable copy of the current window, safe to hand to renderers while
    /// the series keeps receiving samples.
    pub fn snapshot(&self) -> Arc<[f64]> {
        self.samples.iter().copied().collect()
    }

    /// Min / max / average over the current window, `None` when empty.
    ///
    /// Always a full scan: evicted samples can never leak into the result.
    pub fn stats(&self) -> Option<Stats> {
        Stats::from_samples(self.samples.iter().copied())
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Summary statistics of a series window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl Stats {
    /// Compute statistics from an iterator of samples; `None` for no samples.
    pub fn from_samples(samples: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum   = 0.0;
        let mut min   = f64::INFINITY;
        let mut max   = f64::NEG_INFINITY;

        for v in samples {
            count += 1;
            sum   += v;
            min    = min.min(v);
            max    = max.max(v);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            min,
            max,
            avg: sum / count as f64,
        })
    }
}
