//! Failure-time statistics.

use crate::error::ResultError;

/// Equal-width histogram of failure times.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin edges; one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Sample count per bin.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

/// Mean time to failure together with the full sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureStatistics {
    samples: Vec<f64>,
    mean: f64,
}

impl FailureStatistics {
    /// Summarises a sample of failure times.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::NoFailuresRecorded`] if `samples` is empty.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self, ResultError> {
        if samples.is_empty() {
            return Err(ResultError::NoFailuresRecorded);
        }
        let mean = chainsim_stats::mean(&samples);
        Ok(Self { samples, mean })
    }

    /// Mean time to failure.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Recorded failure times in insertion order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of recorded failures.
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Sample standard deviation (0.0 for a single failure).
    pub fn std_dev(&self) -> f64 {
        chainsim_stats::sd(&self.samples)
    }

    /// Median failure time.
    pub fn median(&self) -> f64 {
        chainsim_stats::median(&chainsim_stats::sorted(&self.samples))
    }

    /// Type-7 quantile of the failure times; `p` is clamped to `[0, 1]`.
    pub fn quantile(&self, p: f64) -> f64 {
        let sorted = chainsim_stats::sorted(&self.samples);
        chainsim_stats::quantile_type7(&sorted, p.clamp(0.0, 1.0))
    }

    /// Equal-width histogram with `bins` bins spanning the observed range.
    pub fn histogram(&self, bins: usize) -> Histogram {
        let (edges, counts) = chainsim_stats::histogram(&self.samples, bins);
        Histogram { edges, counts }
    }
}
