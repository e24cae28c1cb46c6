//! Descriptive statistics over a validated series
//!
//! Every query reads the logical samples through [`Series`] and recomputes
//! from scratch; nothing is cached between calls.

use super::SummaryStatistics;
use crate::math;
use crate::series::ABSOLUTE_ZERO;
use crate::traits::{Series, SeriesError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Fold `samples` from `sentinel`, replacing the accumulator whenever
/// `replaces(sample, acc)` holds
///
/// The result is only correct if `sentinel` bounds every sample non-strictly
/// in the direction of the fold. Validation on the store side guarantees
/// this for [`ABSOLUTE_ZERO`] as the seed of a maximum.
fn fold_from_sentinel<F>(samples: &[f64], sentinel: f64, replaces: F) -> f64
where
    F: Fn(f64, f64) -> bool,
{
    samples
        .iter()
        .fold(sentinel, |acc, &sample| if replaces(sample, acc) { sample } else { acc })
}

/// Statistic queries available on every [`Series`]
///
/// Queries that reduce the series to a value fail with
/// [`SeriesError::EmptySeries`] when there is nothing to reduce. Filters
/// return an empty `Vec` instead.
///
/// # Example
///
/// ```
/// use tempseries::prelude::*;
///
/// let store = SeriesStore::from_samples(&[-5.0, 10.0, 3.0]).unwrap();
///
/// assert_eq!(store.min().unwrap(), -5.0);
/// assert_eq!(store.max().unwrap(), 10.0);
/// assert_eq!(store.find_closest_to_zero().unwrap(), 3.0);
/// assert_eq!(store.find_less_than(3.0), vec![-5.0]);
/// assert_eq!(store.find_greater_or_equal(3.0), vec![10.0, 3.0]);
/// ```
pub trait Statistics: Series {
    /// Arithmetic mean
    fn average(&self) -> Result<f64, SeriesError> {
        let samples = self.non_empty()?;
        Ok(samples.iter().sum::<f64>() / samples.len() as f64)
    }

    /// Population variance: mean squared distance from [`average`](Statistics::average)
    fn deviation(&self) -> Result<f64, SeriesError> {
        let samples = self.non_empty()?;
        let mean = self.average()?;
        let squares: f64 = samples
            .iter()
            .map(|&sample| (sample - mean) * (sample - mean))
            .sum();
        Ok(squares / samples.len() as f64)
    }

    /// Population standard deviation
    fn std_deviation(&self) -> Result<f64, SeriesError> {
        Ok(math::sqrt(self.deviation()?))
    }

    /// Smallest sample
    fn min(&self) -> Result<f64, SeriesError> {
        let samples = self.non_empty()?;
        // The physical bound only caps samples from below, so the minimum
        // folds down from +inf.
        Ok(fold_from_sentinel(samples, f64::INFINITY, |sample, acc| {
            sample < acc
        }))
    }

    /// Largest sample
    fn max(&self) -> Result<f64, SeriesError> {
        let samples = self.non_empty()?;
        Ok(fold_from_sentinel(samples, ABSOLUTE_ZERO, |sample, acc| {
            sample > acc
        }))
    }

    /// Sample with the smallest distance to `target`
    ///
    /// On a tie the larger sample wins, so between `-2` and `2` the answer
    /// for a target of `0` is `2`.
    fn find_closest_to_value(&self, target: f64) -> Result<f64, SeriesError> {
        let samples = self.non_empty()?;

        let mut closest = samples[0];
        let mut smallest = math::abs(closest - target);
        for &sample in &samples[1..] {
            let distance = math::abs(sample - target);
            if distance < smallest || (distance == smallest && sample > closest) {
                closest = sample;
                smallest = distance;
            }
        }
        Ok(closest)
    }

    fn find_closest_to_zero(&self) -> Result<f64, SeriesError> {
        self.find_closest_to_value(0.0)
    }

    /// Samples strictly below `threshold`, in insertion order
    fn find_less_than(&self, threshold: f64) -> Vec<f64> {
        self.iter()
            .copied()
            .filter(|&sample| sample < threshold)
            .collect()
    }

    /// Samples at or above `threshold`, in insertion order
    fn find_greater_or_equal(&self, threshold: f64) -> Vec<f64> {
        self.iter()
            .copied()
            .filter(|&sample| sample >= threshold)
            .collect()
    }

    /// Average, deviation, min and max in one snapshot
    fn summary(&self) -> Result<SummaryStatistics, SeriesError> {
        self.non_empty()?;
        Ok(SummaryStatistics::new(
            self.average()?,
            self.deviation()?,
            self.min()?,
            self.max()?,
        ))
    }
}

impl<S: Series + ?Sized> Statistics for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesStore;

    fn store(samples: &[f64]) -> SeriesStore {
        SeriesStore::from_samples(samples).unwrap()
    }

    #[test]
    fn test_average_and_deviation() {
        let s = store(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(s.average(), Ok(2.5));
        assert_eq!(s.deviation(), Ok(1.25));
        assert!((s.std_deviation().unwrap() - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let s = store(&[42.0]);

        assert_eq!(s.average(), Ok(42.0));
        assert_eq!(s.deviation(), Ok(0.0));
        assert_eq!(s.min(), Ok(42.0));
        assert_eq!(s.max(), Ok(42.0));
        assert_eq!(s.find_closest_to_value(1000.0), Ok(42.0));
    }

    #[test]
    fn test_min_max() {
        let s = store(&[-5.0, 10.0, 3.0]);

        assert_eq!(s.min(), Ok(-5.0));
        assert_eq!(s.max(), Ok(10.0));
    }

    #[test]
    fn test_extremes_at_bound() {
        let s = store(&[ABSOLUTE_ZERO, ABSOLUTE_ZERO]);

        assert_eq!(s.min(), Ok(ABSOLUTE_ZERO));
        assert_eq!(s.max(), Ok(ABSOLUTE_ZERO));
    }

    #[test]
    fn test_closest_tie_prefers_larger() {
        assert_eq!(store(&[-2.0, 2.0]).find_closest_to_zero(), Ok(2.0));
        assert_eq!(store(&[2.0, -2.0]).find_closest_to_zero(), Ok(2.0));
        assert_eq!(store(&[4.0, 6.0]).find_closest_to_value(5.0), Ok(6.0));
    }

    #[test]
    fn test_closest_first_sample_wins_initially() {
        // Every distance is infinite; the first sample is kept.
        let s = store(&[f64::INFINITY]);
        assert_eq!(s.find_closest_to_value(0.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_closest() {
        let s = store(&[-10.0, 3.0, -1.5, 7.0]);

        assert_eq!(s.find_closest_to_zero(), Ok(-1.5));
        assert_eq!(s.find_closest_to_value(6.0), Ok(7.0));
        assert_eq!(s.find_closest_to_value(-100.0), Ok(-10.0));
    }

    #[test]
    fn test_filters_partition() {
        let s = store(&[1.0, 2.0, 3.0]);

        assert_eq!(s.find_less_than(2.0), vec![1.0]);
        assert_eq!(s.find_greater_or_equal(2.0), vec![2.0, 3.0]);
    }

    #[test]
    fn test_filters_on_empty() {
        let s = SeriesStore::new();

        assert!(s.find_less_than(0.0).is_empty());
        assert!(s.find_greater_or_equal(0.0).is_empty());
    }

    #[test]
    fn test_empty_queries_fail() {
        let s = SeriesStore::new();

        assert_eq!(s.average(), Err(SeriesError::EmptySeries));
        assert_eq!(s.deviation(), Err(SeriesError::EmptySeries));
        assert_eq!(s.std_deviation(), Err(SeriesError::EmptySeries));
        assert_eq!(s.min(), Err(SeriesError::EmptySeries));
        assert_eq!(s.max(), Err(SeriesError::EmptySeries));
        assert_eq!(s.find_closest_to_value(1.0), Err(SeriesError::EmptySeries));
        assert_eq!(s.find_closest_to_zero(), Err(SeriesError::EmptySeries));
        assert_eq!(s.summary(), Err(SeriesError::EmptySeries));
    }

    #[test]
    fn test_summary() {
        let summary = store(&[1.0, 2.0, 3.0, 4.0]).summary().unwrap();

        assert_eq!(summary, SummaryStatistics::new(2.5, 1.25, 1.0, 4.0));
    }

    #[test]
    fn test_queries_ignore_stale_slots() {
        let mut s = SeriesStore::new();
        s.append(&[10.0, 20.0, 30.0]).unwrap();
        assert!(s.capacity() > s.len());

        assert_eq!(s.average(), Ok(20.0));
        assert_eq!(s.min(), Ok(10.0));
        assert_eq!(s.find_less_than(100.0), vec![10.0, 20.0, 30.0]);
    }
}
