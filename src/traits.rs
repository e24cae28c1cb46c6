//! Core traits and errors for temperature series
//!
//! Every store exposes its validated samples through the [`Series`] trait;
//! the query side ([`Statistics`](crate::statistics::Statistics)) is written
//! once against that view.

/// Error raised by series construction, append, or statistic queries
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// A sample lies below absolute zero (or is NaN)
    InvalidSample {
        /// Position of the offending sample in the input slice
        index: usize,
        /// The rejected value
        value: f64,
    },
    /// The query needs at least one sample
    EmptySeries,
    /// Strict-replica growth cannot double a zero capacity
    GrowthStalled {
        capacity: usize,
        incoming: usize,
    },
    /// Strict-replica growth left too little room for the incoming samples
    CapacityExceeded {
        required: usize,
        capacity: usize,
    },
}

impl core::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SeriesError::InvalidSample { index, value } => {
                write!(f, "invalid sample at index {}: {} is below absolute zero", index, value)
            }
            SeriesError::EmptySeries => write!(f, "series is empty"),
            SeriesError::GrowthStalled { capacity, incoming } => {
                write!(
                    f,
                    "growth stalled: cannot double capacity {} to fit {} samples",
                    capacity, incoming
                )
            }
            SeriesError::CapacityExceeded { required, capacity } => {
                write!(f, "capacity exceeded: required {}, capacity {}", required, capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeriesError {}

/// Read-only view over the logical samples of a series
///
/// Implementors must only ever expose validated samples: every value in
/// [`as_slice`](Series::as_slice) is at or above
/// [`ABSOLUTE_ZERO`](crate::series::ABSOLUTE_ZERO). Stale storage beyond the
/// logical length is never part of the slice.
pub trait Series {
    /// The logical samples, in insertion order
    fn as_slice(&self) -> &[f64];

    /// Number of logical samples
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if the series holds no samples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the logical samples
    fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    /// Return the samples as a non-empty slice, or [`SeriesError::EmptySeries`]
    fn non_empty(&self) -> Result<&[f64], SeriesError> {
        let samples = self.as_slice();
        if samples.is_empty() {
            Err(SeriesError::EmptySeries)
        } else {
            Ok(samples)
        }
    }
}
