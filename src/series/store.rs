//! Growable, validated temperature buffer
//!
//! The store keeps a physical buffer whose length is the allocated capacity
//! and a separate logical length. Slots past the logical length are stale
//! and never leave the store.

use crate::traits::{Series, SeriesError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Physical lower bound for a temperature sample, in degrees Celsius
pub const ABSOLUTE_ZERO: f64 = -273.0;

/// Validate that every sample is at or above [`ABSOLUTE_ZERO`]
///
/// The bound is inclusive and NaN is rejected. Returns the first offending
/// sample.
///
/// # Example
///
/// ```
/// use tempseries::series::check_temperatures;
/// use tempseries::SeriesError;
///
/// assert!(check_temperatures(&[-273.0, 0.0, 21.5]).is_ok());
/// assert_eq!(
///     check_temperatures(&[1.0, -300.0]),
///     Err(SeriesError::InvalidSample { index: 1, value: -300.0 })
/// );
/// ```
pub fn check_temperatures(samples: &[f64]) -> Result<(), SeriesError> {
    match samples
        .iter()
        .position(|&value| value.is_nan() || value < ABSOLUTE_ZERO)
    {
        Some(index) => {
            let value = samples[index];
            trace_event!(index, value, "rejected sample below absolute zero");
            Err(SeriesError::InvalidSample { index, value })
        }
        None => Ok(()),
    }
}

/// How the physical buffer grows when an append does not fit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthPolicy {
    /// Double from `max(capacity, 1)` until `len + incoming` fits
    #[default]
    Doubling,
    /// Double only while `incoming > capacity`, for bit-compatible replay
    ///
    /// Zero capacity cannot grow ([`SeriesError::GrowthStalled`]), and the
    /// loop ignores samples already stored, so appends that overflow the
    /// result fail with [`SeriesError::CapacityExceeded`].
    StrictReplica,
}

impl GrowthPolicy {
    /// Capacity needed to append `incoming` samples to `len` stored ones
    ///
    /// Returns `capacity` unchanged when the samples already fit.
    pub fn grow(self, len: usize, capacity: usize, incoming: usize) -> Result<usize, SeriesError> {
        let required = len.saturating_add(incoming);
        if required <= capacity {
            return Ok(capacity);
        }

        match self {
            GrowthPolicy::Doubling => {
                let mut next = capacity.max(1);
                while next < required {
                    next = next.saturating_mul(2);
                }
                Ok(next)
            }
            GrowthPolicy::StrictReplica => {
                let mut next = capacity;
                while incoming > next {
                    if next == 0 {
                        return Err(SeriesError::GrowthStalled { capacity, incoming });
                    }
                    next = next.saturating_mul(2);
                }
                if next < required {
                    return Err(SeriesError::CapacityExceeded {
                        required,
                        capacity: next,
                    });
                }
                Ok(next)
            }
        }
    }
}

/// How [`SeriesStore::sum`] accumulates samples
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SumMode {
    /// Plain floating-point accumulation
    #[default]
    Exact,
    /// 32-bit integer accumulator: `acc = (acc + sample) as i32` per sample,
    /// truncating toward zero and saturating at the `i32` range
    Truncating,
}

impl SumMode {
    /// Sum `samples` under this mode
    pub fn sum(self, samples: &[f64]) -> f64 {
        match self {
            SumMode::Exact => samples.iter().sum(),
            SumMode::Truncating => samples
                .iter()
                .fold(0i32, |acc, &value| (acc as f64 + value) as i32) as f64,
        }
    }
}

/// Behaviour flags for a [`SeriesStore`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesConfig {
    pub growth: GrowthPolicy,
    pub sum: SumMode,
}

impl SeriesConfig {
    /// Bit-compatible mode: strict-replica growth and a truncating sum
    pub const fn strict_replica() -> Self {
        Self {
            growth: GrowthPolicy::StrictReplica,
            sum: SumMode::Truncating,
        }
    }

    pub const fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    pub const fn with_sum(mut self, sum: SumMode) -> Self {
        self.sum = sum;
        self
    }
}

/// Append-only store of validated temperature samples
///
/// # Example
///
/// ```
/// use tempseries::prelude::*;
///
/// let mut store = SeriesStore::new();
/// assert_eq!(store.append(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
/// assert_eq!(store.append(&[4.0]).unwrap(), 10.0);
///
/// assert_eq!(store.len(), 4);
/// assert_eq!(store.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(store.average().unwrap(), 2.5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    /// Physical storage; `buffer.len()` is the capacity
    buffer: Vec<f64>,
    /// Number of valid samples at the front of `buffer`
    len: usize,
    config: SeriesConfig,
}

impl SeriesStore {
    /// Create an empty store with zero capacity and the default config
    pub fn new() -> Self {
        Self::with_config(SeriesConfig::default())
    }

    /// Create an empty store with zero capacity
    pub fn with_config(config: SeriesConfig) -> Self {
        Self {
            buffer: Vec::new(),
            len: 0,
            config,
        }
    }

    /// Create a store holding an exact-size copy of `samples`
    pub fn from_samples(samples: &[f64]) -> Result<Self, SeriesError> {
        Self::from_samples_with_config(samples, SeriesConfig::default())
    }

    /// Create a store holding an exact-size copy of `samples`
    ///
    /// Fails with [`SeriesError::InvalidSample`] if any sample is below
    /// [`ABSOLUTE_ZERO`].
    pub fn from_samples_with_config(
        samples: &[f64],
        config: SeriesConfig,
    ) -> Result<Self, SeriesError> {
        check_temperatures(samples)?;
        Ok(Self {
            buffer: samples.to_vec(),
            len: samples.len(),
            config,
        })
    }

    /// Append `samples` in order and return the sum of the whole series
    ///
    /// All-or-nothing: on any error the store is left untouched.
    pub fn append(&mut self, samples: &[f64]) -> Result<f64, SeriesError> {
        check_temperatures(samples)?;

        let capacity = self
            .config
            .growth
            .grow(self.len, self.buffer.len(), samples.len())?;
        if capacity > self.buffer.len() {
            debug_event!(
                from = self.buffer.len(),
                to = capacity,
                "growing series buffer"
            );
            self.buffer.resize(capacity, 0.0);
        }

        let end = self.len + samples.len();
        self.buffer[self.len..end].copy_from_slice(samples);
        self.len = end;

        Ok(self.sum())
    }

    /// Sum of the logical samples under the configured [`SumMode`]
    pub fn sum(&self) -> f64 {
        self.config.sum.sum(self.as_slice())
    }

    /// Physical capacity of the buffer
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn config(&self) -> SeriesConfig {
        self.config
    }

    /// Copy the logical samples out
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}

impl Series for SeriesStore {
    fn as_slice(&self) -> &[f64] {
        &self.buffer[..self.len]
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl PartialEq for SeriesStore {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.as_slice() == other.as_slice()
    }
}

impl TryFrom<&[f64]> for SeriesStore {
    type Error = SeriesError;

    fn try_from(samples: &[f64]) -> Result<Self, Self::Error> {
        Self::from_samples(samples)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SeriesStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SeriesStore", 2)?;
        state.serialize_field("samples", self.as_slice())?;
        state.serialize_field("config", &self.config)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SeriesStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct StoreData {
            samples: Vec<f64>,
            #[serde(default)]
            config: SeriesConfig,
        }

        let data = StoreData::deserialize(deserializer)?;
        SeriesStore::from_samples_with_config(&data.samples, data.config)
            .map_err(serde::de::Error::custom)
    }
}
