//! # Tempseries
//!
//! Validated temperature series with on-demand summary statistics.
//!
//! A [`SeriesStore`] holds an append-only sequence of temperature samples in
//! degrees Celsius. Every sample is checked against absolute zero on the way
//! in, and the [`Statistics`](statistics::Statistics) trait answers queries
//! over the stored samples: mean, population variance, extremes, the sample
//! closest to a target, and threshold filters.
//!
//! ## Quick Start
//!
//! ```rust
//! use tempseries::prelude::*;
//!
//! let mut store = SeriesStore::from_samples(&[-2.0, 2.0]).unwrap();
//! store.append(&[5.5, 18.0]).unwrap();
//!
//! assert_eq!(store.len(), 4);
//! assert_eq!(store.find_closest_to_zero().unwrap(), 2.0);
//!
//! let summary = store.summary().unwrap();
//! println!("avg {} var {} [{}, {}]", summary.average, summary.deviation, summary.min, summary.max);
//! ```
//!
//! ## Errors
//!
//! Samples below absolute zero are rejected with
//! [`SeriesError::InvalidSample`] and leave the store untouched:
//!
//! ```rust
//! use tempseries::prelude::*;
//!
//! let mut store = SeriesStore::new();
//! assert!(matches!(
//!     store.append(&[-300.0]),
//!     Err(SeriesError::InvalidSample { .. })
//! ));
//! assert_eq!(store.average(), Err(SeriesError::EmptySeries));
//! ```
//!
//! ## Compatibility Modes
//!
//! [`SeriesConfig::strict_replica`] selects bit-compatible buffer growth and
//! an integer-truncating sum. The default config grows correctly
//! and sums in floating point.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization
//! - `tracing`: Emit `tracing` events on buffer growth and rejected samples
//! - `full`: Enable everything

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Event helpers that compile to nothing without the `tracing` feature
macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}

pub mod traits;

mod math;

pub mod series;

pub mod statistics;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::series::{GrowthPolicy, SeriesConfig, SeriesStore, SumMode};

    pub use crate::statistics::{Statistics, SummaryStatistics};
}

pub use series::{SeriesConfig, SeriesStore};
pub use statistics::{Statistics, SummaryStatistics};
pub use traits::{Series, SeriesError};
