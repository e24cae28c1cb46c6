//! Statistics over a temperature series
//!
//! The [`Statistics`] trait is implemented for every [`Series`](crate::traits::Series),
//! so bringing it into scope is enough to query a store.
//!
//! # Example
//!
//! ```
//! use tempseries::series::SeriesStore;
//! use tempseries::statistics::Statistics;
//!
//! let store = SeriesStore::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! let summary = store.summary().unwrap();
//! println!("Average: {}", summary.average);
//! println!("Deviation: {}", summary.deviation);
//! println!("Min: {}", summary.min);
//! println!("Max: {}", summary.max);
//! ```

mod descriptive;
mod summary;

pub use descriptive::Statistics;
pub use summary::SummaryStatistics;
