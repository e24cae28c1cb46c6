//! Validated temperature storage
//!
//! [`SeriesStore`] is an append-only buffer of temperature samples. Every
//! sample passes [`check_temperatures`] before it is stored, so the store
//! never holds a value below [`ABSOLUTE_ZERO`].
//!
//! # Example
//!
//! ```
//! use tempseries::series::{GrowthPolicy, SeriesConfig, SeriesStore, SumMode};
//! use tempseries::traits::Series;
//!
//! let config = SeriesConfig::default()
//!     .with_growth(GrowthPolicy::Doubling)
//!     .with_sum(SumMode::Truncating);
//! let mut store = SeriesStore::with_config(config);
//!
//! let total = store.append(&[20.5, 21.7, 19.9]).unwrap();
//! // 20.5 -> 20, 20 + 21.7 -> 41, 41 + 19.9 -> 60
//! assert_eq!(total, 60.0);
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.capacity(), 4);
//! ```

mod store;

pub use store::{
    check_temperatures, GrowthPolicy, SeriesConfig, SeriesStore, SumMode, ABSOLUTE_ZERO,
};
