//! Immutable summary snapshot

/// Average, population variance, min and max of a series at one point in time
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub average: f64,
    /// Population variance
    pub deviation: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

impl SummaryStatistics {
    pub fn new(average: f64, deviation: f64, min: f64, max: f64) -> Self {
        Self {
            average,
            deviation,
            min,
            max,
        }
    }

    /// Spread between the largest and smallest sample
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
