//! Summary statistics over a generated sequence

use crate::generator::SampleValue;
use crate::io::configuration::SUMMARY_PRECISION;
use std::fmt;

/// Location and spread of a non-empty sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics<F> {
    /// Number of values summarised
    pub count: usize,
    /// Arithmetic mean
    pub mean: F,
    /// Population standard deviation (divides by `count`)
    pub std_dev: F,
    /// Smallest value
    pub min: F,
    /// Largest value
    pub max: F,
}

impl<F: SampleValue> SummaryStatistics<F> {
    /// Summarise `values`, or `None` when there is nothing to summarise
    pub fn from_values(values: &[F]) -> Option<Self> {
        let count = values.len();
        let n: F = num_traits::cast(count)?;
        let (&first, _) = values.split_first()?;

        let mut sum = F::zero();
        let mut min = first;
        let mut max = first;
        for &value in values {
            sum = sum + value;
            min = min.min(value);
            max = max.max(value);
        }
        let mean = sum / n;

        // Two-pass form, matching the usual population definition
        let squared_deviations = values
            .iter()
            .map(|&value| (value - mean).powi(2))
            .fold(F::zero(), |acc, sq| acc + sq);
        let std_dev = (squared_deviations / n).sqrt();

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }
}

impl<F: SampleValue> fmt::Display for SummaryStatistics<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean: {:.*}", SUMMARY_PRECISION, self.mean)?;
        write!(f, "Standard Deviation: {:.*}", SUMMARY_PRECISION, self.std_dev)
    }
}
