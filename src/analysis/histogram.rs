//! Equal-width binning of a sequence for the distribution plot

use crate::io::error::{Result, invalid_parameter};
use num_traits::ToPrimitive;

/// Frequency counts over equal-width buckets spanning the data range
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<usize>,
    lower: f64,
    upper: f64,
}

impl Histogram {
    /// Bin `values` into `bins` buckets over `[min, max]`
    ///
    /// A constant sequence is binned over `[v - 0.5, v + 0.5]` and an empty one
    /// over `[0, 1]`. The last bucket is closed on the right. Non-finite values
    /// are left out.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `bins` is zero
    pub fn from_values<F: ToPrimitive>(values: &[F], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(invalid_parameter(
                "bins",
                &bins,
                &"histogram needs at least one bucket",
            ));
        }

        let finite: Vec<f64> = values
            .iter()
            .filter_map(ToPrimitive::to_f64)
            .filter(|v| v.is_finite())
            .collect();

        let (lower, upper) = Self::range(&finite);
        let width = (upper - lower) / bins as f64;
        let last = bins - 1;

        let mut counts = vec![0; bins];
        for value in finite {
            let index = (((value - lower) / width).floor() as usize).min(last);
            if let Some(count) = counts.get_mut(index) {
                *count += 1;
            }
        }

        Ok(Self {
            counts,
            lower,
            upper,
        })
    }

    fn range(values: &[f64]) -> (f64, f64) {
        let bounds = values.iter().fold(None, |acc: Option<(f64, f64)>, &v| {
            Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
        });

        match bounds {
            None => (0.0, 1.0),
            Some((lo, hi)) if hi <= lo => (lo - 0.5, hi + 0.5),
            Some(range) => range,
        }
    }

    /// Count in each bucket, lowest range first
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of buckets
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Lower edge of the first bucket
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper edge of the last bucket
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Width shared by every bucket
    pub fn bucket_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// The `bins + 1` bucket edges
    pub fn edges(&self) -> Vec<f64> {
        let width = self.bucket_width();
        (0..=self.counts.len())
            .map(|i| (i as f64).mul_add(width, self.lower))
            .collect()
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bucket count, zero for an empty histogram
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
