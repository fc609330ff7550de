//! Numeric element type shared by the generator, statistics and exporters

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating point type a sequence can be generated in
///
/// Carries the default weight as a native constant so `1.97` is not routed
/// through another precision before use.
pub trait SampleValue: Float + Display + Debug + Send + Sync + 'static {
    /// Weight applied to the seed difference when none is given
    const DEFAULT_WEIGHT: Self;
}

impl SampleValue for f64 {
    const DEFAULT_WEIGHT: Self = crate::io::configuration::DEFAULT_WEIGHT;
}

impl SampleValue for f32 {
    const DEFAULT_WEIGHT: Self = 1.97;
}
