//! Itamaracá recurrence: `value = |scale - |S2 - S0| * weight|`
//!
//! Each step reads the oldest and newest window entries, emits one value and
//! shifts that value into the window. The map is pure and uses no entropy, so
//! identical parameters always reproduce the same sequence bit for bit.

use crate::generator::sample::SampleValue;
use crate::generator::window::SeedWindow;
use crate::io::error::{GeneratorError, Result};

/// Immutable inputs for one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters<F> {
    /// Number of values to produce
    pub count: usize,
    /// Magnitude constant the weighted seed difference is subtracted from
    pub scale: F,
    /// Initial window contents, oldest first
    pub initial_seeds: Vec<F>,
    /// Multiplier applied to the seed difference
    pub weight: F,
}

impl<F: SampleValue> GenerationParameters<F> {
    /// Parameters using the default weight
    pub fn new(count: usize, scale: F, initial_seeds: Vec<F>) -> Self {
        Self {
            count,
            scale,
            initial_seeds,
            weight: F::DEFAULT_WEIGHT,
        }
    }

    /// Replace the weight
    #[must_use]
    pub fn with_weight(mut self, weight: F) -> Self {
        self.weight = weight;
        self
    }

    /// Check the seed count and scale without generating anything
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeedCount` or `InvalidScale` on bad input
    pub fn validate(&self) -> Result<()> {
        RecurrenceGenerator::new(self.scale, &self.initial_seeds, self.weight).map(|_| ())
    }
}

/// Stepping form of the recurrence
///
/// Yields values forever when used as an iterator; pair with `take`.
#[derive(Debug, Clone)]
pub struct RecurrenceGenerator<F> {
    window: SeedWindow<F>,
    scale: F,
    weight: F,
}

impl<F: SampleValue> RecurrenceGenerator<F> {
    /// Create a generator from a scale, three seeds and a weight
    ///
    /// The weight is unconstrained in sign and magnitude.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeedCount` unless exactly three seeds are supplied, and
    /// `InvalidScale` unless `scale` is strictly positive (NaN included)
    pub fn new(scale: F, seeds: &[F], weight: F) -> Result<Self> {
        let window = SeedWindow::from_slice(seeds)?;

        if scale.is_nan() || scale <= F::zero() {
            return Err(GeneratorError::InvalidScale {
                value: scale.to_string(),
            });
        }

        Ok(Self {
            window,
            scale,
            weight,
        })
    }

    /// Create a generator from a parameter bundle, ignoring its count
    ///
    /// # Errors
    ///
    /// Same conditions as [`RecurrenceGenerator::new`]
    pub fn from_parameters(params: &GenerationParameters<F>) -> Result<Self> {
        Self::new(params.scale, &params.initial_seeds, params.weight)
    }

    /// Compute the next value and advance the window
    pub fn next_value(&mut self) -> F {
        let pn = self.window.spread();
        // Kept as a separate multiply and subtract; mul_add would round differently
        #[allow(clippy::suboptimal_flops)]
        let value = (self.scale - pn * self.weight).abs();
        self.window.advance(value);
        value
    }

    /// Current window contents
    pub const fn window(&self) -> &SeedWindow<F> {
        &self.window
    }

    /// Scale in use
    pub const fn scale(&self) -> F {
        self.scale
    }

    /// Weight in use
    pub const fn weight(&self) -> F {
        self.weight
    }
}

impl<F: SampleValue> Iterator for RecurrenceGenerator<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Produce `params.count` values from a fresh window
///
/// # Errors
///
/// Returns `InvalidSeedCount` or `InvalidScale` before any value is computed
pub fn generate<F: SampleValue>(params: &GenerationParameters<F>) -> Result<Vec<F>> {
    generate_with_observer(params, |_| {})
}

/// Like [`generate`], calling `observer` after each step with the number of
/// values produced so far
///
/// # Errors
///
/// Returns `InvalidSeedCount` or `InvalidScale` before any value is computed;
/// the observer is never called in that case
pub fn generate_with_observer<F, O>(
    params: &GenerationParameters<F>,
    mut observer: O,
) -> Result<Vec<F>>
where
    F: SampleValue,
    O: FnMut(usize),
{
    let mut generator = RecurrenceGenerator::from_parameters(params)?;
    let mut sequence = Vec::with_capacity(params.count);

    for produced in 1..=params.count {
        sequence.push(generator.next_value());
        observer(produced);
    }

    Ok(sequence)
}
