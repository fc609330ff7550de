//! Fixed three-slot window over the most recent recurrence values

use crate::io::configuration::SEED_WINDOW_LEN;
use crate::io::error::{GeneratorError, Result};
use num_traits::Float;

/// The three most recent values, oldest first
///
/// Starts out holding the caller's seeds and fills with generated values
/// as the recurrence advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedWindow<F> {
    slots: [F; SEED_WINDOW_LEN],
}

impl<F: Float> SeedWindow<F> {
    /// Build a window from exactly three seeds
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeedCount` if `seeds` does not hold exactly three values
    pub fn from_slice(seeds: &[F]) -> Result<Self> {
        let slots: [F; SEED_WINDOW_LEN] =
            seeds.try_into().map_err(|_e| GeneratorError::InvalidSeedCount {
                expected: SEED_WINDOW_LEN,
                found: seeds.len(),
            })?;
        Ok(Self { slots })
    }

    /// Oldest entry (S0)
    pub const fn oldest(&self) -> F {
        self.slots[0]
    }

    /// Middle entry (S1)
    pub const fn middle(&self) -> F {
        self.slots[1]
    }

    /// Newest entry (S2)
    pub const fn newest(&self) -> F {
        self.slots[2]
    }

    /// Absolute difference between the newest and oldest entries
    pub fn spread(&self) -> F {
        (self.newest() - self.oldest()).abs()
    }

    /// Drop the oldest entry and append `value` as the newest
    pub fn advance(&mut self, value: F) {
        self.slots.rotate_left(1);
        self.slots[SEED_WINDOW_LEN - 1] = value;
    }

    /// Window contents, oldest first
    pub const fn as_array(&self) -> [F; SEED_WINDOW_LEN] {
        self.slots
    }
}
