//! Three-seed recurrence generator and its supporting types

/// Stepping generator and the one-shot `generate` entry points
pub mod recurrence;
/// Floating point types the generator can run over
pub mod sample;
/// Rolling window of the three most recent values
pub mod window;

pub use recurrence::{GenerationParameters, RecurrenceGenerator, generate, generate_with_observer};
pub use sample::SampleValue;
pub use window::SeedWindow;
