//! Deterministic pseudo-random sequences from the Itamaracá three-seed recurrence
//!
//! Each value is `|scale - |S2 - S0| * weight|`, where `S0..S2` is a rolling
//! window over the three most recent values. The crate also bins and
//! summarises sequences and renders them as histogram and trace plots.

#![forbid(unsafe_code)]

/// Summary statistics and histogram binning of generated sequences
pub mod analysis;
/// The recurrence generator, its seed window and parameters
pub mod generator;
/// Input/output operations and error handling
pub mod io;

pub use generator::{GenerationParameters, RecurrenceGenerator, generate};
pub use io::error::{GeneratorError, Result};
