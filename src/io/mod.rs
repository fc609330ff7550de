//! Input/output: CLI, plot rendering, CSV export, progress and errors

/// Command-line parsing and the run driver
pub mod cli;
/// Defaults and presentation constants
pub mod configuration;
/// Crate error type
pub mod error;
/// CSV export of generated sequences
pub mod export;
/// PNG rendering of the histogram and trace plots
pub mod plot;
/// Terminal progress display
pub mod progress;
