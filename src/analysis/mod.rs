//! Analysis of generated sequences for reporting and plotting

/// Equal-width bucketing for the distribution plot
pub mod histogram;
/// Mean, spread and range of a sequence
pub mod statistics;
