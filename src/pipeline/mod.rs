//! Image pool management and the fixed generation recipes

/// Fixed recipes that turn a pool into one glitched output
pub mod generator;
/// Pool normalization and resize policy
pub mod pool;
