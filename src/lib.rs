//! Procedural glitch art generation from a pool of source images
//!
//! The system loads a directory of source images, normalizes them to a common
//! size, and recombines them through a small set of composable pixel-level
//! transforms: pixelation-driven masking, cross-image channel recombination,
//! offset ghosting, and striped splicing.

#![forbid(unsafe_code)]

/// Core pixel transforms: pixelation, masking, channel merging, offsetting,
/// splicing, and mask-weighted compositing
pub mod effects;
/// Input/output boundary: errors, configuration, CLI, file handling
pub mod io;
/// Image pool management and the fixed generation recipes
pub mod pipeline;

pub use io::error::{GlitchError, Result};
