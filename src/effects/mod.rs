//! Composable pixel-level glitch transforms
//!
//! Every transform takes its inputs by reference and returns a freshly
//! allocated buffer; source images are never mutated in place.

/// Cross-image color channel recombination
pub mod channels;
/// Mask-weighted per-pixel compositing
pub mod compose;
/// Block mask derivation from local color statistics
pub mod mask;
/// Toroidal offsetting and self-referential ghosting
pub mod offset;
/// Nearest-neighbor pixelation
pub mod pixelate;
/// Horizontal stripe splicing with cyclic offsets
pub mod splice;
