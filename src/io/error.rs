//! Error types for glitch generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all glitch generation operations
#[derive(Debug)]
pub enum GlitchError {
    /// The image pool holds fewer images than an operation requires
    ///
    /// Channel recombination draws three distinct source images, so any
    /// pool smaller than that cannot be glitched.
    PoolTooSmall {
        /// Number of images the operation needs
        required: usize,
        /// Number of images actually available
        available: usize,
    },

    /// A mask block contained more distinct colors than the histogram budget
    ///
    /// Indicates a pathological high-entropy region; mask generation aborts
    /// rather than guessing a modal color.
    HistogramOverflow {
        /// Distinct-color budget that was exceeded
        budget: usize,
        /// Top-left corner of the offending block
        block: (u32, u32),
    },

    /// Two images entering a per-pixel operation differ in size
    DimensionMismatch {
        /// Operation that required matching dimensions
        operation: &'static str,
        /// Dimensions of the first operand
        expected: (u32, u32),
        /// Dimensions of the mismatched operand
        actual: (u32, u32),
    },

    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode the generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for GlitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "Image pool holds {available} usable images but {required} are required"
                )
            }
            Self::HistogramOverflow { budget, block } => {
                write!(
                    f,
                    "Block at ({}, {}) exceeds the {budget}-color histogram budget",
                    block.0, block.1
                )
            }
            Self::DimensionMismatch {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {operation}: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GlitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for glitch generation results
pub type Result<T> = std::result::Result<T, GlitchError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GlitchError {
    GlitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
