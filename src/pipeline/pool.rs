//! Source image pool normalization

use crate::io::configuration::FIXED_DIMENSIONS;
use crate::io::error::{GlitchError, Result};
use clap::ValueEnum;
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Policy for normalizing pool images to uniform dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResizePolicy {
    /// Largest width and largest height across the pool, each axis independently
    Max,
    /// Smallest width and smallest height across the pool, each axis independently
    Min,
    /// Constant 800x800
    Fixed,
}

/// Ordered, read-only collection of size-normalized source images
///
/// The canonical pool is never mutated during generation; recipes that
/// replace a pool entry do so on a per-call working copy.
#[derive(Debug, Clone)]
pub struct ImagePool {
    images: Vec<RgbImage>,
    dimensions: (u32, u32),
}

impl ImagePool {
    /// Normalize `images` to uniform dimensions under `policy`
    ///
    /// Images already at the target size are kept as-is; the rest are
    /// resampled with a smooth Lanczos filter.
    ///
    /// # Errors
    ///
    /// Returns [`GlitchError::PoolTooSmall`] when `images` is empty, since no
    /// target dimensions can be derived.
    pub fn new(images: Vec<RgbImage>, policy: ResizePolicy) -> Result<Self> {
        let dimensions = target_dimensions(&images, policy)?;
        let images = images
            .into_iter()
            .map(|image| {
                if image.dimensions() == dimensions {
                    image
                } else {
                    imageops::resize(&image, dimensions.0, dimensions.1, FilterType::Lanczos3)
                }
            })
            .collect();
        Ok(Self { images, dimensions })
    }

    /// Normalized source images, in load order
    pub fn images(&self) -> &[RgbImage] {
        &self.images
    }

    /// Uniform dimensions shared by every pool image
    pub const fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Number of images in the pool
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the pool holds no images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn target_dimensions(images: &[RgbImage], policy: ResizePolicy) -> Result<(u32, u32)> {
    if images.is_empty() {
        return Err(GlitchError::PoolTooSmall {
            required: 1,
            available: 0,
        });
    }
    let dimensions = match policy {
        ResizePolicy::Fixed => FIXED_DIMENSIONS,
        ResizePolicy::Max => images.iter().fold((0, 0), |extreme, image| {
            (
                extreme.0.max(image.width()),
                extreme.1.max(image.height()),
            )
        }),
        ResizePolicy::Min => images
            .iter()
            .fold((u32::MAX, u32::MAX), |extreme, image| {
                (
                    extreme.0.min(image.width()),
                    extreme.1.min(image.height()),
                )
            }),
    };
    Ok(dimensions)
}
