//! Toroidal offsetting and self-referential ghosting

use crate::effects::compose::composite_with_mask;
use crate::effects::mask::random_pixel_mask;
use crate::io::configuration::{MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
use crate::io::error::Result;
use image::RgbImage;
use rand::Rng;

/// Cyclically shift pixel content by `offset` along both axes
///
/// Content leaving one edge wraps back in at the opposite edge rather than
/// being clipped. An offset of zero (or any multiple of an axis length along
/// that axis) is the identity. The output is a structurally independent
/// buffer even though it only reads from the source.
pub fn offset_image(image: &RgbImage, offset: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut shifted = RgbImage::new(width, height);
    if width == 0 || height == 0 {
        return shifted;
    }
    // Reduce once so any u32 offset stays clear of addition overflow
    let shift_x = offset % width;
    let shift_y = offset % height;
    for (x, y, pixel) in image.enumerate_pixels() {
        shifted.put_pixel((x + shift_x) % width, (y + shift_y) % height, *pixel);
    }
    shifted
}

/// Ghost an image with a shifted copy of itself
///
/// Computes the toroidally offset copy, derives a random pixel mask from the
/// original at `threshold`, and composites the offset copy over the original
/// through that mask. The double-exposure trail comes from the image itself
/// rather than a second pool source.
///
/// # Errors
///
/// Propagates mask-derivation failures from [`random_pixel_mask`].
pub fn self_glitch<R: Rng>(
    image: &RgbImage,
    offset: u32,
    threshold: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let ghost = offset_image(image, offset);
    let mask = random_pixel_mask(image, threshold, true, MIN_BLOCK_SIZE, MAX_BLOCK_SIZE, rng)?;
    composite_with_mask(&ghost, image, &mask)
}
