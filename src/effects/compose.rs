//! Mask-weighted per-pixel compositing

use crate::io::error::{GlitchError, Result};
use image::{GrayImage, Rgb, RgbImage};

/// Blend two images per pixel using a grayscale mask as selection weight
///
/// A mask value of 255 selects `image_a`, 0 selects `image_b`, and
/// intermediate values interpolate linearly. Purely functional; inputs are
/// never modified.
///
/// # Errors
///
/// Returns [`GlitchError::DimensionMismatch`] when either `image_b` or the
/// mask differs in size from `image_a`; mismatched inputs are a precondition
/// violation, never silently cropped or stretched.
pub fn composite_with_mask(
    image_a: &RgbImage,
    image_b: &RgbImage,
    mask: &GrayImage,
) -> Result<RgbImage> {
    let dimensions = image_a.dimensions();
    for actual in [image_b.dimensions(), mask.dimensions()] {
        if actual != dimensions {
            return Err(GlitchError::DimensionMismatch {
                operation: "composite",
                expected: dimensions,
                actual,
            });
        }
    }

    let mut blended = RgbImage::new(dimensions.0, dimensions.1);
    for (x, y, pixel) in blended.enumerate_pixels_mut() {
        let weight = u32::from(mask.get_pixel(x, y).0[0]);
        let foreground = image_a.get_pixel(x, y).0;
        let background = image_b.get_pixel(x, y).0;
        let mut channels = [0u8; 3];
        for slot in 0..3 {
            let mixed = u32::from(foreground[slot]) * weight
                + u32::from(background[slot]) * (255 - weight);
            // Rounded division keeps the endpoints exact
            channels[slot] = ((mixed + 127) / 255) as u8;
        }
        *pixel = Rgb(channels);
    }
    Ok(blended)
}

#[cfg(test)]
mod tests {
    use super::composite_with_mask;
    use crate::io::error::GlitchError;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_mask_extremes_select_inputs_exactly() {
        let image_a = RgbImage::from_pixel(16, 16, Rgb([200, 40, 90]));
        let image_b = RgbImage::from_pixel(16, 16, Rgb([5, 250, 130]));
        let mut mask = GrayImage::from_pixel(16, 16, Luma([0]));
        for x in 0..8 {
            for y in 0..16 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }

        let blended = composite_with_mask(&image_a, &image_b, &mask).expect("composite");
        for (x, _, pixel) in blended.enumerate_pixels() {
            if x < 8 {
                assert_eq!(pixel.0, [200, 40, 90]);
            } else {
                assert_eq!(pixel.0, [5, 250, 130]);
            }
        }
    }

    #[test]
    fn test_midpoint_mask_blends_linearly() {
        let image_a = RgbImage::from_pixel(4, 4, Rgb([200, 0, 100]));
        let image_b = RgbImage::from_pixel(4, 4, Rgb([0, 200, 100]));
        let mask = GrayImage::from_pixel(4, 4, Luma([128]));

        let blended = composite_with_mask(&image_a, &image_b, &mask).expect("composite");
        let pixel = blended.get_pixel(0, 0).0;
        assert!(pixel[0].abs_diff(100) <= 1);
        assert!(pixel[1].abs_diff(100) <= 1);
        assert_eq!(pixel[2], 100);
    }

    #[test]
    fn test_mismatched_mask_fails_loudly() {
        let image_a = RgbImage::new(16, 16);
        let image_b = RgbImage::new(16, 16);
        let mask = GrayImage::new(8, 8);
        assert!(matches!(
            composite_with_mask(&image_a, &image_b, &mask),
            Err(GlitchError::DimensionMismatch { .. })
        ));
    }
}
