//! Nearest-neighbor pixelation producing blocky, posterized imagery

use image::RgbImage;
use image::imageops::{self, FilterType};

/// Collapse each `block_size` x `block_size` region to one representative color
///
/// Downsamples with nearest-neighbor resampling to one sample per block, then
/// upsamples back to the original dimensions with the same filter, so the
/// output always matches the input's size. A block size exceeding an image
/// axis clamps that axis to a single sample rather than producing a
/// degenerate zero-size intermediate.
pub fn pixelate(image: &RgbImage, block_size: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let block = block_size.max(1);
    let down_width = width.div_ceil(block).max(1);
    let down_height = height.div_ceil(block).max(1);
    let downsampled = imageops::resize(image, down_width, down_height, FilterType::Nearest);
    imageops::resize(&downsampled, width, height, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::pixelate;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_pixelate_preserves_dimensions() {
        let source = RgbImage::new(97, 53);
        for block_size in [1, 7, 20, 200] {
            let result = pixelate(&source, block_size);
            assert_eq!(result.dimensions(), (97, 53));
        }
    }

    #[test]
    fn test_pixelate_uniform_image_is_unchanged() {
        let source = RgbImage::from_pixel(40, 40, Rgb([120, 30, 200]));
        let result = pixelate(&source, 8);
        assert_eq!(result.as_raw(), source.as_raw());
    }

    #[test]
    fn test_pixelate_flattens_each_block_to_one_color() {
        let mut source = RgbImage::from_pixel(16, 16, Rgb([10, 10, 10]));
        source.put_pixel(12, 3, Rgb([250, 0, 0]));
        let result = pixelate(&source, 8);

        // Every pixel within an 8x8 block shares the block's sampled color
        for block_x in 0..2 {
            for block_y in 0..2 {
                let representative = *result.get_pixel(block_x * 8, block_y * 8);
                for x in 0..8 {
                    for y in 0..8 {
                        assert_eq!(*result.get_pixel(block_x * 8 + x, block_y * 8 + y), representative);
                    }
                }
            }
        }
    }
}
