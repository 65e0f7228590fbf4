//! Block mask derivation from local color statistics
//!
//! Masks are built by tiling an image into uniform blocks, finding each
//! block's most frequent color, and thresholding the summed channel
//! intensity of that color into a black/white selection weight.

use crate::effects::pixelate::pixelate;
use crate::io::configuration::BLOCK_COLOR_BUDGET;
use crate::io::error::{GlitchError, Result, invalid_parameter};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbImage};
use rand::Rng;
use std::collections::HashMap;

/// Per-block tally of distinct pixel colors, bounded by an enumeration budget
///
/// Constructed per block and discarded immediately after the modal color is
/// read out.
struct ColorHistogram {
    counts: HashMap<[u8; 3], u32>,
    scan_order: Vec<[u8; 3]>,
    budget: usize,
}

impl ColorHistogram {
    fn new(budget: usize) -> Self {
        Self {
            counts: HashMap::new(),
            scan_order: Vec::new(),
            budget,
        }
    }

    /// Record one pixel, returning `false` once the distinct-color budget is
    /// exceeded
    fn record(&mut self, color: [u8; 3]) -> bool {
        let count = self.counts.entry(color).or_insert(0);
        if *count == 0 {
            if self.scan_order.len() >= self.budget {
                return false;
            }
            self.scan_order.push(color);
        }
        *count += 1;
        true
    }

    /// Most frequent color; ties break by first encounter in scan order
    fn modal_color(&self) -> Option<[u8; 3]> {
        let mut best: Option<([u8; 3], u32)> = None;
        for color in &self.scan_order {
            let count = self.counts.get(color).copied().unwrap_or(0);
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((*color, count)),
            }
        }
        best.map(|(color, _)| color)
    }
}

/// Top-left corners of every block that fits entirely inside the image
///
/// Blocks overflowing either axis are dropped, never evaluated; the mask
/// region beyond the last full block stays at the default black.
fn block_corners(width: u32, height: u32, block: u32) -> impl Iterator<Item = (u32, u32)> {
    let columns = width / block;
    let rows = height / block;
    (0..columns).flat_map(move |column| (0..rows).map(move |row| (column * block, row * block)))
}

/// Derive a black/white mask from per-block modal colors
///
/// A block is painted white when the summed channel intensity of its most
/// frequent color falls strictly below `threshold`; all other pixels stay
/// black. Output dimensions equal the input's.
///
/// # Errors
///
/// Returns [`GlitchError::HistogramOverflow`] when a block holds more
/// distinct colors than the enumeration budget allows, rather than guessing
/// a modal color for a pathological high-entropy region.
pub fn create_block_mask(image: &RgbImage, threshold: u32, block_size: u32) -> Result<GrayImage> {
    let (width, height) = image.dimensions();
    let block = block_size.max(1);
    let mut mask = GrayImage::new(width, height);

    for (corner_x, corner_y) in block_corners(width, height, block) {
        let mut histogram = ColorHistogram::new(BLOCK_COLOR_BUDGET);
        for y in corner_y..corner_y + block {
            for x in corner_x..corner_x + block {
                if !histogram.record(image.get_pixel(x, y).0) {
                    return Err(GlitchError::HistogramOverflow {
                        budget: BLOCK_COLOR_BUDGET,
                        block: (corner_x, corner_y),
                    });
                }
            }
        }

        let Some(modal) = histogram.modal_color() else {
            continue;
        };
        let intensity: u32 = modal.iter().map(|&channel| u32::from(channel)).sum();
        if intensity < threshold {
            for y in corner_y..corner_y + block {
                for x in corner_x..corner_x + block {
                    mask.put_pixel(x, y, Luma([255]));
                }
            }
        }
    }

    Ok(mask)
}

/// Derive an organically irregular mask from a pixelated view of `image`
///
/// Two block sizes are drawn independently from `[min_block, max_block]`: one
/// controls pixelation, the other mask tiling. Decorrelating the two keeps
/// the blockiness of color regions independent of the blockiness of mask
/// regions. The mask is optionally mirrored horizontally, then resized back
/// to the input's dimensions with a smooth triangle filter so block
/// boundaries soften into gradients.
///
/// # Errors
///
/// Returns [`GlitchError::InvalidParameter`] when `min_block` exceeds
/// `max_block`, and propagates [`GlitchError::HistogramOverflow`] from block
/// mask derivation.
pub fn random_pixel_mask<R: Rng>(
    image: &RgbImage,
    threshold: u32,
    flip: bool,
    min_block: u32,
    max_block: u32,
    rng: &mut R,
) -> Result<GrayImage> {
    if min_block > max_block || min_block == 0 {
        return Err(invalid_parameter(
            "block size range",
            &format!("[{min_block}, {max_block}]"),
            &"bounds must satisfy 1 <= min <= max",
        ));
    }

    let (width, height) = image.dimensions();
    let pixel_size = rng.random_range(min_block..=max_block);
    let tile_size = rng.random_range(min_block..=max_block);

    let pixelated = pixelate(image, pixel_size);
    let mut mask = create_block_mask(&pixelated, threshold, tile_size)?;
    if flip {
        mask = imageops::flip_horizontal(&mask);
    }
    Ok(imageops::resize(&mask, width, height, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::{ColorHistogram, block_corners, create_block_mask, random_pixel_mask};
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_histogram_ties_break_by_scan_order() {
        let mut histogram = ColorHistogram::new(16);
        assert!(histogram.record([9, 9, 9]));
        assert!(histogram.record([1, 1, 1]));
        assert!(histogram.record([1, 1, 1]));
        assert!(histogram.record([9, 9, 9]));
        // Both colors tally two; the first one scanned wins
        assert_eq!(histogram.modal_color(), Some([9, 9, 9]));
    }

    #[test]
    fn test_histogram_budget_overflow_is_reported() {
        let mut histogram = ColorHistogram::new(2);
        assert!(histogram.record([0, 0, 0]));
        assert!(histogram.record([1, 0, 0]));
        assert!(!histogram.record([2, 0, 0]));
    }

    #[test]
    fn test_block_corners_drop_overflowing_blocks() {
        let corners: Vec<(u32, u32)> = block_corners(25, 17, 10).collect();
        assert_eq!(corners, vec![(0, 0), (10, 0)]);
    }

    #[test]
    fn test_block_mask_preserves_dimensions() {
        let source = RgbImage::new(61, 43);
        for block_size in [1, 4, 10, 100] {
            let mask = create_block_mask(&source, 300, block_size).expect("mask derivation");
            assert_eq!(mask.dimensions(), (61, 43));
        }
    }

    #[test]
    fn test_uniform_dark_image_yields_all_white_mask() {
        // Summed intensity 3 * 50 = 150 < 300, so every block paints white
        let source = RgbImage::from_pixel(40, 40, Rgb([50, 50, 50]));
        let mask = create_block_mask(&source, 300, 10).expect("mask derivation");
        assert!(mask.pixels().all(|pixel| pixel.0 == [255]));
    }

    #[test]
    fn test_uniform_bright_image_yields_all_black_mask() {
        // Summed intensity 3 * 200 = 600 >= 300, so no block paints
        let source = RgbImage::from_pixel(40, 40, Rgb([200, 200, 200]));
        let mask = create_block_mask(&source, 300, 10).expect("mask derivation");
        assert!(mask.pixels().all(|pixel| pixel.0 == [0]));
    }

    #[test]
    fn test_random_pixel_mask_matches_source_dimensions() {
        let source = RgbImage::from_pixel(97, 53, Rgb([10, 10, 10]));
        let mut rng = StdRng::seed_from_u64(7);
        let mask = random_pixel_mask(&source, 400, true, 5, 20, &mut rng).expect("mask derivation");
        assert_eq!(mask.dimensions(), (97, 53));
    }

    #[test]
    fn test_random_pixel_mask_rejects_inverted_range() {
        let source = RgbImage::new(32, 32);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_pixel_mask(&source, 400, false, 20, 5, &mut rng).is_err());
    }
}
