//! Cross-image color channel recombination

use crate::io::error::{GlitchError, Result};
use image::{Rgb, RgbImage};
use rand::Rng;
use rand::seq::index;

/// Number of source images drawn for one recombination
const SOURCE_COUNT: usize = 3;

/// Rebuild a color image from channels of three random pool images
///
/// Draws three distinct images from the pool, splits them into their nine
/// constituent color channels, samples three of those channels without
/// replacement, and merges them in pick order as red, green, and blue. The
/// result superimposes spatial structure from up to three source images in
/// different channels.
///
/// # Errors
///
/// Returns [`GlitchError::PoolTooSmall`] when the pool holds fewer than
/// three images, and [`GlitchError::DimensionMismatch`] when the selected
/// images are not size-normalized.
pub fn random_channel_merge<R: Rng>(pool: &[RgbImage], rng: &mut R) -> Result<RgbImage> {
    if pool.len() < SOURCE_COUNT {
        return Err(GlitchError::PoolTooSmall {
            required: SOURCE_COUNT,
            available: pool.len(),
        });
    }

    let picks = index::sample(rng, pool.len(), SOURCE_COUNT);
    let mut selected = picks.iter().filter_map(|index| pool.get(index));
    let (Some(first), Some(second), Some(third)) =
        (selected.next(), selected.next(), selected.next())
    else {
        return Err(GlitchError::PoolTooSmall {
            required: SOURCE_COUNT,
            available: pool.len(),
        });
    };

    let sources = [first, second, third];
    let dimensions = first.dimensions();
    for source in sources {
        if source.dimensions() != dimensions {
            return Err(GlitchError::DimensionMismatch {
                operation: "channel merge",
                expected: dimensions,
                actual: source.dimensions(),
            });
        }
    }

    // Nine channels total; picks map in order onto the output's R, G, B
    let channel_picks: Vec<(usize, usize)> = index::sample(rng, SOURCE_COUNT * 3, 3)
        .iter()
        .map(|flat| (flat / 3, flat % 3))
        .collect();

    let mut merged = RgbImage::new(dimensions.0, dimensions.1);
    for (x, y, pixel) in merged.enumerate_pixels_mut() {
        let mut channels = [0u8; 3];
        for (slot, &(source, channel)) in channel_picks.iter().enumerate() {
            channels[slot] = sources[source].get_pixel(x, y).0[channel];
        }
        *pixel = Rgb(channels);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::random_channel_merge;
    use crate::io::error::GlitchError;
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn uniform_pool() -> Vec<RgbImage> {
        vec![
            RgbImage::from_pixel(24, 24, Rgb([10, 10, 10])),
            RgbImage::from_pixel(24, 24, Rgb([20, 20, 20])),
            RgbImage::from_pixel(24, 24, Rgb([30, 30, 30])),
            RgbImage::from_pixel(24, 24, Rgb([40, 40, 40])),
        ]
    }

    #[test]
    fn test_merge_preserves_pool_dimensions() {
        let pool = uniform_pool();
        let mut rng = StdRng::seed_from_u64(11);
        let merged = random_channel_merge(&pool, &mut rng).expect("channel merge");
        assert_eq!(merged.dimensions(), (24, 24));
    }

    #[test]
    fn test_merge_channels_come_from_pool_images() {
        // Each pool image is uniform, so every output channel must equal one
        // of the pool's channel values
        let pool = uniform_pool();
        let mut rng = StdRng::seed_from_u64(3);
        let merged = random_channel_merge(&pool, &mut rng).expect("channel merge");
        for pixel in merged.pixels() {
            for channel in pixel.0 {
                assert!([10, 20, 30, 40].contains(&channel));
            }
        }
    }

    #[test]
    fn test_undersized_pool_is_rejected() {
        let pool = vec![RgbImage::new(8, 8), RgbImage::new(8, 8)];
        let mut rng = StdRng::seed_from_u64(1);
        match random_channel_merge(&pool, &mut rng) {
            Err(GlitchError::PoolTooSmall {
                required,
                available,
            }) => {
                assert_eq!(required, 3);
                assert_eq!(available, 2);
            }
            other => unreachable!("expected PoolTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_pool_images_are_rejected() {
        let pool = vec![
            RgbImage::new(8, 8),
            RgbImage::new(8, 8),
            RgbImage::new(9, 8),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_channel_merge(&pool, &mut rng),
            Err(GlitchError::DimensionMismatch { .. })
        ));
    }
}
