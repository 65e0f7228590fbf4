//! Fixed recipes that turn the image pool into one glitched output
//!
//! The recipes are fixed in structure and stochastic in content: every
//! random draw comes from the caller's generator, so a seeded generator
//! reproduces an output exactly while the default entropy-seeded one never
//! does.

use crate::effects::channels::random_channel_merge;
use crate::effects::compose::composite_with_mask;
use crate::effects::mask::random_pixel_mask;
use crate::effects::offset::self_glitch;
use crate::effects::splice::splice_and_offset;
use crate::io::configuration::{
    GHOST_OFFSET, GHOST_THRESHOLD, MAX_BLOCK_SIZE, MAX_STRIPES, MIN_BLOCK_SIZE, MIN_STRIPES,
    STRIPE_WAVE,
};
use crate::io::error::{GlitchError, Result};
use crate::pipeline::pool::ImagePool;
use image::RgbImage;
use image::imageops;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Composite a random working-copy image with itself through a noise mask
///
/// Nearly a pass-through: every pixel blends with itself, so only the slight
/// resolution loss introduced by mask resampling distinguishes the result
/// from its source. Kept deliberately; the reference recipe behaves this way.
fn masked_self_composite<R: Rng>(
    working: &[RgbImage],
    threshold: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let pick = working.choose(rng).ok_or(GlitchError::PoolTooSmall {
        required: 1,
        available: 0,
    })?;
    let mask = random_pixel_mask(pick, threshold, true, MIN_BLOCK_SIZE, MAX_BLOCK_SIZE, rng)?;
    composite_with_mask(pick, pick, &mask)
}

/// Run the stripe-splice recipe over the pool
///
/// Steps, on a working copy of the pool (the canonical pool is never
/// mutated):
///
/// 1. Replace one random entry with its stripe-spliced variant, stripe count
///    drawn from the configured range.
/// 2. Derive one branch by self-compositing a random entry through a noise
///    mask at `threshold`, and a second branch the same way at double the
///    threshold.
/// 3. Ghost the first branch against itself, then mirror it horizontally.
/// 4. Composite the branches through a final mask derived from the spliced
///    entry at `threshold`.
///
/// # Errors
///
/// Returns [`GlitchError::PoolTooSmall`] on an empty pool and propagates
/// mask-derivation and compositing failures.
pub fn generate<R: Rng>(pool: &ImagePool, threshold: u32, rng: &mut R) -> Result<RgbImage> {
    if pool.is_empty() {
        return Err(GlitchError::PoolTooSmall {
            required: 1,
            available: 0,
        });
    }
    let mut working: Vec<RgbImage> = pool.images().to_vec();

    let splice_index = rng.random_range(0..working.len());
    let stripe_count = rng.random_range(MIN_STRIPES..=MAX_STRIPES);
    if let Some(slot) = working.get_mut(splice_index) {
        let spliced = splice_and_offset(slot, stripe_count, &STRIPE_WAVE);
        *slot = spliced;
    }

    let branch_a = masked_self_composite(&working, threshold, rng)?;
    let branch_b = masked_self_composite(&working, threshold.saturating_mul(2), rng)?;

    let ghosted = self_glitch(&branch_a, GHOST_OFFSET, GHOST_THRESHOLD, rng)?;
    let mirrored = imageops::flip_horizontal(&ghosted);

    let spliced = working.get(splice_index).ok_or(GlitchError::PoolTooSmall {
        required: 1,
        available: 0,
    })?;
    let final_mask =
        random_pixel_mask(spliced, threshold, true, MIN_BLOCK_SIZE, MAX_BLOCK_SIZE, rng)?;

    composite_with_mask(&mirrored, &branch_b, &final_mask)
}

/// Run the channel-recombination recipe over the pool
///
/// Two independent channel merges composited through a noise mask derived
/// from the first merge at `threshold`. This is the recipe that gives the
/// signature cross-image color aberration.
///
/// # Errors
///
/// Returns [`GlitchError::PoolTooSmall`] when the pool holds fewer than
/// three images, and propagates mask-derivation and compositing failures.
pub fn twin_channel_mask<R: Rng>(
    pool: &ImagePool,
    threshold: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let merge_a = random_channel_merge(pool.images(), rng)?;
    let merge_b = random_channel_merge(pool.images(), rng)?;
    let mask = random_pixel_mask(&merge_a, threshold, true, MIN_BLOCK_SIZE, MAX_BLOCK_SIZE, rng)?;
    composite_with_mask(&merge_a, &merge_b, &mask)
}

#[cfg(test)]
mod tests {
    use super::{generate, twin_channel_mask};
    use crate::pipeline::pool::{ImagePool, ResizePolicy};
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_pool() -> ImagePool {
        let images = (0..4)
            .map(|index| {
                RgbImage::from_fn(64, 64, |x, y| {
                    Rgb([(x * 3) as u8, (y * 3) as u8, index * 60])
                })
            })
            .collect();
        ImagePool::new(images, ResizePolicy::Max).expect("pool")
    }

    #[test]
    fn test_generate_matches_pool_dimensions() {
        let pool = small_pool();
        let mut rng = StdRng::seed_from_u64(21);
        let output = generate(&pool, 300, &mut rng).expect("generation");
        assert_eq!(output.dimensions(), pool.dimensions());
    }

    #[test]
    fn test_generate_leaves_canonical_pool_untouched() {
        let pool = small_pool();
        let reference: Vec<Vec<u8>> = pool.images().iter().map(|i| i.as_raw().clone()).collect();
        let mut rng = StdRng::seed_from_u64(21);
        generate(&pool, 300, &mut rng).expect("generation");
        let after: Vec<Vec<u8>> = pool.images().iter().map(|i| i.as_raw().clone()).collect();
        assert_eq!(reference, after);
    }

    #[test]
    fn test_generate_is_deterministic_under_a_fixed_seed() {
        let pool = small_pool();
        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);
        let first = generate(&pool, 300, &mut first_rng).expect("generation");
        let second = generate(&pool, 300, &mut second_rng).expect("generation");
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_generate_saturates_the_doubled_threshold() {
        // The second branch runs at twice the threshold; extreme values
        // clamp instead of wrapping
        let pool = small_pool();
        let mut rng = StdRng::seed_from_u64(13);
        assert!(generate(&pool, u32::MAX, &mut rng).is_ok());
    }

    #[test]
    fn test_twin_channel_mask_matches_pool_dimensions() {
        let pool = small_pool();
        let mut rng = StdRng::seed_from_u64(4);
        let output = twin_channel_mask(&pool, 300, &mut rng).expect("generation");
        assert_eq!(output.dimensions(), pool.dimensions());
    }
}
