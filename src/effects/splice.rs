//! Horizontal stripe splicing with cyclic offsets

use image::RgbImage;

/// Top and bottom bounds of each horizontal stripe
///
/// Stripe height is `floor(height / count)`; when the height does not divide
/// evenly the remainder is absorbed into the last stripe, so the bounds
/// always tile the full image height with no uncovered rows.
fn stripe_bounds(height: u32, count: u32) -> Vec<(u32, u32)> {
    let stripe_height = (height / count).max(1);
    let mut bounds = Vec::with_capacity(count as usize);
    let mut top = 0;
    for index in 0..count {
        if top >= height {
            break;
        }
        let bottom = if index + 1 == count {
            height
        } else {
            (top + stripe_height).min(height)
        };
        bounds.push((top, bottom));
        top = bottom;
    }
    bounds
}

/// Cut an image into horizontal stripes and shift each one sideways
///
/// Stripes are pasted top-to-bottom onto a zeroed canvas, each shifted right
/// by the next value from the cyclic `offset_wave`. Shifted content is
/// clipped at the right edge, leaving the vacated left span of the stripe
/// blank. With a single stripe and a zero wave the output equals the input.
/// A zero `stripe_count` is treated as one stripe; an empty wave shifts
/// nothing.
pub fn splice_and_offset(image: &RgbImage, stripe_count: u32, offset_wave: &[u32]) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut canvas = RgbImage::new(width, height);
    if width == 0 || height == 0 {
        return canvas;
    }

    for (index, (top, bottom)) in stripe_bounds(height, stripe_count.max(1))
        .into_iter()
        .enumerate()
    {
        let shift = if offset_wave.is_empty() {
            0
        } else {
            offset_wave[index % offset_wave.len()]
        };
        for y in top..bottom {
            for x in 0..width.saturating_sub(shift) {
                canvas.put_pixel(x + shift, y, *image.get_pixel(x, y));
            }
        }
    }
    canvas
}
