//! Pipeline constants and runtime configuration defaults

// Mask generation settings
/// Smallest random block size drawn for pixelation and mask tiling
pub const MIN_BLOCK_SIZE: u32 = 5;
/// Largest random block size drawn for pixelation and mask tiling
pub const MAX_BLOCK_SIZE: u32 = 20;

// Bounds the per-block color tally; beyond this a block is treated as
// pathologically high-entropy and mask generation fails
/// Maximum distinct colors enumerated per mask block
pub const BLOCK_COLOR_BUDGET: usize = 8192;

// Splice settings
/// Horizontal shift waveform cycled across stripes, in pixels
pub const STRIPE_WAVE: [u32; 6] = [0, 100, 200, 300, 200, 100];
/// Fewest stripes a random splice may cut
pub const MIN_STRIPES: u32 = 10;
/// Most stripes a random splice may cut
pub const MAX_STRIPES: u32 = 100;

// Ghosting settings
/// Toroidal shift applied to the ghost copy, in pixels on both axes
pub const GHOST_OFFSET: u32 = 100;
/// Mask threshold used when ghosting an intermediate image
pub const GHOST_THRESHOLD: u32 = 400;

// Threshold settings
/// Lower bound of the per-output random threshold draw
pub const THRESHOLD_FLOOR: u32 = 100;
/// Default upper bound of the per-output random threshold draw
pub const DEFAULT_THRESHOLD: u32 = 400;

// Pool normalization
/// Edge length used by the fixed resize policy
pub const FIXED_DIMENSIONS: (u32, u32) = (800, 800);

// Input settings
/// File extensions recognized as decodable source images (lowercase)
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "tif", "bmp", "gif", "tiff"];

// Output settings
/// Default number of output images per run
pub const DEFAULT_COUNT: usize = 2;
/// Prefix for generated output filenames
pub const OUTPUT_PREFIX: &str = "glitch";
/// Random bytes in the output filename suffix (rendered as hex)
pub const SUFFIX_BYTES: usize = 15;
