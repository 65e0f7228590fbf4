//! Command-line interface for batch glitch art generation

use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_THRESHOLD, THRESHOLD_FLOOR};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_images, save_image, show_image};
use crate::io::progress::BatchProgress;
use crate::pipeline::generator::{generate, twin_channel_mask};
use crate::pipeline::pool::{ImagePool, ResizePolicy};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glitchgen")]
#[command(
    author,
    version,
    about = "Generate glitch art from a directory of source images"
)]
/// Command-line arguments for the glitch art generator
pub struct Cli {
    /// Source image directory
    #[arg(short, long, default_value = "./input", value_name = "DIR")]
    pub input: PathBuf,

    /// Output directory for generated images
    #[arg(short, long, default_value = "output", value_name = "DIR")]
    pub output: PathBuf,

    /// Number of output images to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Upper bound for the per-output random threshold draw
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Pool normalization policy
    #[arg(short = 'z', long, value_enum, default_value_t = ResizePolicy::Max)]
    pub size: ResizePolicy,

    /// Build outputs from channel recombination instead of stripe splicing
    #[arg(short = 'c', long)]
    pub channel_merge: bool,

    /// Open each output with the platform image viewer
    #[arg(short = 's', long)]
    pub show: bool,

    /// Random seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates one batch of glitch outputs from CLI arguments
pub struct BatchRunner {
    cli: Cli,
}

impl BatchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the pool, generate the batch, and save every output
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid, the input
    /// directory yields no usable images, or generation or export fails.
    pub fn run(&self) -> Result<()> {
        if self.cli.threshold < THRESHOLD_FLOOR {
            return Err(invalid_parameter(
                "threshold",
                &self.cli.threshold,
                &format!("must be at least {THRESHOLD_FLOOR}"),
            ));
        }

        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let images = load_images(&self.cli.input, self.cli.quiet)?;
        if images.is_empty() {
            return Err(invalid_parameter(
                "input",
                &self.cli.input.display(),
                &"directory contains no decodable images",
            ));
        }
        let pool = ImagePool::new(images, self.cli.size)?;

        let progress = BatchProgress::new(self.cli.count, self.cli.quiet);
        for _ in 0..self.cli.count {
            let threshold = rng.random_range(THRESHOLD_FLOOR..=self.cli.threshold);
            let output = if self.cli.channel_merge {
                twin_channel_mask(&pool, threshold, &mut rng)?
            } else {
                generate(&pool, threshold, &mut rng)?
            };
            let path = save_image(&output, &self.cli.output, &mut rng)?;
            if self.cli.show {
                show_image(&path);
            }
            progress.advance();
        }
        progress.finish();
        Ok(())
    }
}
