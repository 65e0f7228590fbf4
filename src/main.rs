//! CLI entry point for the glitch art generator

use clap::Parser;
use glitchgen::io::cli::{BatchRunner, Cli};

fn main() -> glitchgen::Result<()> {
    let cli = Cli::parse();
    BatchRunner::new(cli).run()
}
