//! Input/output boundary: errors, configuration, CLI, and file handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Source directory scanning and randomized-name PNG export
pub mod image;
/// Progress display for batch output generation
pub mod progress;
