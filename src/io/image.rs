//! Source directory scanning and randomized-name PNG export

use crate::io::configuration::{IMAGE_EXTENSIONS, OUTPUT_PREFIX, SUFFIX_BYTES};
use crate::io::error::{GlitchError, Result};
use image::RgbImage;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

fn is_image_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                IMAGE_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
            })
}

/// Decode every recognized image file in `directory`
///
/// Files are visited in sorted order so pool ordering is stable across runs.
/// A file that fails to decode is skipped with a warning rather than
/// aborting the batch; only the directory scan itself is fatal.
///
/// # Errors
///
/// Returns [`GlitchError::FileSystem`] when the directory cannot be read.
pub fn load_images(directory: &Path, quiet: bool) -> Result<Vec<RgbImage>> {
    let entries = fs::read_dir(directory).map_err(|source| GlitchError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GlitchError::FileSystem {
            path: directory.to_path_buf(),
            operation: "read directory entry",
            source,
        })?;
        let path = entry.path();
        if is_image_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        match image::open(&path) {
            Ok(decoded) => images.push(decoded.to_rgb8()),
            Err(error) => {
                // Allow print for user feedback on skipped files
                #[allow(clippy::print_stderr)]
                if !quiet {
                    eprintln!("Skipping undecodable file '{}': {error}", path.display());
                }
            }
        }
    }
    Ok(images)
}

/// Save `image` as a PNG under `output_dir` with a random hex suffix
///
/// The output directory is created on demand. Returns the path the image
/// was written to.
///
/// # Errors
///
/// Returns [`GlitchError::FileSystem`] when the output directory cannot be
/// created and [`GlitchError::ImageExport`] when encoding fails.
pub fn save_image<R: Rng>(image: &RgbImage, output_dir: &Path, rng: &mut R) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| GlitchError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source,
    })?;

    let mut suffix = String::with_capacity(SUFFIX_BYTES * 2);
    for _ in 0..SUFFIX_BYTES {
        let byte: u8 = rng.random();
        suffix.push_str(&format!("{byte:02x}"));
    }

    let path = output_dir.join(format!("{OUTPUT_PREFIX}_{suffix}.png"));
    image
        .save(&path)
        .map_err(|source| GlitchError::ImageExport {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Open a saved image with the platform viewer, best effort
///
/// Viewer availability varies by platform; failure to launch is silently
/// ignored since display is cosmetic.
pub fn show_image(path: &Path) {
    #[cfg(target_os = "macos")]
    let viewer = "open";
    #[cfg(not(target_os = "macos"))]
    let viewer = "xdg-open";

    drop(std::process::Command::new(viewer).arg(path).spawn());
}
