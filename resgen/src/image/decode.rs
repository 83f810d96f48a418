//! Image decoding

use anyhow::{Context, Result};
use imageproc::image::{ImageReader, RgbaImage};

use std::path::Path;

/// Decode a master image from disk into RGBA.
///
/// The format is sniffed from the content, so a master saved with the
/// wrong extension still loads.
pub fn load(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    Ok(img.into_rgba8())
}
