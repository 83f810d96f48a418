//! PNG encoding

use anyhow::{Context, Result};
use imageproc::image::codecs::png::{CompressionType, FilterType, PngEncoder};
use imageproc::image::{ExtendedColorType, ImageEncoder, RgbaImage};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl PngCompression {
    fn compression_type(self) -> CompressionType {
        match self {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

/// Compress an image to PNG format with the specified compression level
pub fn compress_to_png<W>(img: &RgbaImage, writer: W, compression: PngCompression) -> Result<()>
where
    W: Write,
{
    let encoder = PngEncoder::new_with_quality(
        writer,
        compression.compression_type(),
        FilterType::Adaptive,
    );

    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .with_context(|| "Failed to compress image to PNG")?;

    Ok(())
}

/// Write `img` to `path` as PNG, replacing whatever was there
pub fn save_png(img: &RgbaImage, path: &Path, compression: PngCompression) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    compress_to_png(img, &mut writer, compression)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
