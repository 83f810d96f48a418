//! Image transformations: resizing and cropping

use anyhow::{Context, Result};
use fast_image_resize as fr;
use fr::images::Image as FrImage;
use imageproc::image::{imageops, RgbaImage};

/// Resize to exactly `width × height`, ignoring the source aspect ratio
pub(super) fn resize(img: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    let (src_width, src_height) = img.dimensions();
    if (src_width, src_height) == (width, height) {
        return Ok(img.clone());
    }

    // Choose algorithm based on scaling direction
    let algorithm = if width < src_width || height < src_height {
        // Downscaling: Lanczos3 preserves detail
        fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3)
    } else {
        // Upscaling: CatmullRom gives smoother results
        fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom)
    };

    let src_image = FrImage::from_vec_u8(
        src_width,
        src_height,
        img.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .context("Invalid source image buffer")?;
    let mut dst_image = FrImage::new(width, height, fr::PixelType::U8x4);

    // alpha is premultiplied and restored by the resizer
    let mut resizer = fr::Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            Some(&fr::ResizeOptions::new().resize_alg(algorithm)),
        )
        .with_context(|| format!("Failed to resize to {width}x{height}"))?;

    RgbaImage::from_raw(width, height, dst_image.into_vec())
        .context("Resized buffer does not match its dimensions")
}

/// Scale proportionally so the longer side of the result equals `longest`
pub(super) fn resize_to_longest(img: &RgbaImage, longest: u32) -> Result<RgbaImage> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("Source image is empty");
    }

    let ratio = longest as f64 / width.max(height) as f64;
    let new_width = ((width as f64 * ratio).round() as u32).clamp(1, longest);
    let new_height = ((height as f64 * ratio).round() as u32).clamp(1, longest);

    resize(img, new_width, new_height)
}

/// Cut a `width × height` region starting at (`x`, `y`).
///
/// The result always has the requested size; any part of the region that
/// falls outside the source stays transparent.
pub(super) fn crop(img: &RgbaImage, width: u32, height: u32, x: u32, y: u32) -> RgbaImage {
    let (src_width, src_height) = img.dimensions();
    if x + width <= src_width && y + height <= src_height {
        return imageops::crop_imm(img, x, y, width, height).to_image();
    }

    let mut canvas = RgbaImage::new(width, height);
    imageops::overlay(&mut canvas, img, -i64::from(x), -i64::from(y));
    canvas
}

/// Crop offsets that center a `width × height` window in a square of
/// `max(width, height)`
pub(super) fn centered_offsets(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    ((longest - width) / 2, (longest - height) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    /// left half red, right half blue
    fn halves(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| if x < width / 2 { RED } else { BLUE })
    }

    #[test]
    fn resize_hits_exact_dimensions() {
        let img = halves(64, 32);
        assert_eq!(resize(&img, 16, 16).unwrap().dimensions(), (16, 16));
        assert_eq!(resize(&img, 200, 90).unwrap().dimensions(), (200, 90));
    }

    #[test]
    fn resize_to_longest_keeps_aspect() {
        let landscape = halves(400, 200);
        assert_eq!(
            resize_to_longest(&landscape, 100).unwrap().dimensions(),
            (100, 50)
        );

        let portrait = halves(30, 90);
        assert_eq!(
            resize_to_longest(&portrait, 300).unwrap().dimensions(),
            (100, 300)
        );
    }

    #[test]
    fn crop_inside_bounds() {
        let img = halves(100, 100);
        let cropped = crop(&img, 50, 20, 0, 0);

        assert_eq!(cropped.dimensions(), (50, 20));
        assert!(cropped.pixels().all(|p| *p == RED));
    }

    #[test]
    fn centered_crop_takes_middle() {
        let (x, y) = centered_offsets(40, 100);
        assert_eq!((x, y), (30, 0));

        let img = halves(100, 100);
        let cropped = crop(&img, 40, 100, x, y);
        assert_eq!(cropped.dimensions(), (40, 100));
        assert_eq!(*cropped.get_pixel(0, 50), RED);
        assert_eq!(*cropped.get_pixel(39, 50), BLUE);
    }

    #[test]
    fn crop_outside_bounds_is_padded() {
        let img = halves(100, 50);
        let cropped = crop(&img, 60, 100, 20, 0);

        assert_eq!(cropped.dimensions(), (60, 100));
        assert_eq!(*cropped.get_pixel(0, 0), RED);
        assert_eq!(cropped.get_pixel(0, 99).0[3], 0);
    }
}
