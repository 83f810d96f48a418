//! Per-spec asset generation: resolve the master, scale, crop, write

mod decode;
mod encode;
mod transform;

// Re-export public API
pub use decode::load;
pub use encode::{compress_to_png, save_png, PngCompression};

use anyhow::{Context, Result};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ResourceConfig;
use crate::error::Error;
use crate::platform::{AssetKind, IconSpec, Platform, SplashSpec};
use crate::report::Reporter;

/// Pick the platform override (`<stem>-<platform>.<ext>` next to the master)
/// when it exists, the shared master otherwise.
///
/// Checked on every call so an override added mid-run is picked up by the
/// next file.
pub fn resolve_source(master: &Path, platform: Platform) -> PathBuf {
    let candidate = override_path(master, platform);
    if candidate.exists() {
        log::debug!(
            "Using {} override {}",
            platform.name(),
            candidate.display()
        );
        candidate
    } else {
        master.to_path_buf()
    }
}

fn override_path(master: &Path, platform: Platform) -> PathBuf {
    let stem = master.file_stem().unwrap_or_default().to_string_lossy();
    let ext = master
        .extension()
        .map(|ext| ext.to_string_lossy())
        .unwrap_or("png".into());

    master.with_file_name(format!("{stem}-{}.{ext}", platform.name()))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    // create_dir_all treats an existing directory as success, even when
    // another worker created it a moment ago
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

/// Square-resize the icon master into the platform's icon directory.
///
/// Wide tiles get a second pass: the square result is cropped from the
/// top-left corner to `size × crop_height` and written over the same file.
/// Every completed write reports one success line.
pub fn generate_icon(
    config: &ResourceConfig,
    platform: Platform,
    icon: &IconSpec,
    reporter: &dyn Reporter,
) -> Result<(), Error> {
    let failed = |source: anyhow::Error| Error::TransformFailed {
        file_name: icon.name.to_string(),
        source,
    };

    let src = resolve_source(&config.master_path(AssetKind::Icon), platform);
    let dst_dir = config.output_dir(platform, AssetKind::Icon);
    let dst = dst_dir.join(icon.name);

    ensure_dir(&dst_dir).map_err(failed)?;

    let master = load(&src).map_err(failed)?;
    let square = transform::resize(&master, icon.size, icon.size).map_err(failed)?;
    save_png(&square, &dst, config.png_compression).map_err(failed)?;
    log::debug!("Wrote {} ({}x{})", dst.display(), icon.size, icon.size);
    reporter.success(&format!("{} created", icon.name));

    if let Some(height) = icon.crop_height {
        let cropped = transform::crop(&square, icon.size, height, 0, 0);
        save_png(&cropped, &dst, config.png_compression).map_err(failed)?;
        log::debug!("Wrote {} ({}x{height})", dst.display(), icon.size);
        reporter.success(&format!("{} cropped", icon.name));
    }

    Ok(())
}

/// Fill a `width × height` splash from the splash master.
///
/// The master is scaled so its longer side equals `max(width, height)`,
/// then the window is cut from the center of that square.
pub fn generate_splash(
    config: &ResourceConfig,
    platform: Platform,
    splash: &SplashSpec,
    reporter: &dyn Reporter,
) -> Result<(), Error> {
    let failed = |source: anyhow::Error| Error::TransformFailed {
        file_name: splash.name.to_string(),
        source,
    };

    let src = resolve_source(&config.master_path(AssetKind::Splash), platform);
    let dst_dir = config.output_dir(platform, AssetKind::Splash);
    let dst = dst_dir.join(splash.name);

    ensure_dir(&dst_dir).map_err(failed)?;

    let master = load(&src).map_err(failed)?;
    let scaled = transform::resize_to_longest(&master, splash.longest_edge()).map_err(failed)?;
    let (x, y) = transform::centered_offsets(splash.width, splash.height);
    let cropped = transform::crop(&scaled, splash.width, splash.height, x, y);

    save_png(&cropped, &dst, config.png_compression).map_err(failed)?;
    log::debug!(
        "Wrote {} ({}x{})",
        dst.display(),
        splash.width,
        splash.height
    );
    reporter.success(&format!("{} created", splash.name));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Recorder;
    use imageproc::image::{Rgba, RgbaImage};

    fn write_master(path: &Path, width: u32, height: u32, color: [u8; 4]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(width, height, Rgba(color))
            .save(path)
            .unwrap();
    }

    #[test]
    fn override_path_keeps_directory_and_extension() {
        assert_eq!(
            override_path(Path::new("resources/icon.png"), Platform::Ios),
            PathBuf::from("resources/icon-ios.png")
        );
        assert_eq!(
            override_path(Path::new("art/splash"), Platform::Windows),
            PathBuf::from("art/splash-windows.png")
        );
    }

    #[test]
    fn resolve_prefers_existing_override() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        write_master(&master, 4, 4, [255, 0, 0, 255]);
        write_master(&dir.path().join("icon-android.png"), 4, 4, [0, 0, 255, 255]);

        assert_eq!(
            resolve_source(&master, Platform::Android),
            dir.path().join("icon-android.png")
        );
        assert_eq!(resolve_source(&master, Platform::Ios), master);
    }

    #[test]
    fn wide_icon_reports_both_writes() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResourceConfig::new(dir.path());
        write_master(&config.master_path(AssetKind::Icon), 64, 64, [0, 128, 0, 255]);

        let wide = IconSpec {
            name: "Wide.png",
            size: 40,
            crop_height: Some(20),
        };
        let recorder = Recorder::new();
        generate_icon(&config, Platform::Windows, &wide, &recorder).unwrap();

        assert_eq!(
            recorder.successes(),
            vec!["Wide.png created".to_string(), "Wide.png cropped".to_string()]
        );
        let out = load(&dir.path().join("resources/windows/icon/Wide.png")).unwrap();
        assert_eq!(out.dimensions(), (40, 20));
    }

    #[test]
    fn splash_from_non_square_master_keeps_size() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResourceConfig::new(dir.path());
        write_master(&config.master_path(AssetKind::Splash), 80, 40, [9, 9, 9, 255]);

        let splash = SplashSpec {
            name: "tall.png",
            width: 30,
            height: 50,
        };
        generate_splash(&config, Platform::Android, &splash, &Recorder::new()).unwrap();

        let out = load(&dir.path().join("resources/android/splash/tall.png")).unwrap();
        assert_eq!(out.dimensions(), (30, 50));
    }

    #[test]
    fn missing_source_is_transform_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResourceConfig::new(dir.path());
        let recorder = Recorder::new();

        let err = generate_icon(&config, Platform::Ios, &Platform::Ios.icons()[0], &recorder)
            .unwrap_err();

        assert!(matches!(&err, Error::TransformFailed { file_name, .. } if file_name == "icon-40.png"));
        assert!(!err.is_fatal());
        assert!(recorder.successes().is_empty());
    }
}
