use std::path::{Path, PathBuf};

use crate::image::PngCompression;
use crate::platform::{AssetKind, Platform};

pub const DEFAULT_ICON_FILE: &str = "resources/icon.png";
pub const DEFAULT_SPLASH_FILE: &str = "resources/splash.png";

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceConfig {
    /// Root of the project; every catalog path is relative to it
    pub project_dir: PathBuf,
    pub icon_file: PathBuf,
    pub splash_file: PathBuf,
    pub png_compression: PngCompression,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            icon_file: PathBuf::from(DEFAULT_ICON_FILE),
            splash_file: PathBuf::from(DEFAULT_SPLASH_FILE),
            png_compression: PngCompression::Default,
        }
    }
}

impl ResourceConfig {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            ..Self::default()
        }
    }

    /// Shared master for `kind`, as configured (relative paths are not resolved)
    pub fn master_file(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Icon => &self.icon_file,
            AssetKind::Splash => &self.splash_file,
        }
    }

    /// Shared master for `kind`, resolved against the project root
    pub fn master_path(&self, kind: AssetKind) -> PathBuf {
        self.resolve(self.master_file(kind))
    }

    pub fn presence_path(&self, platform: Platform) -> PathBuf {
        self.resolve(&platform.presence_path())
    }

    pub fn output_dir(&self, platform: Platform, kind: AssetKind) -> PathBuf {
        match kind {
            AssetKind::Icon => self.resolve(&platform.icon_dir()),
            AssetKind::Splash => self.resolve(&platform.splash_dir()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        // join() keeps absolute paths as they are
        self.project_dir.join(path)
    }
}

#[test]
fn paths_resolve_under_project_dir() {
    let config = ResourceConfig::new("/work/app");

    assert_eq!(
        config.master_path(AssetKind::Splash),
        PathBuf::from("/work/app/resources/splash.png")
    );
    assert_eq!(
        config.output_dir(Platform::Ios, AssetKind::Icon),
        PathBuf::from("/work/app/resources/ios/icon")
    );
    assert_eq!(
        config.presence_path(Platform::Windows),
        PathBuf::from("/work/app/platforms/windows")
    );
}

#[test]
fn absolute_master_is_kept() {
    let config = ResourceConfig {
        icon_file: PathBuf::from("/art/logo.png"),
        ..ResourceConfig::new("/work/app")
    };

    assert_eq!(
        config.master_path(AssetKind::Icon),
        PathBuf::from("/art/logo.png")
    );
}
