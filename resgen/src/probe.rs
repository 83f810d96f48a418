//! Preflight checks: which platforms the project has, and whether the
//! master images are in place

use std::path::Path;

use crate::config::ResourceConfig;
use crate::error::{Error, Result};
use crate::platform::{AssetKind, Platform};
use crate::report::Reporter;

/// Platforms from `catalog` whose presence directory exists, in catalog order
pub fn detect_active_platforms(
    config: &ResourceConfig,
    catalog: impl IntoIterator<Item = Platform>,
) -> Result<Vec<Platform>> {
    let active: Vec<Platform> = catalog
        .into_iter()
        .filter(|platform| config.presence_path(*platform).exists())
        .collect();

    log::debug!("Active platforms: {active:?}");

    if active.is_empty() {
        return Err(Error::NoPlatformFound);
    }
    Ok(active)
}

pub fn verify_master_image(path: &Path, kind: AssetKind) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingMasterImage {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// Run every check in order, reporting each one, and stop at the first
/// failure. `kinds` lists the masters the run will need.
pub fn preflight(
    config: &ResourceConfig,
    kinds: &[AssetKind],
    reporter: &dyn Reporter,
) -> Result<Vec<Platform>> {
    let active = match detect_active_platforms(config, Platform::iter()) {
        Ok(active) => active,
        Err(e) => {
            reporter.error(
                "No platforms found. Make sure you are in the root folder of your Cordova project \
                 and add platforms with 'cordova platform add'",
            );
            return Err(e);
        }
    };

    let names: Vec<&str> = active.iter().map(Platform::name).collect();
    reporter.success(&format!("platforms found: {}", names.join(", ")));

    for &kind in kinds {
        let shown = config.master_file(kind).display();
        match verify_master_image(&config.master_path(kind), kind) {
            Ok(()) => reporter.success(&format!("{shown} exists")),
            Err(e) => {
                reporter.error(&format!("{shown} does not exist in the root folder"));
                return Err(e);
            }
        }
    }

    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Line, Recorder};
    use std::fs;

    #[test]
    fn no_marker_directories() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResourceConfig::new(dir.path());

        let err = detect_active_platforms(&config, Platform::iter()).unwrap_err();
        assert!(matches!(err, Error::NoPlatformFound));
    }

    #[test]
    fn detects_in_catalog_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("platforms/windows")).unwrap();
        fs::create_dir_all(dir.path().join("platforms/ios")).unwrap();
        let config = ResourceConfig::new(dir.path());

        let active = detect_active_platforms(&config, Platform::iter()).unwrap();
        assert_eq!(active, vec![Platform::Ios, Platform::Windows]);
    }

    #[test]
    fn directory_is_not_a_master() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        fs::create_dir(&path).unwrap();

        let err = verify_master_image(&path, AssetKind::Icon).unwrap_err();
        assert!(matches!(err, Error::MissingMasterImage { kind: AssetKind::Icon, .. }));
    }

    #[test]
    fn preflight_stops_at_missing_splash() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("platforms/android")).unwrap();
        fs::create_dir_all(dir.path().join("resources")).unwrap();
        fs::write(dir.path().join("resources/icon.png"), b"not checked here").unwrap();
        let config = ResourceConfig::new(dir.path());
        let recorder = Recorder::new();

        let err = preflight(&config, &[AssetKind::Icon, AssetKind::Splash], &recorder).unwrap_err();

        assert!(matches!(err, Error::MissingMasterImage { kind: AssetKind::Splash, .. }));
        assert_eq!(
            recorder.lines(),
            vec![
                Line::Success("platforms found: android".into()),
                Line::Success("resources/icon.png exists".into()),
                Line::Error("resources/splash.png does not exist in the root folder".into()),
            ]
        );
    }
}
