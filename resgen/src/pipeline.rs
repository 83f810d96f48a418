use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info_span, instrument};

use crate::config::ResourceConfig;
use crate::error::{Error, Result};
use crate::image;
use crate::platform::{AssetKind, Platform};
use crate::probe;
use crate::report::Reporter;

/// Which asset kinds a run produces
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    Icons,
    Splashes,
    #[default]
    Both,
}

impl Mode {
    /// Master images the mode reads, in check order
    pub fn kinds(self) -> &'static [AssetKind] {
        match self {
            Mode::Icons => &[AssetKind::Icon],
            Mode::Splashes => &[AssetKind::Splash],
            Mode::Both => &[AssetKind::Icon, AssetKind::Splash],
        }
    }
}

#[derive(Debug)]
pub struct Failure {
    pub platform: Platform,
    pub kind: AssetKind,
    pub error: Error,
}

/// Outcome of a generation stage or a whole run
#[derive(Debug, Default)]
pub struct Summary {
    /// Output specs that were generated completely
    pub generated: usize,
    pub failures: Vec<Failure>,
}

impl Summary {
    fn merge(&mut self, other: Summary) {
        self.generated += other.generated;
        self.failures.extend(other.failures);
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Turn per-spec results into a summary, reporting each failure
fn collect(
    platform: Platform,
    kind: AssetKind,
    results: Vec<Result<()>>,
    reporter: &dyn Reporter,
) -> Summary {
    let mut summary = Summary::default();
    for result in results {
        match result {
            Ok(()) => summary.generated += 1,
            Err(error) => {
                if let Error::TransformFailed { file_name, source } = &error {
                    reporter.error(&format!("{file_name}: {source:#}"));
                }
                log::warn!("{platform}: {error}");
                summary.failures.push(Failure {
                    platform,
                    kind,
                    error,
                });
            }
        }
    }
    summary
}

/// Generate every icon of `platform`. Outputs are independent, so they are
/// produced in parallel once the header is out.
#[instrument(skip_all, fields(platform = %platform))]
pub fn generate_icons_for_platform(
    config: &ResourceConfig,
    platform: Platform,
    reporter: &dyn Reporter,
) -> Summary {
    reporter.header(&format!("Generating Icons for {platform}"));

    let results: Vec<_> = platform
        .icons()
        .par_iter()
        .map(|icon| image::generate_icon(config, platform, icon, reporter))
        .collect();

    let summary = collect(platform, AssetKind::Icon, results, reporter);
    log::info!(
        "{platform}: {} icons generated, {} failed",
        summary.generated,
        summary.failures.len()
    );
    summary
}

#[instrument(skip_all, fields(platform = %platform))]
pub fn generate_splashes_for_platform(
    config: &ResourceConfig,
    platform: Platform,
    reporter: &dyn Reporter,
) -> Summary {
    reporter.header(&format!("Generating splash screen for {platform}"));

    let results: Vec<_> = platform
        .splashes()
        .par_iter()
        .map(|splash| image::generate_splash(config, platform, splash, reporter))
        .collect();

    let summary = collect(platform, AssetKind::Splash, results, reporter);
    log::info!(
        "{platform}: {} splash screens generated, {} failed",
        summary.generated,
        summary.failures.len()
    );
    summary
}

/// Process `platforms` one after another so each platform's output stays
/// grouped; within a platform all icons finish before the first splash.
pub fn generate_for_all_active_platforms(
    config: &ResourceConfig,
    platforms: &[Platform],
    mode: Mode,
    reporter: &dyn Reporter,
) -> Summary {
    let mut summary = Summary::default();

    for &platform in platforms {
        if matches!(mode, Mode::Icons | Mode::Both) {
            summary.merge(generate_icons_for_platform(config, platform, reporter));
        }
        if matches!(mode, Mode::Splashes | Mode::Both) {
            summary.merge(generate_splashes_for_platform(config, platform, reporter));
        }
    }

    summary
}

/// Check the project, then regenerate everything `mode` asks for.
///
/// Only the preflight can fail the run; individual outputs that could not
/// be written are listed in the returned summary.
pub fn run(config: &ResourceConfig, mode: Mode, reporter: &dyn Reporter) -> Result<Summary> {
    let span = info_span!("run", project = %config.project_dir.display(), ?mode);
    let _guard = span.enter();

    reporter.header("Checking Project & Icon");
    let platforms = probe::preflight(config, mode.kinds(), reporter)?;

    Ok(generate_for_all_active_platforms(
        config, &platforms, mode, reporter,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Line, Recorder};
    use std::fs;

    #[test]
    fn mode_kinds_in_check_order() {
        assert_eq!(Mode::Both.kinds(), &[AssetKind::Icon, AssetKind::Splash]);
        assert_eq!(Mode::Icons.kinds(), &[AssetKind::Icon]);
        assert_eq!(Mode::Splashes.kinds(), &[AssetKind::Splash]);
    }

    #[test]
    fn header_precedes_results_and_failures_do_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResourceConfig::new(dir.path());
        fs::create_dir_all(dir.path().join("resources")).unwrap();
        fs::write(config.master_path(AssetKind::Icon), b"definitely not a png").unwrap();
        let recorder = Recorder::new();

        let summary = generate_icons_for_platform(&config, Platform::Android, &recorder);

        assert_eq!(summary.generated, 0);
        assert_eq!(summary.failures.len(), Platform::Android.icons().len());
        let lines = recorder.lines();
        assert_eq!(lines[0], Line::Header("Generating Icons for android".into()));
        assert_eq!(recorder.errors().len(), Platform::Android.icons().len());
        assert!(recorder.errors()[0].starts_with("drawable-icon.png: "));
    }
}
