use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use std::path::PathBuf;
use std::process::ExitCode;

use resgen::config::{DEFAULT_ICON_FILE, DEFAULT_SPLASH_FILE};
use resgen::report::ConsoleReporter;
use resgen::{Mode, PngCompression, ResourceConfig};

#[derive(Parser)]
#[command(name = "resgen")]
#[command(
    about = "Generate icons and splash screens for every platform added to the project",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Project root (the folder containing `platforms/` and `resources/`)
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    project_dir: PathBuf,

    /// Icon master image, relative to the project root
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ICON_FILE)]
    icon: PathBuf,

    /// Splash master image, relative to the project root
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SPLASH_FILE)]
    splash: PathBuf,

    /// Only generate one kind of asset
    #[arg(long, value_enum)]
    only: Option<OnlyArg>,

    /// PNG compression level
    #[arg(long, value_enum, default_value_t = PngCompressionArg::Default)]
    png_compression: PngCompressionArg,

    /// the number of threads to use for resizing
    /// defaults to the number of logical CPUs
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Disable coloured status output
    #[arg(long, default_value_t)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long, default_value_t)]
    verbose: bool,

    /// Quiet mode (errors only in the diagnostic log)
    #[arg(short, long, default_value_t, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OnlyArg {
    Icons,
    Splashes,
}

impl Args {
    fn mode(&self) -> Mode {
        match self.only {
            Some(OnlyArg::Icons) => Mode::Icons,
            Some(OnlyArg::Splashes) => Mode::Splashes,
            None => Mode::Both,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PngCompressionArg {
    Fast,
    Default,
    Best,
}

impl From<PngCompressionArg> for PngCompression {
    fn from(arg: PngCompressionArg) -> Self {
        match arg {
            PngCompressionArg::Fast => PngCompression::Fast,
            PngCompressionArg::Default => PngCompression::Default,
            PngCompressionArg::Best => PngCompression::Best,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    setup_logging(args.verbose, args.quiet)?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let config = build_config(&args);
    let reporter = if args.no_color {
        ConsoleReporter::plain()
    } else {
        ConsoleReporter::new()
    };

    let result = resgen::run(&config, args.mode(), &reporter);
    println!();

    match result {
        Ok(summary) => {
            log::info!(
                "Generated {} files, {} failed",
                summary.generated,
                summary.failures.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    // route the library's `log` records through tracing
    tracing_log::LogTracer::init().context("Failed to install log bridge")?;

    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn build_config(args: &Args) -> ResourceConfig {
    ResourceConfig {
        project_dir: args.project_dir.clone(),
        icon_file: args.icon.clone(),
        splash_file: args.splash.clone(),
        png_compression: args.png_compression.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_config() {
        let args = Args::parse_from(["resgen"]);

        assert_eq!(build_config(&args), ResourceConfig::default());
        assert_eq!(args.mode(), Mode::Both);
    }

    #[test]
    fn only_selects_mode() {
        let args = Args::parse_from(["resgen", "--only", "splashes", "-C", "app"]);

        assert_eq!(args.mode(), Mode::Splashes);
        assert_eq!(build_config(&args).project_dir, PathBuf::from("app"));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["resgen", "-v", "-q"]).is_err());
    }
}
