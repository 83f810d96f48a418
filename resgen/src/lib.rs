pub mod config;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod platform;
pub mod probe;
pub mod report;

// Re-export commonly used types
pub use config::ResourceConfig;
pub use error::Error;
pub use image::PngCompression;
pub use pipeline::{run, Mode, Summary};
pub use platform::{list_platforms, AssetKind, IconSpec, Platform, SplashSpec};
pub use report::{ConsoleReporter, Reporter};
