use std::path::PathBuf;

use crate::platform::AssetKind;

#[derive(Debug)]
pub enum Error {
    /// None of the catalog platforms has been added to the project
    NoPlatformFound,
    MissingMasterImage { kind: AssetKind, path: PathBuf },
    /// A single output could not be produced; the run carries on
    TransformFailed {
        file_name: String,
        source: anyhow::Error,
    },
}

impl Error {
    /// Errors that stop the run before any file is generated
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::TransformFailed { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::NoPlatformFound => f.write_str("no platforms found in project"),
            Error::MissingMasterImage { kind, path } => {
                write!(f, "{kind} master image {} does not exist", path.display())
            }
            Error::TransformFailed { file_name, source } => {
                write!(f, "failed to generate {file_name}: {source:#}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::TransformFailed { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
