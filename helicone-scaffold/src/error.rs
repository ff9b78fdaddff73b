use std::io;
use std::path::PathBuf;

use helicone_templates::FetchError;
use thiserror::Error;

/// Failures that abort project creation.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("The directory {} already exists and is not empty", .path.display())]
    TargetNotEmpty { path: PathBuf },

    #[error("Could not inspect {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to download template '{template}': {cause}")]
    TemplateFetchFailed {
        template: String,
        #[source]
        cause: FetchError,
    },
}

/// Failures of best-effort steps. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepWarning {
    #[error("Git initialization failed: {cause}")]
    VersionControl { cause: String },

    #[error("Dependency installation failed: {cause}")]
    DependencyInstall { cause: String },
}

impl StepWarning {
    pub fn cause(&self) -> &str {
        match self {
            StepWarning::VersionControl { cause } | StepWarning::DependencyInstall { cause } => {
                cause
            }
        }
    }
}
