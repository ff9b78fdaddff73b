//! Error types for the create-helicone command layer.

use std::error::Error;
use std::fmt;

use helicone_scaffold::ScaffoldError;

/// Everything that makes the CLI exit with a non-zero status.
#[derive(Debug)]
pub enum AppError {
    /// No project directory was given and prompting is not possible.
    MissingProjectDirectory,

    /// The user aborted an interactive prompt.
    Cancelled,

    /// Startup configuration could not be resolved
    Config {
        source: anyhow::Error,
    },

    /// Reading an interactive answer failed
    Prompt {
        source: dialoguer::Error,
    },

    /// The project creation pipeline hit a fatal step
    Scaffold(ScaffoldError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingProjectDirectory => write!(f, "No project directory specified"),
            AppError::Cancelled => write!(f, "Operation cancelled"),
            AppError::Config { source } => write!(f, "Configuration error: {source:#}"),
            AppError::Prompt { source } => write!(f, "Prompt failed: {source}"),
            AppError::Scaffold(e) => write!(f, "{e}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Config { source } => Some(&**source),
            AppError::Prompt { source } => Some(source),
            AppError::Scaffold(e) => Some(e),
            AppError::MissingProjectDirectory | AppError::Cancelled => None,
        }
    }
}

impl From<ScaffoldError> for AppError {
    fn from(err: ScaffoldError) -> Self {
        AppError::Scaffold(err)
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Prompt { source: err }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Config { source: err }
    }
}
