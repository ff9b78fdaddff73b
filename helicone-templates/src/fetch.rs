use std::io;
use std::path::Path;

use thiserror::Error;

use crate::source::TemplateSource;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid template source '{0}'")]
    UnknownSource(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not find repository or ref at {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("destination {0} is not empty")]
    DestinationNotEmpty(String),

    #[error("failed to unpack template archive: {0}")]
    Archive(#[from] io::Error),

    #[error("could not find '{subdir}' in {repo}")]
    TemplateMissing { repo: String, subdir: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Write over files already present in the destination.
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub source: TemplateSource,
    pub files_written: usize,
}

/// Materializes a template tree into a local directory.
pub trait TemplateFetcher {
    fn fetch(
        &self,
        source: &TemplateSource,
        destination: &Path,
        options: FetchOptions,
    ) -> Result<FetchSummary, FetchError>;
}
