//! Fetch templates as GitHub tarballs.
//!
//! The archive for `owner/repo#ref` is downloaded from the codeload host,
//! gunzipped and walked entry by entry. Only entries under the template's
//! subdirectory are written, with the archive's top-level folder
//! (`<repo>-<sha>/`) and the subdirectory prefix stripped. No git history
//! is involved.

use std::fs;
use std::io::Read;
use std::path::{Component, Path};

use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tar::Archive;
use tracing::{debug, info, warn};

use crate::fetch::{FetchError, FetchOptions, FetchSummary, TemplateFetcher};
use crate::source::TemplateSource;

pub const CODELOAD_URL: &str = "https://codeload.github.com";

const USER_AGENT: &str = concat!("create-helicone/", env!("CARGO_PKG_VERSION"));

/// Counts gathered while unpacking an archive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
    /// Entries (files and directories) found below the subdirectory.
    pub matched_entries: usize,
    /// Non-directory entries written to disk.
    pub files_written: usize,
}

pub struct GithubTarballFetcher {
    client: Client,
    base_url: String,
}

impl GithubTarballFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(CODELOAD_URL)
    }

    /// Point the fetcher at a mirror serving the same `/<owner>/<repo>/tar.gz/<ref>` layout.
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn archive_url(&self, source: &TemplateSource) -> String {
        format!(
            "{}/{}/{}/tar.gz/{}",
            self.base_url, source.owner, source.repo, source.reference
        )
    }
}

impl TemplateFetcher for GithubTarballFetcher {
    fn fetch(
        &self,
        source: &TemplateSource,
        destination: &Path,
        options: FetchOptions,
    ) -> Result<FetchSummary, FetchError> {
        let url = self.archive_url(source);
        info!(url = %url, destination = %destination.display(), "Downloading template archive");

        if !options.overwrite && directory_has_entries(destination)? {
            return Err(FetchError::DestinationNotEmpty(
                destination.display().to_string(),
            ));
        }

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let stats = extract_archive(response, &source.subdir, destination, options.overwrite)?;

        if stats.matched_entries == 0 {
            return Err(FetchError::TemplateMissing {
                repo: format!("{}/{}#{}", source.owner, source.repo, source.reference),
                subdir: source.subdir.clone(),
            });
        }

        info!(files = stats.files_written, "Template archive unpacked");
        Ok(FetchSummary {
            source: source.clone(),
            files_written: stats.files_written,
        })
    }
}

fn directory_has_entries(path: &Path) -> std::io::Result<bool> {
    match fs::read_dir(path) {
        Ok(mut entries) => Ok(entries.next().is_some()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Unpacks the part of a gzipped tarball that lives under `subdir`.
///
/// The first path component of every entry is the archive's root folder and
/// is discarded. Symlinks and entries with `..`, root or prefix components
/// are skipped, so nothing can be written outside `destination`. The
/// destination itself is only created once a matching entry is found.
pub fn extract_archive<R: Read>(
    reader: R,
    subdir: &str,
    destination: &Path,
    overwrite: bool,
) -> std::io::Result<ExtractStats> {
    let mut archive = Archive::new(GzDecoder::new(reader));
    archive.set_overwrite(overwrite);

    let prefix = Path::new(subdir);
    let mut stats = ExtractStats::default();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let entry_type = entry.header().entry_type();
        if !(entry_type.is_file() || entry_type.is_dir()) {
            if entry_type.is_symlink() {
                let path = entry.path()?.into_owned();
                warn!(path = %path.display(), "Skipping symlink in template archive");
            }
            continue;
        }

        let path = entry.path()?.into_owned();
        let mut components = path.components();
        components.next();
        let Ok(relative) = components.as_path().strip_prefix(prefix) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            fs::create_dir_all(destination)?;
            stats.matched_entries += 1;
            continue;
        }
        if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            warn!(path = %path.display(), "Skipping archive entry outside the template");
            continue;
        }

        let target = destination.join(relative);
        stats.matched_entries += 1;

        if entry_type.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(file = %relative.display(), "Writing template file");
        entry.unpack(&target)?;
        stats.files_written += 1;
    }

    Ok(stats)
}
