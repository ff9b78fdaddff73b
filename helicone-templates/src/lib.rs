//! Template catalog and acquisition.
//!
//! Templates live in a remote git repository. A [`TemplateSource`] names a
//! subdirectory of that repository at a given ref, and a [`TemplateFetcher`]
//! materializes it on disk. Nothing is cached: every fetch downloads again.

pub mod catalog;
pub mod fetch;
pub mod github;
pub mod source;

pub use catalog::{TemplateInfo, CATALOG, DEFAULT_TEMPLATE};
pub use fetch::{FetchError, FetchOptions, FetchSummary, TemplateFetcher};
pub use github::GithubTarballFetcher;
pub use source::TemplateSource;
