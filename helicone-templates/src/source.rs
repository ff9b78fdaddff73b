use std::fmt;

use crate::fetch::FetchError;

/// Registry repository holding every published template.
pub const DEFAULT_REGISTRY: &str = "colegottdank/helicone-templates";
/// Ref fetched when none is given; resolves to the default branch.
pub const DEFAULT_REF: &str = "HEAD";

/// Location of a template tree inside a remote repository.
///
/// Written as `owner/repo/sub/dir#ref`; the subdirectory and ref are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub owner: String,
    pub repo: String,
    /// Path inside the repository, `/`-separated, empty for the repository root.
    pub subdir: String,
    pub reference: String,
}

impl TemplateSource {
    /// Resolves a template name with the `<registry>/templates/<name>/template`
    /// layout used by the template registry.
    pub fn for_template(registry: &str, reference: &str, template: &str) -> Result<Self, FetchError> {
        if template.is_empty() || template.contains('/') || template.contains('#') {
            return Err(FetchError::UnknownSource(template.to_string()));
        }
        Self::parse(&format!("{registry}/templates/{template}/template#{reference}"))
    }

    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::UnknownSource(input.to_string());

        let (path, reference) = match input.split_once('#') {
            Some((path, reference)) if !reference.is_empty() => (path, reference),
            Some(_) => return Err(invalid()),
            None => (input, DEFAULT_REF),
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 || segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid());
        }

        Ok(Self {
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
            subdir: segments[2..].join("/"),
            reference: reference.to_string(),
        })
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)?;
        if !self.subdir.is_empty() {
            write!(f, "/{}", self.subdir)?;
        }
        write!(f, "#{}", self.reference)
    }
}
