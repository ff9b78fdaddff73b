use std::path::{Component, Path, PathBuf};

/// Everything needed for one pipeline run. Built once per invocation and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    /// Directory to create; also used as the display name.
    pub project_name: String,
    /// Template identifier, resolved against the registry.
    pub template: String,
    pub install_dependencies: bool,
    pub initialize_version_control: bool,
}

impl CreationRequest {
    /// Absolute target directory for this request.
    ///
    /// Relative names are joined onto `cwd`; `.` and `..` are resolved
    /// lexically, without touching the filesystem.
    pub fn target_dir(&self, cwd: &Path) -> PathBuf {
        normalize(&cwd.join(&self.project_name))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
