use std::path::PathBuf;

/// AuditPayloadRequest - Internal request DTO for the payload use case
#[derive(Debug, Clone)]
pub struct AuditPayloadRequest {
    /// Project directories whose lockfiles feed one shared payload
    pub project_paths: Vec<PathBuf>,
    /// Whether entries flagged `"dev": true` are left out
    pub skip_dev_dependencies: bool,
}

impl AuditPayloadRequest {
    pub fn new(project_paths: Vec<PathBuf>, skip_dev_dependencies: bool) -> Self {
        Self {
            project_paths,
            skip_dev_dependencies,
        }
    }

    /// Request for a single project directory
    pub fn single(project_path: PathBuf, skip_dev_dependencies: bool) -> Self {
        Self::new(vec![project_path], skip_dev_dependencies)
    }
}
