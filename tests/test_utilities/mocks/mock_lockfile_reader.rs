use npm_audit_payload::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock LockfileReader serving in-memory lockfiles per project directory
#[derive(Default)]
pub struct MockLockfileReader {
    pub lockfiles: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lockfile(mut self, project_path: &str, content: &str) -> Self {
        self.lockfiles
            .insert(PathBuf::from(project_path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            lockfiles: HashMap::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<LockfileSource> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        let content = self
            .lockfiles
            .get(project_path)
            .ok_or_else(|| anyhow::anyhow!("No mock lockfile for {}", project_path.display()))?;
        Ok(LockfileSource::new(
            project_path.join("package-lock.json"),
            content.clone(),
        ))
    }
}
