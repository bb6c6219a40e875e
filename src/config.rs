//! `npm-audit-payload.config.yml` support.
//!
//! Every key is optional. Values given on the command line are merged over
//! these by the CLI layer.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::audit_payload::policies::PackageFilter;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-audit-payload.config.yml";

/// Settings read from the YAML config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Same as `--skip-dev`
    pub skip_dev_dependencies: Option<bool>,
    /// Same as repeated `-e` flags
    pub exclude_packages: Option<Vec<String>>,
    /// Same as `--compact`
    pub compact: Option<bool>,
    /// Keys this version does not know about; reported, then ignored.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parses and validates YAML text. An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Exclusion patterns must be non-blank and acceptable to [`PackageFilter`].
    fn validate(&self) -> Result<()> {
        let Some(patterns) = &self.exclude_packages else {
            return Ok(());
        };
        if let Some(i) = patterns.iter().position(|p| p.trim().is_empty()) {
            bail!(
                "exclude_packages[{}] must not be empty.\n\n\
                 💡 Hint: Use a package name or a wildcard pattern such as \"@types/*\".",
                i
            );
        }
        PackageFilter::new(patterns.clone()).context("exclude_packages is invalid")?;
        Ok(())
    }
}

/// Loads the config at `path`. A missing file is an error.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let text = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check the --config path.",
            path.display()
        )
    })?;

    let config = ConfigFile::from_yaml(&text).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Keys are skip_dev_dependencies, exclude_packages and compact.",
            path.display()
        )
    })?;

    for key in config.unknown_fields.keys() {
        warn!(field = %key, path = %path.display(), "unknown config field will be ignored");
    }
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Looks for [`CONFIG_FILENAME`] in `dir`; absence is not an error.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let candidate = dir.join(CONFIG_FILENAME);
    if candidate.is_file() {
        load_config_from_path(&candidate).map(Some)
    } else {
        Ok(None)
    }
}
