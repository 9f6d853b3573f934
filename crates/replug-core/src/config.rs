//! Staging configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for staging addons into the host.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StageConfig {
    /// The host's addon-loading directory. Staged copies land here.
    pub addons_dir: PathBuf,

    /// Ask the host to re-scan its addon directory after batch reloads.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub refresh_after_reload: bool,
}

fn default_true() -> bool {
    true
}

impl StageConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref dir) = self.addons_dir {
            if dir.as_os_str().is_empty() {
                return Err("Addons directory cannot be empty".to_string());
            }
        } else {
            return Err("Addons directory is required".to_string());
        }
        Ok(())
    }
}

impl StageConfig {
    /// Create a new stage config builder.
    pub fn builder() -> StageConfigBuilder {
        StageConfigBuilder::default()
    }

    /// Create a simple config for a host addons directory.
    pub fn new(addons_dir: impl Into<PathBuf>) -> Self {
        Self {
            addons_dir: addons_dir.into(),
            refresh_after_reload: true,
        }
    }

    /// Staged target path for a raw addon name.
    pub fn staged_path(&self, staged_name: &str) -> PathBuf {
        self.addons_dir.join(staged_name)
    }
}
