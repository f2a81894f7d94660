use crate::error::{Result, VercError};
use crate::io;
use crate::paths;
use crate::types::BoardStatus;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// BoardConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_columns")]
    pub columns: Vec<BoardStatus>,
}

fn default_columns() -> Vec<BoardStatus> {
    BoardStatus::all().to_vec()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl BoardConfig {
    pub fn is_enabled(&self, status: BoardStatus) -> bool {
        self.columns.contains(&status)
    }
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub site: SiteConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            site: SiteConfig {
                name: site_name.into(),
                description: None,
            },
            board: BoardConfig::default(),
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(VercError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    /// Create the `.vercflow/` tree and write a default config if none
    /// exists. Idempotent; an existing config is loaded, not overwritten.
    pub fn init(root: &Path, site_name: &str) -> Result<Self> {
        let dirs = [
            paths::VERCFLOW_DIR,
            paths::RECORDS_DIR,
            paths::ACTIVITIES_DIR,
            paths::PROJECTS_DIR,
            paths::PROFESSIONALS_DIR,
        ];
        for dir in dirs {
            io::ensure_dir(&root.join(dir))?;
        }

        let path = paths::config_path(root);
        if path.exists() {
            return Self::load(root);
        }
        let cfg = Self::new(site_name);
        cfg.save(root)?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
