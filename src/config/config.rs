//! src/config/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages the user-editable settings: the ordered list of root folders to
//! search, the editor command used by `--code`, and a `max_depth` field that
//! is accepted for file compatibility but not enforced by the traversal.
//! Loads and saves settings as TOML from the proper cross-platform config
//! path using the [`directories`](https://docs.rs/directories) crate.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// How often the "config file found" notice may be printed.
const NOTICE_INTERVAL: Duration = Duration::from_secs(8 * 60 * 60);

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ordered root folders to search; `~/` shorthand is expanded at search
    /// start.
    pub folders: Vec<String>,

    /// Accepted from existing config files; the search has no depth cutoff,
    /// so this value is never read by the traversal.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Command used to open a selection when `--code` is passed.
    #[serde(default = "default_editor_cmd")]
    pub editor_cmd: String,
}

fn default_max_depth() -> usize {
    3
}

fn default_editor_cmd() -> String {
    "code".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            folders: vec!["~/Documents".to_string(), "~/Projects".to_string()],
            max_depth: default_max_depth(),
            editor_cmd: default_editor_cmd(),
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the platform config dir.
    ///
    /// Returns `Ok(None)` when no config file exists yet, so the caller can
    /// run the first-time setup flow.
    pub async fn load() -> anyhow::Result<Option<Self>> {
        let path: PathBuf = Self::config_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let text: String = tokio::fs::read_to_string(&path).await?;
        let cfg: Config = toml::from_str(&text)?;
        Ok(Some(cfg))
    }

    /// Saves config to the TOML file at the platform config dir.
    pub async fn save(&self) -> anyhow::Result<()> {
        let path: PathBuf = Self::config_path()?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let toml_str: String = toml::to_string_pretty(self)?;
        tokio::fs::write(&path, toml_str).await?;
        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Prints a reminder of where the config file lives, at most once per
    /// eight hours. Best effort: stamp-file I/O failures are ignored.
    pub async fn print_notice_if_due(&self) {
        let Ok(stamp) = Self::notice_stamp_path() else {
            return;
        };

        let due: bool = match tokio::fs::read_to_string(&stamp).await {
            Ok(text) => match text.trim().parse::<u64>() {
                Ok(last) => now_secs().saturating_sub(last) > NOTICE_INTERVAL.as_secs(),
                Err(_) => true,
            },
            Err(_) => true,
        };
        if !due {
            return;
        }

        if let Ok(path) = Self::config_path() {
            println!(
                "Config file found: {}\nThis message is printed once every 8 hours",
                path.display()
            );
        }

        if let Some(parent) = stamp.parent() {
            let _ = tokio::fs::create_dir_all(parent).await;
        }
        let _ = tokio::fs::write(&stamp, now_secs().to_string()).await;
    }

    fn notice_stamp_path() -> anyhow::Result<PathBuf> {
        Ok(Self::project_dirs()?.cache_dir().join("last-notice"))
    }

    fn project_dirs() -> anyhow::Result<ProjectDirs> {
        ProjectDirs::from("org", "pnav", "pnav")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
