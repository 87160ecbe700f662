//! User configuration
//!
//! An optional TOML file supplies defaults for anything that can be passed on
//! the command line. It lives at `~/.config/trello2md/config.toml` unless
//! `--config` points elsewhere:
//!
//! ```toml
//! key = "..."
//! token = "..."
//! board_ids = ["5f1a..."]
//! list_filter = "Done"
//!
//! [show]
//! description = true
//! checklists = true
//! ```
//!
//! Values given on the command line or through the environment always win.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::core::models::ExportOptions;
use crate::core::services::ExportRequest;

/// Config directory, relative to the home directory
const CONFIG_DIR: &str = ".config/trello2md";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// List exported when nothing else is configured
pub const DEFAULT_LIST_FILTER: &str = "Done";

/// Get the default config file path.
///
/// Returns `~/.config/trello2md/config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trello application key
    pub key: Option<String>,
    /// Trello API token
    pub token: Option<String>,
    /// Trello API root, for proxies and test servers
    pub api_url: Option<String>,
    /// Boards exported when none are given on the command line
    pub board_ids: Vec<String>,
    /// List name exported when none is given on the command line
    pub list_filter: Option<String>,
    /// Card sections enabled by default
    pub show: ShowConfig,
}

/// Card sections enabled from the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ShowConfig {
    /// Render labels and members
    pub labels_and_members: bool,
    /// Render descriptions
    pub description: bool,
    /// Render checklists
    pub checklists: bool,
    /// Render comments
    pub comments: bool,
    /// Render attachments
    pub attachments: bool,
}

/// Card sections requested on the command line or through the environment.
///
/// `None` means the flag was not given, so the config file decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowOverrides {
    /// `--show-labels-and-members` / `SHOW_LABELS_AND_MEMBERS`
    pub labels_and_members: Option<bool>,
    /// `--show-description` / `SHOW_DESCRIPTION`
    pub description: Option<bool>,
    /// `--show-checklists` / `SHOW_CHECKLISTS`
    pub checklists: Option<bool>,
    /// `--show-comments` / `SHOW_COMMENTS`
    pub comments: Option<bool>,
    /// `--show-attachments` / `SHOW_ATTACHMENTS`
    pub attachments: Option<bool>,
}

impl ShowConfig {
    /// Apply explicit overrides on top of the configured sections
    #[must_use]
    pub fn resolve(self, overrides: ShowOverrides) -> ExportOptions {
        ExportOptions {
            show_labels_and_members: overrides
                .labels_and_members
                .unwrap_or(self.labels_and_members),
            show_description: overrides.description.unwrap_or(self.description),
            show_checklists: overrides.checklists.unwrap_or(self.checklists),
            show_comments: overrides.comments.unwrap_or(self.comments),
            show_attachments: overrides.attachments.unwrap_or(self.attachments),
        }
    }
}

/// Resolved Trello credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application key
    pub key: String,
    /// API token
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("token", &"<redacted>")
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if given, else from the default location.
    ///
    /// Only the default location may be absent; an explicit path must exist.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) if !path.exists() => {
                bail!("config file {} does not exist", path.display())
            },
            Some(path) => Self::load(path),
            None => Self::load(&default_config_path()),
        }
    }

    /// Merge command line credentials with the config file.
    ///
    /// Fails if either value is missing or blank after merging.
    pub fn credentials(
        &self,
        key: Option<String>,
        token: Option<String>,
    ) -> anyhow::Result<Credentials> {
        let Some(key) = non_blank(key).or_else(|| non_blank(self.key.clone())) else {
            bail!("missing Trello application key; pass --key or set KEY");
        };
        let Some(token) = non_blank(token).or_else(|| non_blank(self.token.clone())) else {
            bail!("missing Trello API token; pass --token or set TOKEN");
        };
        Ok(Credentials { key, token })
    }

    /// Merge command line export settings with the config file.
    ///
    /// Board ids from the command line replace the configured ones; blank
    /// ids are dropped. A section toggle given explicitly wins over the
    /// config file, including an explicit `false`.
    pub fn export_request(
        &self,
        board_ids: Vec<String>,
        list_filter: Option<String>,
        overrides: ShowOverrides,
    ) -> anyhow::Result<ExportRequest> {
        let given: Vec<String> = board_ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        let board_ids = if given.is_empty() {
            self.board_ids.clone()
        } else {
            given
        };
        if board_ids.is_empty() {
            bail!("no boards to export; pass --board-id or set BOARD_ID");
        }

        let list_filter = list_filter
            .or_else(|| self.list_filter.clone())
            .unwrap_or_else(|| DEFAULT_LIST_FILTER.to_string());
        if list_filter.is_empty() {
            bail!("list filter must not be empty");
        }

        Ok(ExportRequest {
            board_ids,
            list_filter,
            options: self.show.resolve(overrides),
        })
    }
}
