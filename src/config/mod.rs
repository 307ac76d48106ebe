//! Configuration management for `plume.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[content]` | Content store location and file extensions     |
//! | `[related]` | Related-posts ranking defaults                 |
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "content"
//! extensions = ["mdx", "md"]
//!
//! [related]
//! limit = 3
//! ```

pub mod defaults;
mod error;

use error::ConfigError;

use crate::cli::Cli;
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing plume.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BlogConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Content store settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Related-posts ranking settings
    #[serde(default)]
    pub related: RelatedConfig,
}

impl BlogConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: BlogConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the project root directory path
    pub fn get_root(&self) -> &Path {
        self.cli
            .and_then(|cli| cli.root.as_deref())
            .unwrap_or(Path::new("./"))
    }

    /// Content directory, resolved against the project root.
    pub fn content_dir(&self) -> PathBuf {
        if self.content.dir.is_absolute() {
            self.content.dir.clone()
        } else {
            self.get_root().join(&self.content.dir)
        }
    }

    /// Apply CLI argument overrides onto the loaded configuration.
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);
        self.config_path = self.get_root().join(&cli.config);

        if let Some(dir) = &cli.content {
            self.content.dir = dir.clone();
        }
    }

    /// Validate configuration consistency.
    ///
    /// A missing content directory is deliberately not rejected here:
    /// the store treats it as an empty post set at query time.
    pub fn validate(&self) -> Result<()> {
        if self.content.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "content.extensions must not be empty".to_string(),
            )
            .into());
        }

        for ext in &self.content.extensions {
            if ext.starts_with('.') || ext.is_empty() {
                return Err(ConfigError::Extension(ext.clone()).into());
            }
        }

        Ok(())
    }
}

// ============================================================================
// [content] Section
// ============================================================================

/// `[content]` section in plume.toml - content store configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Content source directory (front-matter annotated post files).
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// File extension candidates, tried in order when resolving a slug.
    #[serde(default = "defaults::content::extensions")]
    #[educe(Default = defaults::content::extensions())]
    pub extensions: Vec<String>,
}

// ============================================================================
// [related] Section
// ============================================================================

/// `[related]` section in plume.toml - related-posts ranking configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct RelatedConfig {
    /// Maximum number of related posts returned when the CLI does not
    /// override it.
    #[serde(default = "defaults::related::limit")]
    #[educe(Default = defaults::related::limit())]
    pub limit: usize,
}
