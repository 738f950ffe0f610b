//! Site configuration management for `tagline.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url, links)    |
//! | `[listing]` | Listing pages (page size, front-page count)  |
//! | `[content]` | Snapshot file locations (posts, projects)    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "JollyBlog"
//! description = "A personal blog"
//! url = "https://example.com"
//!
//! [listing]
//! per_page = 5
//!
//! [content]
//! posts = "content/posts.json"
//! projects = "content/projects.json"
//! ```

mod base;
mod content;
pub mod defaults;
mod error;
mod listing;

// Internal imports used in this module
use base::BaseConfig;
use content::ContentConfig;
use error::ConfigError;
use listing::ListingConfig;

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

/// Root configuration structure representing tagline.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Listing page settings
    #[serde(default)]
    pub listing: ListingConfig,

    /// Content snapshot locations
    #[serde(default)]
    pub content: ContentConfig,
}

impl SiteConfig {
    /// Load configuration from a toml file.
    ///
    /// Snapshot paths in `[content]` are interpreted relative to the
    /// config file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config: Self = toml::from_str(&raw).map_err(ConfigError::Toml)?;
        config.config_path = path.to_path_buf();

        if let Some(dir) = path.parent() {
            config.content.posts = dir.join(&config.content.posts);
            config.content.projects = dir.join(&config.content.projects);
        }

        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded file.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(per_page) = cli.per_page {
            self.listing.per_page = per_page;
        }
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.base.title.is_empty() {
            return Err(ConfigError::Validation("`base.title` must not be empty".into()).into());
        }
        if self.listing.per_page == 0 {
            return Err(
                ConfigError::Validation("`listing.per_page` must be at least 1".into()).into(),
            );
        }
        for (name, path) in [
            ("posts", &self.content.posts),
            ("projects", &self.content.projects),
        ] {
            if !path.exists() {
                return Err(ConfigError::Validation(format!(
                    "{name} snapshot not found: {}",
                    path.display()
                ))
                .into());
            }
        }

        Ok(())
    }
}
