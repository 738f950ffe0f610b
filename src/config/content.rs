//! `[content]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in tagline.toml - where the snapshot files live.
///
/// Paths are relative to the config file's directory.
///
/// # Example
/// ```toml
/// [content]
/// posts = "content/posts.json"
/// projects = "content/projects.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Posts snapshot file.
    #[serde(default = "defaults::content::posts")]
    #[educe(Default = defaults::content::posts())]
    pub posts: PathBuf,

    /// Projects snapshot file.
    #[serde(default = "defaults::content::projects")]
    #[educe(Default = defaults::content::projects())]
    pub projects: PathBuf,
}
