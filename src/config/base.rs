//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in tagline.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "JollyBlog"
/// description = "A personal blog about whatever"
/// author = "JollyCoding"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in listing headers.
    pub title: String,

    /// Author name shown on the front page.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Site description shown on the front page.
    #[serde(default)]
    pub description: String,

    /// Base URL for absolute links.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Outbound profile links.
    #[serde(default)]
    pub links: LinksConfig,
}

/// `[base.links]` - outbound profile links, all optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinksConfig {
    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub instagram: Option<String>,

    #[serde(default)]
    pub personal_site: Option<String>,
}
