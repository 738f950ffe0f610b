//! `[listing]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[listing]` section in tagline.toml - listing page behavior.
///
/// # Example
/// ```toml
/// [listing]
/// per_page = 5
/// front_page = 5
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Items per page in the posts/projects listings.
    #[serde(default = "defaults::listing::per_page")]
    #[educe(Default = defaults::listing::per_page())]
    pub per_page: usize,

    /// Number of latest articles shown by the `latest` command.
    #[serde(default = "defaults::listing::front_page")]
    #[educe(Default = defaults::listing::front_page())]
    pub front_page: usize,
}
