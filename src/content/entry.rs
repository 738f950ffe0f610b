//! Content entry types shared across the index engine.
//!
//! Posts and projects are separate collections with separate snapshot
//! files, but they share the capability the engine cares about: a publish
//! flag, a date, and tags. [`ContentEntry`] captures that shared shape so
//! sorting, aggregation, and lookup are written once instead of per kind.

use serde::{Deserialize, Serialize};

/// Shared base capability of every content kind.
///
/// Anything with a publish flag, an ISO 8601 date, and a tag list can be
/// sorted, aggregated into the tag cloud, and filtered by tag slug.
pub trait ContentEntry {
    /// Stable identifier, unique within the entry's kind.
    fn slug(&self) -> &str;

    fn title(&self) -> &str;

    /// ISO 8601 date string ("YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ").
    /// Lexicographic order over this form is chronological order.
    fn date(&self) -> &str;

    /// Unpublished entries are invisible to aggregation and listings,
    /// but remain individually addressable.
    fn published(&self) -> bool;

    fn tags(&self) -> &[String];
}

/// A blog article from the posts snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ISO 8601, validated at load time.
    pub date: String,

    pub published: bool,

    /// Free-text tag labels. Absent in the snapshot means no tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A portfolio project from the projects snapshot.
///
/// Same shape as [`Post`] plus optional outbound links. The snapshot uses
/// camelCase field names for the links, matching the upstream content build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ISO 8601, validated at load time.
    pub date: String,

    pub published: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Link to the project's repository, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    /// Link to a runnable demo, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
}

impl ContentEntry for Post {
    fn slug(&self) -> &str {
        &self.slug
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn date(&self) -> &str {
        &self.date
    }
    fn published(&self) -> bool {
        self.published
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl ContentEntry for Project {
    fn slug(&self) -> &str {
        &self.slug
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn date(&self) -> &str {
        &self.date
    }
    fn published(&self) -> bool {
        self.published
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
}
