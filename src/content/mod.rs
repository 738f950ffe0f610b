//! Content collections handed to the index engine.
//!
//! A [`SiteContent`] is an immutable per-run snapshot of both collections.
//! It is constructed once at startup and only ever read afterwards; the
//! engine in [`crate::index`] never mutates it.

pub mod entry;
pub mod load;

pub use entry::{ContentEntry, Post, Project};

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;

/// Both content collections, loaded and validated.
#[derive(Debug)]
pub struct SiteContent {
    pub posts: Vec<Post>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// Load both snapshot files in parallel.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let (posts, projects) = rayon::join(
            || load::load_entries::<Post>(&config.content.posts),
            || load::load_entries::<Project>(&config.content.projects),
        );

        let content = Self {
            posts: posts?,
            projects: projects?,
        };
        log!("content"; "loaded {} posts, {} projects",
            content.posts.len(), content.projects.len());

        Ok(content)
    }
}
