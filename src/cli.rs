//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tagline content index CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (where the config file lives)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: tagline.toml)
    #[arg(short = 'C', long, default_value = "tagline.toml")]
    pub config: PathBuf,

    /// Items per listing page, overrides `[listing].per_page`
    #[arg(short, long)]
    pub per_page: Option<usize>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List published posts, newest first, one page at a time
    Posts {
        /// 1-based page number. Missing or unparsable values fall back
        /// to the first page instead of failing.
        #[arg(short, long)]
        page: Option<String>,
    },

    /// List published projects, newest first, one page at a time
    Projects {
        /// 1-based page number. Missing or unparsable values fall back
        /// to the first page instead of failing.
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Show the front-page selection of latest articles
    Latest,

    /// Show the combined tag cloud across posts and projects
    Tags {
        /// Print URL slugs instead of display names with counts
        #[arg(long)]
        slugs: bool,
    },

    /// List posts and projects carrying a tag, addressed by its slug
    Tag {
        /// Normalized tag slug, e.g. "web-dev"
        slug: String,
    },

    /// Show a single entry by its slug, drafts included
    Show {
        /// Entry slug, unique within its kind
        slug: String,
    },
}
