//! Tagline - content index and tag query engine for a static blog.

mod cli;
mod config;
mod content;
mod index;
mod list;
mod logger;
mod tags;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::SiteContent;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    let content = SiteContent::load(config)?;

    match &cli.command {
        Commands::Posts { page } => list::list_posts(config, &content, page.as_deref()),
        Commands::Projects { page } => list::list_projects(config, &content, page.as_deref()),
        Commands::Latest => list::list_latest(config, &content),
        Commands::Tags { slugs } => tags::tag_cloud(&content, *slugs),
        Commands::Tag { slug } => tags::tag_page(&content, slug),
        Commands::Show { slug } => list::show_entry(&content, slug),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;
    crate::log!("config"; "using {}", config.config_path.display());

    Ok(config)
}
