//! Listing commands: paginated posts/projects and the front-page selection.
//!
//! Each command follows the same pipeline over one collection:
//! published filter → sort by date → paginate → print.

use crate::config::SiteConfig;
use crate::content::{ContentEntry, Post, Project, SiteContent};
use crate::index::{paginate, sorted_by_date, total_pages};
use crate::utils::date::format_long;
use anyhow::{Result, bail};
use colored::Colorize;

/// List published posts, newest first, one page at a time.
pub fn list_posts(config: &SiteConfig, content: &SiteContent, page: Option<&str>) -> Result<()> {
    let published: Vec<Post> = content
        .posts
        .iter()
        .filter(|post| post.published)
        .cloned()
        .collect();

    render_listing(
        "Articles",
        &published,
        requested_page(page),
        config.listing.per_page,
        print_post,
    )
}

/// List published projects, newest first, one page at a time.
pub fn list_projects(config: &SiteConfig, content: &SiteContent, page: Option<&str>) -> Result<()> {
    let published: Vec<Project> = content
        .projects
        .iter()
        .filter(|project| project.published)
        .cloned()
        .collect();

    render_listing(
        "Projects",
        &published,
        requested_page(page),
        config.listing.per_page,
        print_project,
    )
}

/// Show the front page: site identity, then the latest published articles.
pub fn list_latest(config: &SiteConfig, content: &SiteContent) -> Result<()> {
    let published: Vec<Post> = content
        .posts
        .iter()
        .filter(|post| post.published)
        .cloned()
        .collect();
    let sorted = sorted_by_date(&published);

    println!("{}", config.base.author.bold());
    if !config.base.description.is_empty() {
        println!("{}", config.base.description);
    }
    if let Some(github) = &config.base.links.github {
        println!("{}", github.underline());
    }
    println!();

    println!("{}", "Latest Articles".bold());
    println!();
    for post in sorted.iter().take(config.listing.front_page) {
        print_post(post);
    }

    Ok(())
}

/// Show a single entry by slug, searching posts first, then projects.
///
/// Drafts stay addressable here even though listings hide them.
pub fn show_entry(content: &SiteContent, slug: &str) -> Result<()> {
    if let Some(post) = content.posts.iter().find(|p| p.slug == slug) {
        if !post.published {
            println!("{}", "draft".yellow());
        }
        print_post(post);
        return Ok(());
    }
    if let Some(project) = content.projects.iter().find(|p| p.slug == slug) {
        if !project.published {
            println!("{}", "draft".yellow());
        }
        print_project(project);
        return Ok(());
    }

    bail!("no entry with slug `{slug}`")
}

/// Interpret a raw `--page` value, defaulting anything unusable to page 1.
///
/// A missing or unparsable page never errors on the display path.
fn requested_page(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

/// Shared listing pipeline: sort, slice the requested page, print a footer.
fn render_listing<E, F>(
    heading: &str,
    entries: &[E],
    page: Option<u64>,
    per_page: usize,
    print: F,
) -> Result<()>
where
    E: ContentEntry + Clone,
    F: Fn(&E),
{
    let sorted = sorted_by_date(entries);
    let pages = total_pages(sorted.len(), per_page);
    let window = paginate(&sorted, page, per_page);

    println!("{}", heading.bold());
    println!();
    if window.is_empty() {
        println!("  Nothing to see here yet");
    }
    for entry in &window {
        print(entry);
    }

    if pages > 0 {
        let current = page.unwrap_or(1).max(1);
        println!("{}", format!("page {current} of {pages}").dimmed());
    }

    Ok(())
}

pub(crate) fn print_post(post: &Post) {
    println!(
        "  {}  {}",
        format_long(&post.date).dimmed(),
        post.title.bold()
    );
    if let Some(description) = &post.description {
        println!("      {description}");
    }
    if !post.tags.is_empty() {
        println!("      {}", post.tags.join(", ").cyan());
    }
}

pub(crate) fn print_project(project: &Project) {
    println!(
        "  {}  {}",
        format_long(&project.date).dimmed(),
        project.title.bold()
    );
    if let Some(description) = &project.description {
        println!("      {description}");
    }
    if !project.tags.is_empty() {
        println!("      {}", project.tags.join(", ").cyan());
    }
    if let Some(link) = &project.github_link {
        println!("      github: {}", link.underline());
    }
    if let Some(link) = &project.demo_link {
        println!("      demo:   {}", link.underline());
    }
}
