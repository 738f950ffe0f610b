//! Tag cloud and per-tag listing commands.

use crate::content::SiteContent;
use crate::index::{TagCounts, filter_by_tag_slug, merge_counts, sort_by_count, tag_counts};
use crate::list::{print_post, print_project};
use crate::utils::slug::{slugify, title_from_slug};
use anyhow::Result;
use colored::Colorize;

/// Show the combined tag cloud across posts and projects, most used first.
///
/// With `slugs` set, prints one URL slug per line instead - the list of
/// addressable tag pages.
pub fn tag_cloud(content: &SiteContent, slugs: bool) -> Result<()> {
    let counts = combined_counts(content);

    for tag in sort_by_count(&counts) {
        if slugs {
            println!("{}", slugify(tag));
        } else {
            println!("{} ({})", tag, counts[tag]);
        }
    }

    Ok(())
}

/// Show everything carrying a tag: articles, projects, and where the tag
/// sits in the cloud.
pub fn tag_page(content: &SiteContent, slug: &str) -> Result<()> {
    let title = title_from_slug(slug);

    // Lookup runs over the full collections; the published filter is a
    // separate display step, so unpublished entries stay addressable.
    let posts = filter_by_tag_slug(&content.posts, slug);
    let display_posts: Vec<_> = posts.into_iter().filter(|p| p.published).collect();

    let projects = filter_by_tag_slug(&content.projects, slug);
    let display_projects: Vec<_> = projects.into_iter().filter(|p| p.published).collect();

    println!("{}", format!("Articles with :: {title}").bold());
    println!();
    if display_posts.is_empty() {
        println!("  Nothing to see here yet");
    }
    for post in &display_posts {
        print_post(post);
    }

    println!();
    println!("{}", format!("Projects with :: {title}").bold());
    println!();
    if display_projects.is_empty() {
        println!("  Nothing to see here yet");
    }
    for project in &display_projects {
        print_project(project);
    }

    // The full cloud, with the current tag marked
    println!();
    println!("{}", "All Tags".bold());
    println!();
    let counts = combined_counts(content);
    for tag in sort_by_count(&counts) {
        let label = format!("{} ({})", tag, counts[tag]);
        if slugify(tag) == slug {
            println!("  {}", label.bold().underline());
        } else {
            println!("  {label}");
        }
    }

    Ok(())
}

/// Tag counts accumulated across both collections.
fn combined_counts(content: &SiteContent) -> TagCounts {
    merge_counts([tag_counts(&content.posts), tag_counts(&content.projects)])
}
