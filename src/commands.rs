//! Subcommand implementations: formatting repository queries for the
//! terminal or as JSON.

use crate::cli::OutputArgs;
use crate::content::{Post, PostRepository};
use crate::log;
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;

// ============================================================================
// list
// ============================================================================

/// List published posts, optionally filtered by tag and/or category.
pub fn list(
    repo: &PostRepository,
    tag: Option<&str>,
    category: Option<&str>,
    output: &OutputArgs,
) -> Result<()> {
    let posts = select_posts(repo, tag, category);

    if output.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    for post in &posts {
        print_post_line(post);
    }
    log!("content"; "{} post(s)", posts.len());
    Ok(())
}

/// Resolve the listing filters. Both filters apply when both are given.
fn select_posts(repo: &PostRepository, tag: Option<&str>, category: Option<&str>) -> Vec<Post> {
    let mut posts = match tag {
        Some(tag) => repo.posts_by_tag(tag),
        None => repo.all_posts(),
    };
    if let Some(category) = category {
        posts.retain(|post| post.in_category(category));
    }
    posts
}

// ============================================================================
// tags / categories
// ============================================================================

/// List all tags with post counts.
///
/// Counts come from one captured listing rather than per-tag repository
/// calls, so every count reflects the same snapshot of the store.
pub fn tags(repo: &PostRepository, output: &OutputArgs) -> Result<()> {
    let posts = repo.all_posts();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for post in &posts {
        for tag in &post.tags {
            *counts.entry(tag.clone()).or_default() += 1;
        }
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    for (tag, count) in &counts {
        println!("{}  {}", tag.bold(), format!("({count})").dimmed());
    }
    log!("content"; "{} tag(s)", counts.len());
    Ok(())
}

/// List all categories with post counts.
pub fn categories(repo: &PostRepository, output: &OutputArgs) -> Result<()> {
    let posts = repo.all_posts();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for post in &posts {
        if let Some(category) = &post.category {
            *counts.entry(category.clone()).or_default() += 1;
        }
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    for (category, count) in &counts {
        println!("{}  {}", category.bold(), format!("({count})").dimmed());
    }
    log!("content"; "{} categories", counts.len());
    Ok(())
}

// ============================================================================
// show
// ============================================================================

/// Show one post by slug, unpublished posts included.
pub fn show(repo: &PostRepository, slug: &str, output: &OutputArgs) -> Result<()> {
    let post = repo.get(slug)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
        return Ok(());
    }

    println!("{}", post.title.bold());
    println!("{}  {}", "date:".dimmed(), post.date);
    if let Some(category) = &post.category {
        println!("{}  {}", "category:".dimmed(), category);
    }
    if !post.tags.is_empty() {
        println!("{}  {}", "tags:".dimmed(), post.tags.join(", "));
    }
    if let Some(minutes) = post.reading_time {
        println!("{}  {} min", "reading:".dimmed(), minutes);
    }
    if !post.published {
        println!("{}", "(unpublished)".bright_yellow());
    }
    if !post.excerpt.is_empty() {
        println!("\n{}", post.excerpt);
    }
    println!("\n{}", post.content);
    Ok(())
}

// ============================================================================
// related
// ============================================================================

/// Rank posts related to `slug` and print the top `limit`.
pub fn related(repo: &PostRepository, slug: &str, limit: usize, output: &OutputArgs) -> Result<()> {
    let related = repo.related_to(slug, limit)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&related)?);
        return Ok(());
    }

    if related.is_empty() {
        log!("content"; "no related posts for `{slug}`");
        return Ok(());
    }

    for post in &related {
        print_post_line(post);
    }
    Ok(())
}

/// One listing line: date, slug, tags.
fn print_post_line(post: &Post) {
    let tags = if post.tags.is_empty() {
        String::new()
    } else {
        format!("[{}]", post.tags.join(", "))
    };
    println!(
        "{}  {}  {}",
        post.date.dimmed(),
        post.slug.bold(),
        tags.dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use std::fs;
    use tempfile::TempDir;

    fn repo_for(dir: &TempDir) -> PostRepository {
        let mut config = BlogConfig::default();
        config.content.dir = dir.path().to_path_buf();
        let config: &'static BlogConfig = Box::leak(Box::new(config));
        PostRepository::new(config)
    }

    fn write_post(dir: &TempDir, slug: &str, front: &str) {
        fs::write(
            dir.path().join(format!("{slug}.md")),
            format!("---\n{front}\n---\nbody"),
        )
        .unwrap();
    }

    #[test]
    fn test_select_posts_applies_both_filters() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "a", "tags: [\"rust\"]\ncategory: Dev");
        write_post(&dir, "b", "tags: [\"rust\"]\ncategory: Cloud");
        write_post(&dir, "c", "tags: [\"web\"]\ncategory: Dev");

        let repo = repo_for(&dir);
        let posts = select_posts(&repo, Some("rust"), Some("dev"));
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a"]);
    }

    #[test]
    fn test_select_posts_single_filters() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "a", "tags: [\"rust\"]\ncategory: Dev");
        write_post(&dir, "b", "tags: [\"web\"]\ncategory: Cloud");

        let repo = repo_for(&dir);
        assert_eq!(select_posts(&repo, Some("rust"), None).len(), 1);
        assert_eq!(select_posts(&repo, None, Some("cloud")).len(), 1);
        assert_eq!(select_posts(&repo, None, None).len(), 2);
    }
}
