//! Single-post parsing: slug to `Post` with defaults applied.

use super::error::ContentError;
use super::frontmatter::{FrontMatter, split_front_matter};
use super::post::{Post, estimate_reading_time, title_from_slug};
use super::store::ContentStore;
use crate::utils::date::{Date, today_ymd};
use std::fs;

/// Load and parse exactly one content file into a `Post`.
///
/// The slug is resolved against the store's extension candidates; no
/// matching file fails with [`ContentError::NotFound`], an unreadable
/// file with [`ContentError::Io`]. Missing optional metadata falls back
/// to documented defaults:
///
/// - `title`: placeholder generated from the slug
/// - `date`: current date when missing or failing calendar validation
/// - `excerpt`: empty string
/// - `tags`: empty list
/// - `category`: uncategorized
/// - `published`: true (explicit `false` required to suppress)
pub fn parse_post(store: &ContentStore, slug: &str) -> Result<Post, ContentError> {
    let path = store
        .locate(slug)
        .ok_or_else(|| ContentError::NotFound(slug.to_string()))?;

    let raw = fs::read_to_string(&path).map_err(|err| ContentError::Io(path, err))?;

    let (block, content) = split_front_matter(&raw);
    let fm = block
        .map(|lines| FrontMatter::parse(&lines))
        .unwrap_or_default();

    let date = fm
        .date
        .filter(|d| Date::parse(d).is_some())
        .unwrap_or_else(today_ymd);

    let reading_time = estimate_reading_time(&content);

    Ok(Post {
        slug: slug.to_string(),
        title: fm.title.unwrap_or_else(|| title_from_slug(slug)),
        date,
        excerpt: fm.excerpt.unwrap_or_default(),
        content,
        tags: fm.tags.unwrap_or_default(),
        category: fm.category,
        published: fm.published.unwrap_or(true),
        reading_time,
    })
}
