//! The `Post` record and its derived fields.
//!
//! A post is a read-only view over one content file: front-matter
//! metadata plus the body text. Posts are recomputed from disk on each
//! repository access and never mutated in place.

use serde::Serialize;
use std::collections::BTreeSet;

/// Words per minute used for the reading-time estimate.
const READING_WPM: usize = 200;

/// A parsed content file, exposed to all listing and ranking queries.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Unique identifier, derived from the filename (sans extension)
    pub slug: String,

    /// Post title (placeholder generated from the slug when absent)
    pub title: String,

    /// Publication date as "YYYY-MM-DD" (defaults to the current date)
    pub date: String,

    /// Short summary, empty when front matter omits it
    #[serde(skip_serializing_if = "String::is_empty")]
    pub excerpt: String,

    /// Body text after front-matter stripping
    pub content: String,

    /// Tags, case-sensitive at storage time
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Category; `None` means uncategorized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Whether this post appears in public listings
    pub published: bool,

    /// Estimated reading time in minutes (None for an empty body)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
}

impl Post {
    /// Case-insensitive tag membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }

    /// Number of distinct tags shared with `other`.
    ///
    /// A case-insensitive set intersection: tags differing only in
    /// case (valid, since storage is case-sensitive) collapse to one
    /// entry on each side before counting, so duplicates never
    /// inflate the overlap.
    pub fn shared_tag_count(&self, other: &Post) -> usize {
        let ours: BTreeSet<String> = self.tags.iter().map(|t| t.to_lowercase()).collect();
        let theirs: BTreeSet<String> = other.tags.iter().map(|t| t.to_lowercase()).collect();
        ours.intersection(&theirs).count()
    }

    /// Case-insensitive category match. Uncategorized posts match nothing.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase())
    }
}

/// Generate a placeholder title from a slug.
///
/// `"hello-rust-world"` → `"Hello Rust World"`
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Estimate reading time in whole minutes, rounding up.
///
/// Returns `None` when the body contains no words.
pub fn estimate_reading_time(body: &str) -> Option<u32> {
    let words = body.split_whitespace().count();
    if words == 0 {
        return None;
    }
    Some(words.div_ceil(READING_WPM) as u32)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
