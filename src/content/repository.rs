//! Post aggregation and queries over the full content set.
//!
//! Every operation re-reads the content store; there is no cache
//! shared between calls. Per-post parse failures are dropped silently
//! from bulk results, matching the degraded-but-never-fatal contract
//! for listings.

use super::error::ContentError;
use super::parser::parse_post;
use super::post::Post;
use super::related::related_posts;
use super::store::ContentStore;
use crate::config::BlogConfig;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Query surface over the full post collection.
pub struct PostRepository {
    store: ContentStore,
}

impl PostRepository {
    pub const fn new(config: &'static BlogConfig) -> Self {
        Self {
            store: ContentStore::new(config),
        }
    }

    /// Direct single-post lookup by slug.
    ///
    /// Unlike the bulk listings, this fails explicitly when the slug
    /// cannot be resolved, and returns unpublished posts.
    pub fn get(&self, slug: &str) -> Result<Post, ContentError> {
        parse_post(&self.store, slug)
    }

    /// All published posts, sorted by date descending (newest first).
    ///
    /// Slugs that fail to parse are omitted. The sort is stable and the
    /// underlying slug enumeration is deterministic, so repeated calls
    /// over an unchanged store yield identical sequences.
    pub fn all_posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .store
            .list_slugs()
            .par_iter()
            .filter_map(|slug| parse_post(&self.store, slug).ok())
            .filter(|post| post.published)
            .collect();

        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Published posts carrying `tag` (case-insensitive exact match).
    pub fn posts_by_tag(&self, tag: &str) -> Vec<Post> {
        self.all_posts()
            .into_iter()
            .filter(|post| post.has_tag(tag))
            .collect()
    }

    /// Deduplicated, alphabetically sorted union of all tags across
    /// published posts.
    pub fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .all_posts()
            .into_iter()
            .flat_map(|post| post.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// Published posts in `category` (case-insensitive exact match).
    pub fn posts_by_category(&self, category: &str) -> Vec<Post> {
        self.all_posts()
            .into_iter()
            .filter(|post| post.in_category(category))
            .collect()
    }

    /// Deduplicated, alphabetically sorted union of all defined
    /// categories across published posts.
    pub fn all_categories(&self) -> Vec<String> {
        let categories: BTreeSet<String> = self
            .all_posts()
            .into_iter()
            .filter_map(|post| post.category)
            .collect();
        categories.into_iter().collect()
    }

    /// Related posts for the post identified by `slug`.
    ///
    /// The reference is resolved from the published listing when
    /// possible, falling back to a direct parse so an unpublished post
    /// can still serve as the reference (it never appears among the
    /// candidates, which come from the published listing only).
    pub fn related_to(&self, slug: &str, limit: usize) -> Result<Vec<Post>, ContentError> {
        let posts = self.all_posts();
        let current = match posts.iter().find(|post| post.slug == slug) {
            Some(post) => post.clone(),
            None => self.get(slug)?,
        };
        Ok(related_posts(&posts, &current, limit))
    }
}
