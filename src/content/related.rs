//! Related-posts relevance ranking.
//!
//! Candidates are scored by shared-tag count with a small bonus for a
//! matching category, then ranked descending with date as the
//! tie-breaker.

use super::post::Post;
use std::cmp::Ordering;

/// Score added when the candidate's category matches the reference
/// post's category (case-insensitive, both defined).
///
/// Strictly less than one shared tag's weight (1.0): a category-only
/// match can never outrank a single shared tag, but the bonus breaks
/// ties between candidates with equal tag counts.
pub const CATEGORY_BONUS: f64 = 0.5;

/// Rank posts related to `current` within a captured listing.
///
/// Callers needing stability across several operations should capture
/// one listing and pass the same slice to each call.
///
/// - `current` itself is excluded by slug
/// - posts sharing no tag with `current` are excluded entirely
/// - an empty `current.tags` short-circuits to an empty result
/// - ordering: score descending, ties by date descending; the sort is
///   stable, so equal score and date preserve input order
/// - at most `limit` results (zero yields an empty result)
pub fn related_posts(posts: &[Post], current: &Post, limit: usize) -> Vec<Post> {
    if current.tags.is_empty() {
        return vec![];
    }

    let mut scored: Vec<(&Post, f64)> = Vec::new();
    for post in posts {
        if post.slug == current.slug {
            continue;
        }

        let shared = post.shared_tag_count(current);
        if shared == 0 {
            continue;
        }

        let mut score = shared as f64;
        if let (Some(theirs), Some(ours)) = (&post.category, &current.category)
            && theirs.to_lowercase() == ours.to_lowercase()
        {
            score += CATEGORY_BONUS;
        }

        scored.push((post, score));
    }

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.0.date.cmp(&a.0.date))
    });
    scored.truncate(limit);

    scored.into_iter().map(|(post, _)| post.clone()).collect()
}
