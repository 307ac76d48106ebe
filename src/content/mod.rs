//! Content indexing core.
//!
//! The pipeline, leaf-first:
//!
//! ```text
//! ContentStore ──► parse_post ──► PostRepository ──► related_posts
//!  (list/locate)   (one file →     (aggregate,        (score + rank)
//!                   Post)           filter, query)
//! ```
//!
//! Posts are derived, read-only, and recomputed from disk on each
//! repository call; callers wanting stability across several
//! operations capture one `all_posts()` result and reuse it.

mod error;
mod frontmatter;
mod parser;
pub mod post;
mod related;
mod repository;
mod store;

pub use post::Post;
pub use repository::PostRepository;
