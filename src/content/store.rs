//! Content store access.
//!
//! Enumerates post slugs from the configured content directory and
//! resolves a slug back to a concrete file path. All access is
//! read-only; the store holds no cache between calls.

use crate::config::BlogConfig;
use crate::log;
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Read-only accessor over the content directory.
pub struct ContentStore {
    config: &'static BlogConfig,
}

impl ContentStore {
    pub const fn new(config: &'static BlogConfig) -> Self {
        Self { config }
    }

    /// Enumerate available post slugs.
    ///
    /// Lists files in the content directory whose extension matches one
    /// of the configured candidates, deduplicated (a slug with both
    /// `.mdx` and `.md` variants appears once) and in deterministic
    /// sorted order. A missing directory yields an empty list with a
    /// non-fatal warning.
    pub fn list_slugs(&self) -> Vec<String> {
        let dir = self.config.content_dir();
        if !dir.is_dir() {
            log!("warn"; "content directory not found: {}", dir.display());
            return vec![];
        }

        let slugs: BTreeSet<String> = WalkDir::new(&dir)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| self.matches_extension(ext))
            })
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();

        slugs.into_iter().collect()
    }

    /// Resolve a slug to a file path, trying extensions in configured
    /// order (`.mdx` before `.md` by default).
    pub fn locate(&self, slug: &str) -> Option<PathBuf> {
        let dir = self.config.content_dir();
        self.config
            .content
            .extensions
            .iter()
            .map(|ext| dir.join(format!("{slug}.{ext}")))
            .find(|candidate| candidate.is_file())
    }

    /// Exact extension match, consistent with `locate` candidates.
    fn matches_extension(&self, ext: &str) -> bool {
        self.config
            .content
            .extensions
            .iter()
            .any(|candidate| candidate == ext)
    }
}
