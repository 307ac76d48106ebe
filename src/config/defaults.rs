//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content".into()
    }

    /// Extension candidates in lookup order: `.mdx` first, `.md` fallback.
    pub fn extensions() -> Vec<String> {
        vec!["mdx".into(), "md".into()]
    }
}

// ============================================================================
// [related] Section Defaults
// ============================================================================

pub mod related {
    pub fn limit() -> usize {
        3
    }
}
