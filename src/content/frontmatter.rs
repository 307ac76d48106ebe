//! Front-matter block parsing.
//!
//! Content files may start with a metadata block delimited by `---`
//! lines:
//!
//! ```text
//! ---
//! title: "Hello World"
//! tags: ["rust", "blog"]
//! published: false
//! ---
//! body text
//! ```
//!
//! The block is a flat list of `key: value` lines. Surrounding quotes
//! are stripped from values, bracketed comma-separated lists parse as
//! arrays, unknown keys are ignored, and malformed lines are skipped
//! without aborting the parse. A file without a front-matter block is
//! all body.

use regex::Regex;
use std::sync::OnceLock;

/// Matches one `key: value` front-matter line.
static KEY_VALUE_RE: OnceLock<Regex> = OnceLock::new();

fn key_value_re() -> &'static Regex {
    KEY_VALUE_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)\s*:\s*(.*)$").unwrap_or_else(|_| unreachable!())
    })
}

/// Raw metadata recognized in a front-matter block.
///
/// Every field is optional here; defaults are applied when the parser
/// assembles the final `Post`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub published: Option<bool>,
}

/// Classification of a single front-matter line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Recognized `key: value` pair
    Field(&'a str, &'a str),
    /// Line that is not a key-value pair (skipped)
    Malformed(&'a str),
    Blank,
}

/// Split raw file content into an optional front-matter block and the body.
///
/// The block requires both an opening and a closing `---` on their own
/// lines at the top of the file. An unterminated block is not treated
/// as front matter: the whole file becomes body.
pub fn split_front_matter(raw: &str) -> (Option<Vec<&str>>, String) {
    let mut lines = raw.lines();
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return (None, raw.to_string()),
    }

    let mut block = Vec::new();
    for line in lines.by_ref() {
        if line.trim_end() == "---" {
            let body = lines.collect::<Vec<_>>().join("\n");
            return (Some(block), body.trim_start_matches('\n').to_string());
        }
        block.push(line);
    }

    (None, raw.to_string())
}

impl FrontMatter {
    /// Parse a front-matter block into recognized fields.
    ///
    /// Later occurrences of a key overwrite earlier ones.
    pub fn parse(block: &[&str]) -> Self {
        let mut fm = Self::default();

        for line in block {
            match classify(line) {
                Line::Field(key, value) => fm.apply(key, value),
                Line::Malformed(_) | Line::Blank => {}
            }
        }

        fm
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "title" => self.title = Some(strip_quotes(value).to_string()),
            "date" => self.date = Some(strip_quotes(value).to_string()),
            "excerpt" => self.excerpt = Some(strip_quotes(value).to_string()),
            "category" => self.category = Some(strip_quotes(value).to_string()),
            "tags" => self.tags = Some(parse_array(value)),
            "published" => {
                // Only an explicit `false` suppresses a post.
                let value = strip_quotes(value);
                self.published = Some(!value.eq_ignore_ascii_case("false"));
            }
            // Unknown keys are ignored for forward compatibility.
            _ => {}
        }
    }
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    match key_value_re().captures(trimmed) {
        Some(caps) => {
            let (key, value) = match (caps.get(1), caps.get(2)) {
                (Some(k), Some(v)) => (k.as_str(), v.as_str().trim()),
                _ => return Line::Malformed(line),
            };
            Line::Field(key, value)
        }
        None => Line::Malformed(line),
    }
}

/// Strip one layer of surrounding single or double quotes.
fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        if (bytes[0] == b'"' && bytes[value.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[value.len() - 1] == b'\'')
        {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a bracketed, comma-separated literal list.
///
/// `["a", 'b', c]` → `["a", "b", "c"]`. A non-bracketed value is
/// treated as a single-element list.
fn parse_array(value: &str) -> Vec<String> {
    let value = value.trim();
    let inner = match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => inner,
        None => {
            let single = strip_quotes(value);
            if single.is_empty() {
                return vec![];
            }
            return vec![single.to_string()];
        }
    };

    inner
        .split(',')
        .map(|item| strip_quotes(item).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_front_matter() {
        let raw = "---\ntitle: Hello\n---\n# Body\n";
        let (block, body) = split_front_matter(raw);
        assert_eq!(block, Some(vec!["title: Hello"]));
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_split_without_front_matter() {
        let raw = "# Just a heading\n\nSome text.";
        let (block, body) = split_front_matter(raw);
        assert!(block.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_unterminated_block_is_body() {
        let raw = "---\ntitle: Never Closed\nstill in block";
        let (block, body) = split_front_matter(raw);
        assert!(block.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_empty_body() {
        let raw = "---\ntitle: Only Meta\n---";
        let (block, body) = split_front_matter(raw);
        assert_eq!(block, Some(vec!["title: Only Meta"]));
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_preserves_body_dashes() {
        let raw = "---\ntitle: T\n---\nintro\n---\noutro";
        let (block, body) = split_front_matter(raw);
        assert_eq!(block, Some(vec!["title: T"]));
        assert_eq!(body, "intro\n---\noutro");
    }

    #[test]
    fn test_parse_basic_fields() {
        let fm = FrontMatter::parse(&[
            "title: \"Quoted Title\"",
            "date: 2024-01-15",
            "excerpt: 'single quoted'",
            "category: Dev",
        ]);

        assert_eq!(fm.title.as_deref(), Some("Quoted Title"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.excerpt.as_deref(), Some("single quoted"));
        assert_eq!(fm.category.as_deref(), Some("Dev"));
        assert_eq!(fm.tags, None);
        assert_eq!(fm.published, None);
    }

    #[test]
    fn test_parse_tags_array() {
        let fm = FrontMatter::parse(&[r#"tags: ["React", 'JavaScript', web]"#]);
        assert_eq!(
            fm.tags,
            Some(vec![
                "React".to_string(),
                "JavaScript".to_string(),
                "web".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_empty_tags_array() {
        let fm = FrontMatter::parse(&["tags: []"]);
        assert_eq!(fm.tags, Some(vec![]));
    }

    #[test]
    fn test_parse_bare_tag_value() {
        let fm = FrontMatter::parse(&["tags: rust"]);
        assert_eq!(fm.tags, Some(vec!["rust".to_string()]));
    }

    #[test]
    fn test_parse_published_flag() {
        assert_eq!(
            FrontMatter::parse(&["published: false"]).published,
            Some(false)
        );
        assert_eq!(
            FrontMatter::parse(&["published: FALSE"]).published,
            Some(false)
        );
        assert_eq!(
            FrontMatter::parse(&["published: true"]).published,
            Some(true)
        );
        // Anything but an explicit false keeps the post visible
        assert_eq!(
            FrontMatter::parse(&["published: maybe"]).published,
            Some(true)
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let fm = FrontMatter::parse(&[
            "this line has no separator",
            "title: Survived",
            ":: nonsense ::",
            "date: 2024-02-01",
        ]);

        assert_eq!(fm.title.as_deref(), Some("Survived"));
        assert_eq!(fm.date.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let fm = FrontMatter::parse(&["author: Alice", "layout: wide", "title: Known"]);
        assert_eq!(fm.title.as_deref(), Some("Known"));
        assert_eq!(fm, FrontMatter {
            title: Some("Known".to_string()),
            ..FrontMatter::default()
        });
    }

    #[test]
    fn test_parse_last_key_wins() {
        let fm = FrontMatter::parse(&["title: First", "title: Second"]);
        assert_eq!(fm.title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("title: x"), Line::Field("title", "x"));
        assert_eq!(classify("  "), Line::Blank);
        assert!(matches!(classify("no separator here"), Line::Malformed(_)));
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"hello\""), "hello");
        assert_eq!(strip_quotes("'hello'"), "hello");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("\"mismatched'"), "\"mismatched'");
        assert_eq!(strip_quotes("\""), "\"");
    }
}
