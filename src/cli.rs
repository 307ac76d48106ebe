//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plume blog content indexer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: plume.toml)
    #[arg(short = 'C', long, default_value = "plume.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output arguments
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Emit machine-readable JSON instead of the human listing
    #[arg(short, long)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List published posts, newest first
    List {
        /// Only posts carrying this tag (case-insensitive)
        #[arg(short, long)]
        tag: Option<String>,

        /// Only posts in this category (case-insensitive)
        #[arg(short = 'g', long)]
        category: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List all tags across published posts
    Tags {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List all categories across published posts
    Categories {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show one post by slug (includes unpublished posts)
    Show {
        /// Post slug (filename sans extension)
        slug: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rank posts related to the given slug
    Related {
        /// Reference post slug
        slug: String,

        /// Maximum number of related posts (default from config)
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_list(&self) -> bool {
        matches!(self.command, Commands::List { .. })
    }
    pub const fn is_show(&self) -> bool {
        matches!(self.command, Commands::Show { .. })
    }
    pub const fn is_related(&self) -> bool {
        matches!(self.command, Commands::Related { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["plume", "list", "--tag", "rust"]);
        assert!(cli.is_list());
        match cli.command {
            Commands::List { tag, category, output } => {
                assert_eq!(tag.as_deref(), Some("rust"));
                assert!(category.is_none());
                assert!(!output.json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_related_with_limit() {
        let cli = Cli::parse_from(["plume", "related", "hello-world", "--limit", "5", "--json"]);
        match cli.command {
            Commands::Related { slug, limit, output } => {
                assert_eq!(slug, "hello-world");
                assert_eq!(limit, Some(5));
                assert!(output.json);
            }
            _ => panic!("expected related command"),
        }
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["plume", "tags"]);
        assert_eq!(cli.config, PathBuf::from("plume.toml"));
    }
}
