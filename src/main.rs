//! Plume - blog content indexing and related-posts engine.

mod cli;
mod commands;
mod config;
mod content;
mod logger;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::BlogConfig;
use content::PostRepository;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static BlogConfig = Box::leak(Box::new(load_config(cli)?));
    let repo = PostRepository::new(config);

    match &cli.command {
        Commands::List {
            tag,
            category,
            output,
        } => commands::list(&repo, tag.as_deref(), category.as_deref(), output),
        Commands::Tags { output } => commands::tags(&repo, output),
        Commands::Categories { output } => commands::categories(&repo, output),
        Commands::Show { slug, output } => commands::show(&repo, slug, output),
        Commands::Related {
            slug,
            limit,
            output,
        } => commands::related(&repo, slug, limit.unwrap_or(config.related.limit), output),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: the defaults describe a
/// conventional `content/` directory, and even a missing content
/// directory only degrades to an empty post set at query time.
fn load_config(cli: &'static Cli) -> Result<BlogConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        BlogConfig::from_path(&config_path)?
    } else {
        BlogConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
