use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use post_metadata_fetcher::{FetchConfig, MetadataFetcher};

// Powell's Lawn Care Instagram reels
const EXAMPLE_URL: &str = "https://www.instagram.com/powellslawncare/reels";

/// Fetch post metadata with gallery-dl and save it as metadata.json
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Profile or post URL to extract metadata from
    #[arg(default_value = EXAMPLE_URL)]
    url: String,

    /// Directory for metadata.json (defaults to a new timestamped directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Extraction tool to run
    #[arg(long, default_value = "gallery-dl")]
    tool: String,

    /// Maximum number of posts to extract
    #[arg(long, default_value_t = 12)]
    max_posts: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let base_dir = std::env::current_dir().context("Failed to read current directory")?;
    let config = FetchConfig {
        tool: cli.tool,
        max_posts: cli.max_posts,
        base_dir,
        ..FetchConfig::default()
    };

    let fetcher = MetadataFetcher::with_config(config);
    match fetcher.fetch(&cli.url, cli.output_dir.as_deref()) {
        Some(path) => {
            println!("Metadata saved to {}", path.display());
            Ok(())
        }
        None => {
            eprintln!("No metadata was saved for {}", cli.url);
            std::process::exit(1);
        }
    }
}
