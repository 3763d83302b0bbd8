//! CLI entry point for the forumcrawl tool.

use anyhow::{Context, Result};
use clap::Parser;
use forumcrawl::{Crawler, ForumListingParser, PageFetcher, filter_by_keywords, write_csv};
use tracing::{debug, info};
use url::Url;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    // The one fatal configuration error: an unparseable start URL aborts
    // before any network activity.
    let start_url = Url::parse(&args.url)
        .with_context(|| format!("invalid start URL: {}", args.url))?;

    info!(url = %start_url, max_pages = args.max_pages, "starting crawl");

    let fetcher = PageFetcher::new();
    let crawler = Crawler::new(fetcher, ForumListingParser::new(), args.max_pages);
    let results = crawler.run(start_url).await;
    info!(total = results.len(), "crawl complete");

    let filtered = filter_by_keywords(results, &args.keywords);
    info!(retained = filtered.len(), "keyword filter applied");

    write_csv(&filtered, &args.output)
        .with_context(|| format!("could not write output to {}", args.output.display()))?;
    info!(output = %args.output.display(), "filtered results saved");

    Ok(())
}
