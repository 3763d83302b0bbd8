//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use forumcrawl::DEFAULT_MAX_PAGES;

/// Default search-listing URL when none is given.
pub const DEFAULT_START_URL: &str =
    "https://www.tripadvisor.com/SearchForums?q=AI+trip+itinerary";

/// Default CSV output filename.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Crawl forum search results and export keyword-matching entries as CSV.
///
/// Forumcrawl walks a paginated search-result listing, fetches each
/// entry's detail page for its full text, keeps only entries matching the
/// configured keywords, and writes them as `type,text,detail_url` rows.
#[derive(Parser, Debug)]
#[command(name = "forumcrawl")]
#[command(author, version, about)]
pub struct Args {
    /// Starting URL of the forum search listing
    #[arg(short, long, default_value = DEFAULT_START_URL)]
    pub url: String,

    /// Maximum number of listing pages to traverse (0 crawls nothing)
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// CSV output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Keyword an entry's text must contain, case-insensitively, to be
    /// kept (repeatable)
    #[arg(
        short,
        long = "keyword",
        value_name = "KEYWORD",
        default_values_t = [String::from("AI"), String::from("Itinerary")]
    )]
    pub keywords: Vec<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["forumcrawl"]).unwrap();
        assert_eq!(args.url, DEFAULT_START_URL);
        assert_eq!(args.max_pages, 50); // DEFAULT_MAX_PAGES
        assert_eq!(args.output, PathBuf::from("output.csv"));
        assert_eq!(args.keywords, vec!["AI", "Itinerary"]);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_keywords_replace_defaults_when_given() {
        let args =
            Args::try_parse_from(["forumcrawl", "--keyword", "beach", "-k", "hotel"]).unwrap();
        assert_eq!(args.keywords, vec!["beach", "hotel"]);
    }

    #[test]
    fn test_cli_max_pages_accepts_zero() {
        let args = Args::try_parse_from(["forumcrawl", "--max-pages", "0"]).unwrap();
        assert_eq!(args.max_pages, 0);
    }

    #[test]
    fn test_cli_max_pages_rejects_non_numeric() {
        let result = Args::try_parse_from(["forumcrawl", "--max-pages", "many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_url_and_output_flags() {
        let args = Args::try_parse_from([
            "forumcrawl",
            "--url",
            "https://example.com/search",
            "--output",
            "trips.csv",
        ])
        .unwrap();
        assert_eq!(args.url, "https://example.com/search");
        assert_eq!(args.output, PathBuf::from("trips.csv"));
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["forumcrawl", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["forumcrawl", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["forumcrawl", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
