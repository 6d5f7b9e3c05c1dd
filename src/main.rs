// Listing extraction CLI
//
// Reads a saved old-layout listing page (file or stdin), extracts its feed and
// prints it as JSON or as one summary line per post. Fetching the page is left
// to whatever produced the input.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use feedscrape::{Feed, FeedOptions, SortMethod, parse_feed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Extract posts from an old-layout listing page
#[derive(Debug, Parser)]
#[command(name = "feedscrape", version, about)]
struct Cli {
    /// HTML file to read; stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Subreddit the page lists (front page when omitted)
    #[arg(long, short = 'r')]
    subreddit: Option<String>,

    /// Sort order the page was requested with
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortMethod>,

    /// Cursor the page was requested with
    #[arg(long)]
    after: Option<String>,

    /// Index of the first post on the page
    #[arg(long, default_value_t = 0)]
    count: u32,

    /// Host the listing was requested from
    #[arg(long, env = "FEEDSCRAPE_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn parse_sort(value: &str) -> Result<SortMethod, String> {
    value.parse().map_err(|e| format!("{e}"))
}

impl Cli {
    fn feed_options(&self) -> Result<FeedOptions> {
        let mut builder = FeedOptions::builder().count(self.count);
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(subreddit) = &self.subreddit {
            builder = builder.subreddit(subreddit);
        }
        if let Some(sort) = self.sort {
            builder = builder.sort(sort);
        }
        if let Some(after) = &self.after {
            builder = builder.after(after);
        }
        builder.build().context("Invalid feed options")
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut html = String::new();
                io::stdin()
                    .read_to_string(&mut html)
                    .context("Failed to read stdin")?;
                Ok(html)
            }
        }
    }
}

fn render(feed: &Feed, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(feed).context("Failed to encode feed")
        }
        OutputFormat::Json => serde_json::to_string(feed).context("Failed to encode feed"),
        OutputFormat::Text => {
            let now = Utc::now();
            let mut out: Vec<String> = feed.posts.iter().map(|p| p.summary_line(now)).collect();
            if let Some(next) = &feed.next_page {
                out.push(format!("next: {next}"));
            }
            Ok(out.join("\n"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let options = cli.feed_options()?;
    let html = cli.read_input()?;

    let feed = parse_feed(&html, &options).context("Failed to extract feed")?;
    tracing::info!(
        posts = feed.posts.len(),
        source = %options.feed_url(),
        "extracted feed"
    );

    let rendered = render(&feed, cli.format, cli.pretty)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write output")?;
    Ok(())
}
