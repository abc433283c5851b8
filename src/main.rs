//! Crawl-Lens main entry point
//!
//! This is the command-line interface for the Crawl-Lens page processor.

use anyhow::{bail, Context};
use clap::Parser;
use crawl_lens::config::{load_config_with_hash, Config};
use crawl_lens::crawler::{build_http_client, fetch_page, FetchResult, PageProcessor};
use crawl_lens::output::{render_statistics, TextReportWriter};
use crawl_lens::url::ScopeFilter;
use crawl_lens::LensError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl-Lens: page-processing core of a restricted-domain crawler
///
/// Extracts in-scope links from fetched pages and keeps corpus statistics
/// (unique pages, longest page, subdomains, common words) as plain-text reports.
#[derive(Parser, Debug)]
#[command(name = "crawl-lens")]
#[command(version)]
#[command(about = "Link filtering and corpus statistics for a scoped crawl", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the crawl scope without processing anything
    #[arg(long, conflicts_with_all = ["check", "page", "fetch"])]
    dry_run: bool,

    /// Report whether each URL is inside the crawl scope and exit
    #[arg(long, value_name = "URL", num_args = 1.., conflicts_with_all = ["page", "fetch"])]
    check: Vec<String>,

    /// Process a local HTML file as the 200 response for URL (repeatable)
    #[arg(long, num_args = 2, value_names = ["URL", "FILE"], action = clap::ArgAction::Append)]
    page: Vec<String>,

    /// Fetch each URL once and process the response (links are not followed)
    #[arg(long, value_name = "URL", num_args = 1..)]
    fetch: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
    } else if !cli.check.is_empty() {
        handle_check(&config, &cli.check);
    } else if !cli.page.is_empty() || !cli.fetch.is_empty() {
        handle_process(&config, &cli.page, &cli.fetch, cli.quiet).await?;
    } else {
        bail!("Nothing to do: pass --dry-run, --check, --page or --fetch");
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawl_lens=info,warn"),
            1 => EnvFilter::new("crawl_lens=debug,info"),
            2 => EnvFilter::new("crawl_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows the loaded scope and output settings
fn handle_dry_run(config: &Config) {
    println!("=== Crawl-Lens Dry Run ===\n");

    println!("Allowed Domains ({}):", config.scope.allowed_domains.len());
    for domain in &config.scope.allowed_domains {
        println!("  - {}", domain);
    }

    println!("\nGated Domains ({}):", config.scope.gated.len());
    for gate in &config.scope.gated {
        println!("  - {} (path must contain {})", gate.domain, gate.required_path);
    }

    println!(
        "\nExcluded Extensions ({}): {}",
        config.scope.excluded_extensions.len(),
        config.scope.excluded_extensions.join(", ")
    );
    println!("Root Domain: {}", config.scope.root_domain);
    println!("Domain Match: {:?}", config.scope.domain_match);
    println!("Stop Words: {}", config.text.stop_words.len());

    println!("\nOutput:");
    println!("  Report directory: {}", config.output.report_dir);
    println!("  Top words: {}", config.output.top_words);

    println!("\n✓ Configuration is valid");
}

/// Handles the --check mode: prints the scope decision for each URL
fn handle_check(config: &Config, urls: &[String]) {
    let scope = ScopeFilter::new(&config.scope);
    for url in urls {
        let verdict = if scope.is_in_scope(url) {
            "in-scope"
        } else {
            "out-of-scope"
        };
        println!("{}\t{}", verdict, url);
    }
}

/// Handles page processing: local files first, then fetched URLs
async fn handle_process(
    config: &Config,
    pages: &[String],
    fetch_urls: &[String],
    quiet: bool,
) -> crawl_lens::Result<()> {
    let writer = TextReportWriter::new(&config.output.report_dir)?;
    tracing::info!("Writing reports to {}", writer.dir().display());

    let mut processor = PageProcessor::from_config(config, writer);

    // clap guarantees --page values come in URL/FILE pairs
    for pair in pages.chunks_exact(2) {
        let (url, file) = (&pair[0], &pair[1]);
        let content = std::fs::read(file).map_err(|source| LensError::PageRead {
            path: file.clone(),
            source,
        })?;
        print_links(&processor.process(url, &FetchResult::ok(content)));
    }

    if !fetch_urls.is_empty() {
        let client = build_http_client(&config.user_agent).map_err(|source| LensError::Http {
            url: fetch_urls[0].clone(),
            source,
        })?;

        for url in fetch_urls {
            tracing::info!("Fetching {}", url);
            let result = fetch_page(&client, url).await;
            print_links(&processor.process(url, &result));
        }
    }

    if !quiet {
        eprintln!();
        eprint!("{}", render_statistics(&processor.snapshot()));
    }

    Ok(())
}

fn print_links(links: &[crawl_lens::CanonicalUrl]) {
    for link in links {
        println!("{}", link);
    }
}
