use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use psst_core::config::Config;
use psst_core::{search, SearchIndex, MIN_QUERY_LEN};

#[derive(Parser)]
#[command(name = "psst", about = "Search panel for a statically generated site, in the terminal")]
struct Cli {
    /// Rendered page to scan (`-` reads it from stdin).
    #[arg(default_value = "index.html")]
    page: PathBuf,

    /// Run one query and print the matches instead of opening the TUI.
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Output format for --query.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write debug logs to /tmp/psst-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `url<TAB>title` line per match.
    Text,
    /// Pretty-printed JSON array of the matching entries.
    Json,
    /// The HTML fragment the in-page dropdown would show.
    Html,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/psst-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("psst debug log started — tail -f /tmp/psst-debug.log");
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());

    let (index, page_label) = scan_page(&cli.page, &config)?;
    tracing::debug!(page = %page_label, entries = index.len(), "page scanned");

    match cli.query {
        Some(query) => one_shot(&index, &query, cli.format),
        None => {
            if let Some(url) = psst_tui::run(index, page_label, config)? {
                println!("{url}");
            }
            Ok(())
        }
    }
}

fn scan_page(page: &PathBuf, config: &Config) -> anyhow::Result<(SearchIndex, String)> {
    if page.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        let index = SearchIndex::scan_with_base(&source, config.base_url())?;
        Ok((index, "stdin".to_string()))
    } else {
        let index = SearchIndex::scan_file(page, config.base_url())?;
        Ok((index, page.display().to_string()))
    }
}

/// Scan-filter-print without the TUI. A query too short to search is a
/// no-op, exactly like the keystroke it stands in for: empty output, exit 0.
fn one_shot(index: &SearchIndex, query: &str, format: Format) -> anyhow::Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        tracing::debug!(query, "query below minimum length, suppressed");
        return Ok(());
    }
    let results = search(index, query.trim());
    tracing::debug!(query, matches = results.len(), "one-shot query");

    match format {
        Format::Text => {
            for entry in &results {
                println!("{}\t{}", entry.url, entry.title);
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Format::Html => {
            println!("{}", psst_core::render::render_fragment(&results));
        }
    }
    Ok(())
}
