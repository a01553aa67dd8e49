use appcast_link::config::{self, SiteConfig};
use appcast_link::feed::{HttpFeedSource, parse_appcast};
use appcast_link::page::{DownloadButton, resolve_download_button};
use appcast_link::release::select_latest;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "appcast-link")]
#[command(version, about = "Resolve the landing page download link from the appcast feed")]
struct Cli {
    /// Path to a site config JSON file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve from a local appcast file instead of fetching
    Parse {
        /// Path to the appcast XML file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => SiteConfig::default(),
    };

    let button = match cli.command {
        Some(Command::Parse { path }) => {
            let xml = std::fs::read_to_string(&path)?;
            let feed = parse_appcast(&xml)?;
            DownloadButton::from_selection(select_latest(&feed), &config.fallback_url)
        }
        // One best-effort fetch per run; failures fall back to the static
        // link so the page build never breaks on a flaky feed.
        None => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(fetch_and_resolve(&config)),
    };

    println!("{}", serde_json::to_string(&button)?);

    Ok(())
}

async fn fetch_and_resolve(config: &SiteConfig) -> DownloadButton {
    let source = HttpFeedSource::new(&config.feed_url, &config.user_agent);
    resolve_download_button(&source, &config.fallback_url).await
}
