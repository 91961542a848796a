use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use sail_client::{FileFetcher, RemoteFetcher, ScheduleExtractor};
use sail_core::config::{RemoteConfig, SourceConfig};
use sail_core::models::{EventFilter, EventRecord, EventType, Provider, group_by_event_type};
use sail_core::service::{ScheduleResult, ScheduleService};
use sail_core::traits::Extractor;

#[derive(Parser)]
#[command(name = "sail", version, about = "Sailing-class schedule extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract schedule events and print them
    Events {
        /// Markup source: static (fixture file) or remote (scraping proxy)
        #[arg(short, long, default_value = "static")]
        provider: Provider,

        /// Fixture file used by the static provider (else $SAIL_FIXTURE_PATH)
        #[arg(short, long)]
        fixture: Option<PathBuf>,

        /// Base URL for resolving relative links (else $SAIL_BASE_URL or $SAIL_TARGET_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Keep only events at this branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Keep only this category ("תלמידים", "טרום מעשי", students, pre-practical)
        #[arg(short, long)]
        category: Option<EventType>,

        /// Group events by category
        #[arg(long, default_value_t = false)]
        grouped: bool,
    },

    /// Check whether a saved page looks like a schedule page
    Validate {
        /// Path to the HTML file
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventGroup {
    event_type: EventType,
    events: Vec<EventRecord>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sail=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Events {
            provider,
            fixture,
            base_url,
            format,
            branch,
            category,
            grouped,
        } => {
            let source = with_overrides(SourceConfig::from_env(), fixture, base_url);
            let extractor = ScheduleExtractor::with_base_url(&source.base_url)?;
            let result = load(provider, &source.fixture_path, extractor).await?;

            let filter = EventFilter { branch, category };
            let events = filter.apply(result.events);
            tracing::info!(provider = %result.provider, count = events.len(), "Events ready");

            cmd_print(events, format, grouped)?;
        }
        Commands::Validate { path } => {
            cmd_validate(&path)?;
        }
    }

    Ok(())
}

/// Command-line flags win over the environment.
fn with_overrides(
    mut source: SourceConfig,
    fixture: Option<PathBuf>,
    base_url: Option<String>,
) -> SourceConfig {
    if let Some(fixture) = fixture {
        source.fixture_path = fixture;
    }
    if let Some(base_url) = base_url {
        source.base_url = base_url;
    }
    source
}

async fn load(
    provider: Provider,
    fixture: &Path,
    extractor: ScheduleExtractor,
) -> Result<ScheduleResult> {
    let result = match provider {
        Provider::Static => {
            ScheduleService::new(FileFetcher::new(fixture), extractor)
                .load()
                .await
        }
        Provider::Remote => {
            let config = RemoteConfig::from_env()?;
            let fetcher = RemoteFetcher::new(&config).context("Failed to create HTTP client")?;
            ScheduleService::new(fetcher, extractor).load().await
        }
    };

    result.with_context(|| format!("Failed to load events from the {provider} provider"))
}

fn cmd_print(events: Vec<EventRecord>, format: OutputFormat, grouped: bool) -> Result<()> {
    let groups: Vec<EventGroup> = if grouped {
        group_by_event_type(&events)
            .into_iter()
            .map(|(event_type, events)| EventGroup { event_type, events })
            .collect()
    } else {
        Vec::new()
    };

    match format {
        OutputFormat::Json if grouped => {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        OutputFormat::Csv if grouped => {
            let ordered: Vec<EventRecord> = groups.into_iter().flat_map(|g| g.events).collect();
            write_csv(&ordered, std::io::stdout().lock())?;
        }
        OutputFormat::Csv => {
            write_csv(&events, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn write_csv<W: Write>(records: &[EventRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record).context("Failed to write CSV row")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML file: {}", path.display()))?;

    if ScheduleExtractor::new().validate(&html) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        anyhow::bail!("{} does not look like a sailing schedule page", path.display())
    }
}
