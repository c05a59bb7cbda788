mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mediastack_api::{Client, DefaultsMode};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "mediastack")]
#[command(about = "Query live and historical news from the mediastack API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// When to fill in default parameters: legacy (only if at least one
    /// option is given) or always
    #[arg(long, default_value = "legacy", global = true)]
    defaults: String,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search news articles
    News(commands::news::NewsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mediastack=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let defaults: DefaultsMode = cli.defaults.parse().map_err(|_| {
        anyhow::anyhow!(
            "unknown defaults mode '{}'. Valid values: legacy, always",
            cli.defaults
        )
    })?;

    let access_key = std::env::var("MEDIASTACK_ACCESS_KEY").unwrap_or_default();
    let mut client = match std::env::var("MEDIASTACK_BASE_URL").ok() {
        Some(base_url) => {
            tracing::info!("Using mediastack base URL {}", base_url);
            Client::with_base_url(&base_url, &access_key, defaults)
        }
        None => Client::new(&access_key, defaults),
    };
    if let Some(secs) = cli.timeout {
        client = client.with_timeout(Duration::from_secs(secs));
    }

    match &cli.command {
        Commands::News(args) => commands::news::run(args, &client, &format)
            .await
            .context("news request failed")?,
    }

    Ok(())
}
