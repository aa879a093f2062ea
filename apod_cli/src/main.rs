mod commands;
mod output;

use anyhow::Result;
use apod_lib::ApodClient;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// NASA's shared demo key; heavily rate limited but fine for casual use.
const DEMO_KEY: &str = "DEMO_KEY";

#[derive(Parser)]
#[command(name = "apod")]
#[command(about = "Browse NASA's Astronomy Picture of the Day archive")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch today's picture
    Today,
    /// Fetch the picture for a specific date
    Date(commands::date::DateArgs),
    /// Fetch pictures for a date range (at most 6 months)
    Range(commands::range::RangeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("apod_api=info".parse().unwrap())
                .add_directive("apod_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let api_key = std::env::var("NASA_API_KEY").unwrap_or_else(|_| DEMO_KEY.to_string());
    let client = match std::env::var("APOD_BASE_URL") {
        Ok(base_url) => ApodClient::with_base_url(&base_url, &api_key),
        Err(_) => ApodClient::new(&api_key),
    };

    match &cli.command {
        Commands::Today => commands::today::run(&client, &format).await?,
        Commands::Date(args) => commands::date::run(args, &client, &format).await?,
        Commands::Range(args) => commands::range::run(args, &client, &format).await?,
    }

    Ok(())
}
