//! The `range` subcommand: fetches pictures for an inclusive date range.

use anyhow::Result;
use apod_lib::{ApodClient, DateMode, SearchForm};
use clap::Args;

use crate::output::{print_entries, OutputFormat};

/// Arguments for the `range` subcommand.
#[derive(Args)]
pub struct RangeArgs {
    /// First day of the range (yyyy-MM-dd)
    #[arg(long)]
    pub start: String,

    /// Last day of the range (yyyy-MM-dd), at most 6 months after start
    #[arg(long)]
    pub end: String,
}

pub async fn run(args: &RangeArgs, client: &ApodClient, format: &OutputFormat) -> Result<()> {
    let mut form = SearchForm::new();
    form.set_mode(DateMode::Range);
    form.set_start_date(&args.start);
    form.set_end_date(&args.end);

    let query = form.submit().into_result()?;
    let entries = client.search(&query).await?;
    eprintln!("{} entries", entries.len());
    print_entries(&entries, format)?;
    Ok(())
}
