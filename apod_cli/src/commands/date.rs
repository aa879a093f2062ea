//! The `date` subcommand: fetches the picture for one calendar day.

use anyhow::Result;
use apod_lib::{ApodClient, DateMode, SearchForm};
use clap::Args;

use crate::output::{print_entries, OutputFormat};

/// Arguments for the `date` subcommand.
#[derive(Args)]
pub struct DateArgs {
    /// Date to fetch (yyyy-MM-dd), between 1995-06-16 and today
    pub date: String,
}

pub async fn run(args: &DateArgs, client: &ApodClient, format: &OutputFormat) -> Result<()> {
    let mut form = SearchForm::new();
    form.set_mode(DateMode::Single);
    form.set_date(&args.date);

    let query = form.submit().into_result()?;
    let entries = client.search(&query).await?;
    print_entries(&entries, format)?;
    Ok(())
}
