//! The `today` subcommand: fetches the current day's picture.

use anyhow::Result;
use apod_lib::{ApodClient, DateMode, SearchForm};

use crate::output::{print_entries, OutputFormat};

pub async fn run(client: &ApodClient, format: &OutputFormat) -> Result<()> {
    let mut form = SearchForm::new();
    form.set_mode(DateMode::Today);

    let query = form.submit().into_result()?;
    let entries = client.search(&query).await?;
    print_entries(&entries, format)?;
    Ok(())
}
