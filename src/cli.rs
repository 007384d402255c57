// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{consts::DEFAULT_CATALOG_PATH, options::UpdaterOptions},
    core::net::HttpFetcher,
    progress::{ConsoleProgress, Progress},
    scrape::updater,
};

/// Refresh IMDb ratings in the Beck movie catalog.
#[derive(Debug, Parser)]
#[command(name = "update-ratings", version, about)]
pub struct Args {
    /// Catalog file (`.js` literal layout or `.json`)
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Print the regenerated catalog to stdout instead of rewriting the file
    #[arg(long)]
    pub dry_run: bool,
}

impl From<Args> for UpdaterOptions {
    fn from(a: Args) -> Self {
        Self { catalog_path: a.catalog, dry_run: a.dry_run }
    }
}

pub fn parse() -> UpdaterOptions {
    Args::parse().into()
}

pub async fn run(opts: UpdaterOptions) -> Result<()> {
    let fetcher = HttpFetcher::new().wrap_err("building HTTP client")?;
    let path = &opts.catalog_path;

    if opts.dry_run {
        // stdout carries the catalog; per-record status still goes to the log
        let (text, _report) = updater::dry_run(path, &fetcher, None)
            .await
            .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
        print!("{text}");
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    let report = updater::run(path, &fetcher, Some(&mut progress))
        .await
        .wrap_err_with(|| format!("Failed to update {}", path.display()))?;

    progress.log(&format!("{} updated with latest IMDB ratings.", path.display()));
    if report.nothing_to_fetch() {
        progress.log(&format!("No movie in {} has an imdbUrl; add imdbUrl fields to fetch ratings.", path.display()));
    }
    progress.log(&format!(
        "{} updated, {} not found, {} without imdbUrl, {} failed",
        report.updated, report.not_found, report.skipped, report.failed
    ));
    Ok(())
}
