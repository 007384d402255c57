// src/scrape/updater.rs
use std::path::Path;

use crate::{
    catalog::Catalog,
    core::net::PageFetcher,
    error::CatalogError,
    file,
    progress::{Outcome, Progress},
};

use super::rating;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updated: usize,
    pub not_found: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl UpdateReport {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Updated(_) => self.updated += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.updated + self.not_found + self.skipped + self.failed
    }

    /// Every record was skipped: the catalog has no `imdbUrl` at all.
    pub fn nothing_to_fetch(&self) -> bool {
        self.total() > 0 && self.skipped == self.total()
    }
}

/// Refresh `imdbRating` on every record that has an `imdbUrl`.
///
/// One request at a time, in catalog order. A failed fetch or a page with
/// no recognizable rating never aborts the loop and never drops a record.
pub async fn update_catalog<F: PageFetcher>(
    catalog: &mut Catalog,
    fetcher: &F,
    mut progress: Option<&mut dyn Progress>,
) -> UpdateReport {
    let mut report = UpdateReport::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(catalog.len());
    }

    for movie in catalog.movies.iter_mut() {
        let outcome = match movie.imdb_url.clone() {
            None => {
                logd!("No imdbUrl for: {}", movie.title);
                Outcome::Skipped
            }
            Some(url) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.fetching(movie);
                }
                logd!("Fetching IMDB rating for: {} ({url})", movie.title);

                match fetcher.fetch(&url).await {
                    Ok(html) => match rating::extract_with_strategy(&html) {
                        Some((r, strategy)) => {
                            logf!("#{} {}: rating {r} ({strategy:?})", movie.number, movie.title);
                            movie.imdb_rating = Some(r.clone());
                            Outcome::Updated(r)
                        }
                        None => {
                            logf!("#{} {}: rating not found", movie.number, movie.title);
                            Outcome::NotFound
                        }
                    },
                    Err(e) => {
                        logw!("#{} {}: error fetching {url}: {e}", movie.number, movie.title);
                        Outcome::Failed(e.to_string())
                    }
                }
            }
        };

        report.record(&outcome);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(movie, &outcome);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    report
}

/// Read, refresh, and rewrite the catalog at `path`.
///
/// Read or parse failures return before any request is made and leave the
/// file alone. The rewrite is a single whole-file replace.
pub async fn run<F: PageFetcher>(
    path: &Path,
    fetcher: &F,
    progress: Option<&mut dyn Progress>,
) -> Result<UpdateReport, CatalogError> {
    let (catalog, report) = refresh(path, fetcher, progress).await?;
    file::save_catalog(path, &catalog)?;
    logd!("{} updated with latest IMDB ratings.", path.display());
    Ok(report)
}

/// Like [`run`] but returns the regenerated file contents instead of writing them.
pub async fn dry_run<F: PageFetcher>(
    path: &Path,
    fetcher: &F,
    progress: Option<&mut dyn Progress>,
) -> Result<(String, UpdateReport), CatalogError> {
    let (catalog, report) = refresh(path, fetcher, progress).await?;
    let text = file::render(&catalog, file::CatalogFormat::for_path(path))?;
    Ok((text, report))
}

async fn refresh<F: PageFetcher>(
    path: &Path,
    fetcher: &F,
    progress: Option<&mut dyn Progress>,
) -> Result<(Catalog, UpdateReport), CatalogError> {
    let mut catalog = file::load_catalog(path).inspect_err(|e| {
        loge!("Failed to parse {}: {e}", path.display());
    })?;
    logf!("Loaded {} movies from {}", catalog.len(), path.display());

    let report = update_catalog(&mut catalog, fetcher, progress).await;
    if report.nothing_to_fetch() {
        logw!("No movie in {} has an imdbUrl; nothing was fetched", path.display());
    }
    logf!(
        "Ratings: {} updated, {} not found, {} skipped, {} failed",
        report.updated, report.not_found, report.skipped, report.failed
    );
    Ok((catalog, report))
}
