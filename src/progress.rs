// src/progress.rs
use crate::catalog::MovieRecord;

/// What happened to one record during an update run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Rating found and written into the record.
    Updated(String),
    /// Page fetched but no pattern matched; record left as is.
    NotFound,
    /// Record has no `imdbUrl`.
    Skipped,
    /// Fetch failed; record left as is.
    Failed(String),
}

/// Lightweight progress reporting used by the updater.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of records.
    fn begin(&mut self, _total: usize) {}

    /// Called right before a record's page is requested.
    fn fetching(&mut self, _movie: &MovieRecord) {}

    /// Called once per record with its outcome.
    fn item_done(&mut self, _movie: &MovieRecord, _outcome: &Outcome) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// Prints the classic per-record lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn fetching(&mut self, movie: &MovieRecord) {
        println!("Fetching IMDB rating for: {}", movie.title);
    }

    fn item_done(&mut self, movie: &MovieRecord, outcome: &Outcome) {
        match outcome {
            Outcome::Updated(r) => println!("  -> Rating: {r}"),
            Outcome::NotFound => println!("  -> Rating not found"),
            Outcome::Skipped => println!("No imdbUrl for: {}", movie.title),
            Outcome::Failed(e) => println!("  -> Error fetching: {e}"),
        }
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}
