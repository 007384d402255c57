// src/catalog/mod.rs
//
// The movie catalog: an ordered list of records keyed by `number`.
// Stored on disk either in the literal `const beckMovies = [...]` layout
// (see `parse` / `write`) or as a JSON array.

mod parse;
mod write;

use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_BINDING;
use crate::error::CatalogError;

pub use parse::parse_literal;
pub use write::{escape, format_movie, to_literal};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub number: u32,
    pub title: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_url: Option<String>,
    #[serde(default, rename = "tv4playUrl", skip_serializing_if = "Option::is_none")]
    pub tv4play_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,
}

impl MovieRecord {
    pub fn new(number: u32, title: impl Into<String>, year: i32) -> Self {
        Self { number, title: title.into(), year, ..Self::default() }
    }

    /// Drop `Some("")` optionals; an empty string means "absent" in the catalog.
    pub(crate) fn normalize(&mut self) {
        for field in [
            &mut self.description,
            &mut self.imdb_url,
            &mut self.tv4play_url,
            &mut self.poster_url,
            &mut self.runtime,
            &mut self.imdb_rating,
        ] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    /// Name of the declared binding in the literal layout.
    pub binding: String,
    pub movies: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { binding: s!(DEFAULT_BINDING), movies }
    }

    pub fn len(&self) -> usize { self.movies.len() }

    pub fn is_empty(&self) -> bool { self.movies.is_empty() }

    /// Lookup by `number`, not by position (gaps are fine).
    pub fn find(&self, number: u32) -> Option<&MovieRecord> {
        self.movies.iter().find(|m| m.number == number)
    }

    /// Parse a JSON array of records.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let mut movies: Vec<MovieRecord> = serde_json::from_str(text)?;
        movies.iter_mut().for_each(MovieRecord::normalize);
        check_unique(&movies)?;
        Ok(Self::new(movies))
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        let mut out = serde_json::to_string_pretty(&self.movies)?;
        out.push('\n');
        Ok(out)
    }
}

pub(crate) fn check_unique(movies: &[MovieRecord]) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::with_capacity(movies.len());
    for m in movies {
        if !seen.insert(m.number) {
            return Err(CatalogError::DuplicateNumber(m.number));
        }
    }
    Ok(())
}
