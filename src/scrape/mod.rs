// src/scrape/mod.rs
pub mod rating;
pub mod updater;

pub use rating::{extract_rating, Strategy};
pub use updater::{update_catalog, UpdateReport};
