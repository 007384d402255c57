// src/config/consts.rs

// Catalog
pub const DEFAULT_CATALOG_PATH: &str = "data/beckDB.js";
pub const DEFAULT_BINDING: &str = "beckMovies";

// Net config: browser-like headers so the rating source doesn't block us.
// Accept-Encoding is negotiated by the client (gzip/brotli/deflate features).
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Picker
pub const LOADING_DELAY_MS: u64 = 1000;

pub const MSG_INVALID_RANGE: &str = "Ogiltigt intervall. Vänligen kontrollera dina nummer.";
pub const MSG_NOT_FOUND: &str = "Kunde inte hitta Beck-filmen. Vänligen försök igen.";
pub const MSG_GENERIC_ERROR: &str = "Ett fel uppstod. Vänligen försök igen.";

pub const LABEL_RATING: &str = "IMDB:";
pub const LABEL_RUNTIME: &str = "Längd:";
pub const ICON_STAR: &str = "★";
pub const ICON_CLOCK: &str = "🕐";
pub const WATCH_LINK_TEXT: &str = "Streama filmen på TV4 Play";
pub const POSTER_ALT_PREFIX: &str = "Affisch för";
