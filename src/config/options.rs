// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdaterOptions {
    pub catalog_path: PathBuf,
    /// Print the regenerated catalog instead of replacing the file.
    pub dry_run: bool,
}

impl Default for UpdaterOptions {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            dry_run: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerOptions {
    pub catalog_path: PathBuf,
    pub loading_delay: Duration,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            loading_delay: Duration::from_millis(LOADING_DELAY_MS),
        }
    }
}

impl PickerOptions {
    /// First positional argument overrides the catalog path.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut opts = Self::default();
        if let Some(path) = args.into_iter().nth(1) {
            opts.catalog_path = PathBuf::from(path);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_options_take_first_arg_as_catalog() {
        let opts = PickerOptions::from_args(vec![s!("beck_picker"), s!("other.js")]);
        assert_eq!(opts.catalog_path, PathBuf::from("other.js"));

        let opts = PickerOptions::from_args(vec![s!("beck_picker")]);
        assert_eq!(opts.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(opts.loading_delay, Duration::from_millis(1000));
    }
}
