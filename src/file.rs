// src/file.rs

use std::{
    fs,
    io::Write,
    path::Path,
};

use tempfile::NamedTempFile;

use crate::catalog::{self, Catalog};
use crate::error::CatalogError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `const beckMovies = [...]`
    Literal,
    Json,
}

impl CatalogFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Literal,
        }
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io { path: path.to_path_buf(), source }
}

pub fn parse(text: &str, format: CatalogFormat) -> Result<Catalog, CatalogError> {
    match format {
        CatalogFormat::Literal => catalog::parse_literal(text),
        CatalogFormat::Json => Catalog::from_json(text),
    }
}

pub fn render(cat: &Catalog, format: CatalogFormat) -> Result<String, CatalogError> {
    match format {
        CatalogFormat::Literal => Ok(catalog::to_literal(cat)),
        CatalogFormat::Json => cat.to_json(),
    }
}

/// Read and parse the whole catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(io_err(path))?;
    parse(&text, CatalogFormat::for_path(path))
}

/// Replace `path` with `contents` in one step: write a sibling temp file, then rename.
/// A failure leaves the old file as it was.
pub fn replace_file(path: &Path, contents: &str) -> Result<(), CatalogError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err(path))?;
    tmp.write_all(contents.as_bytes()).map_err(io_err(path))?;
    tmp.as_file().sync_all().map_err(io_err(path))?;
    tmp.persist(path).map_err(|e| CatalogError::Io { path: path.to_path_buf(), source: e.error })?;
    Ok(())
}

/// Serialize in the file's own format and replace it.
pub fn save_catalog(path: &Path, cat: &Catalog) -> Result<(), CatalogError> {
    let contents = render(cat, CatalogFormat::for_path(path))?;
    replace_file(path, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieRecord;

    #[test]
    fn format_follows_extension() {
        assert_eq!(CatalogFormat::for_path(Path::new("data/beckDB.js")), CatalogFormat::Literal);
        assert_eq!(CatalogFormat::for_path(Path::new("data/beck.JSON")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::for_path(Path::new("catalog")), CatalogFormat::Literal);
    }

    #[test]
    fn save_then_load_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let cat = Catalog::new(vec![MovieRecord::new(1, "Roseanna", 1993)]);

        for name in ["c.js", "c.json"] {
            let path = dir.path().join(name);
            save_catalog(&path, &cat).unwrap();
            assert_eq!(load_catalog(&path).unwrap(), cat);
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("nope.js")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn replace_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.js");
        fs::write(&path, "old").unwrap();
        replace_file(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // only the target remains, the temp file was renamed into place
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
