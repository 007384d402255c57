// src/catalog/write.rs
//
// Renders the catalog back into the literal layout. Output is fixed:
// field order never depends on input order, and no separator follows the
// last field of a record or the last record of the list.

use super::{Catalog, MovieRecord};

const RECORD_INDENT: &str = "    ";
const FIELD_INDENT: &str = "        ";

/// Escape for a double-quoted string literal.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn quoted(key: &str, value: &str) -> String {
    format!("{FIELD_INDENT}{key}: \"{}\"", escape(value))
}

/// One record, `{` to `}`, without a trailing separator.
pub fn format_movie(movie: &MovieRecord) -> String {
    let mut fields = vec![
        format!("{FIELD_INDENT}number: {}", movie.number),
        quoted("title", &movie.title),
        format!("{FIELD_INDENT}year: {}", movie.year),
    ];

    let optional = [
        ("description", &movie.description),
        ("imdbUrl", &movie.imdb_url),
        ("tv4playUrl", &movie.tv4play_url),
        ("posterUrl", &movie.poster_url),
        ("runtime", &movie.runtime),
        ("imdbRating", &movie.imdb_rating),
    ];
    fields.extend(
        optional
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().filter(|v| !v.is_empty()).map(|v| quoted(key, v))),
    );

    // Separators only *between* present fields.
    format!("{RECORD_INDENT}{{\n{}\n{RECORD_INDENT}}}", fields.join(",\n"))
}

/// Whole file, ending in `];\n`.
pub fn to_literal(catalog: &Catalog) -> String {
    let body = catalog.movies.iter().map(format_movie).collect::<Vec<_>>().join(",\n");
    if body.is_empty() {
        format!("const {} = [\n];\n", catalog.binding)
    } else {
        format!("const {} = [\n{}\n];\n", catalog.binding, body)
    }
}
