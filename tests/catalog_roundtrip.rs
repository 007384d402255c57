// tests/catalog_roundtrip.rs
use beck_picker::catalog::{parse_literal, to_literal};
use beck_picker::gui::app::BUNDLED_CATALOG;

#[test]
fn bundled_catalog_is_valid_and_stable() {
    let cat = parse_literal(BUNDLED_CATALOG).unwrap();
    assert!(!cat.is_empty());
    // numbering starts at 1 and has no duplicates (checked by the parser)
    assert!(cat.find(1).is_some());
    // the shipped file is already in canonical layout
    assert_eq!(to_literal(&cat), BUNDLED_CATALOG);
}

#[test]
fn reserialize_fixes_field_order_and_keeps_values() {
    // hand-edited file: fields out of order, trailing commas, odd spacing
    let messy = r#"const beckMovies = [
  { imdbRating: "7.0", runtime: "90 min", posterUrl: "https://img/a.jpg",
    number: 1, year: 1997, title: "Lockpojken", imdbUrl: "https://imdb/1", },
  { title: "Han sa \"hej\"", year: 1998, number: 2 , description: "rad ett\nrad två" },
];"#;
    let cat = parse_literal(messy).unwrap();
    let text = to_literal(&cat);

    let expected = r#"const beckMovies = [
    {
        number: 1,
        title: "Lockpojken",
        year: 1997,
        imdbUrl: "https://imdb/1",
        posterUrl: "https://img/a.jpg",
        runtime: "90 min",
        imdbRating: "7.0"
    },
    {
        number: 2,
        title: "Han sa \"hej\"",
        year: 1998,
        description: "rad ett\nrad två"
    }
];
"#;
    assert_eq!(text, expected);

    let again = parse_literal(&text).unwrap();
    assert_eq!(again, cat);
    assert_eq!(to_literal(&again), text);
}

#[test]
fn parse_error_names_the_position() {
    let err = parse_literal("const beckMovies = [\n    { number: 1, title: \"A\" year: 1 }\n];").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("parse error at 2:"), "{msg}");
    assert!(msg.contains("expected `}`"), "{msg}");
}
