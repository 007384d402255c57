// tests/picker_flow.rs
//
// Picker driven the way the GUI drives it, without a window.
use std::{fs, time::{Duration, Instant}};

use beck_picker::{
    catalog::{Catalog, MovieRecord},
    config::options::PickerOptions,
    gui::load_picker,
    picker::{Bound, Picker, PickerState},
};
use rand::{SeedableRng, rngs::StdRng};

fn five() -> Catalog {
    let mut movies: Vec<MovieRecord> =
        (1..=5).map(|n| MovieRecord::new(n, format!("Beck {n}"), 1996 + n as i32)).collect();
    movies[1].imdb_rating = Some("6.9".into());
    movies[1].runtime = Some("90 min".into());
    movies[1].tv4play_url = Some("https://tv4play.se/beck-2".into());
    Catalog::new(movies)
}

fn pick(p: &mut Picker, seed: u64) -> PickerState {
    let t0 = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    p.generate(t0, &mut rng).unwrap();
    assert!(matches!(p.state(), PickerState::Loading { .. }));
    p.poll(t0 + Duration::from_secs(1));
    p.state().clone()
}

#[test]
fn narrow_range_renders_full_record() {
    let mut p = Picker::new(five(), Duration::from_secs(1));
    p.range.set(Bound::Min, 2);
    p.range.set(Bound::Max, 2);

    let PickerState::Displayed(view) = pick(&mut p, 42) else { panic!("not displayed") };
    assert_eq!(view.heading, "Beck 2 (1998)");
    let panel = view.rating_panel.expect("rating panel");
    assert_eq!(panel[0].value, "6.9");
    assert_eq!(panel[1].value, "90 min");
    assert_eq!(view.watch_link.expect("link").href, "https://tv4play.se/beck-2");
}

#[test]
fn bare_record_hides_rating_panel_and_link() {
    let mut p = Picker::new(five(), Duration::from_secs(1));
    p.range.set(Bound::Min, 4);
    p.range.set(Bound::Max, 4);

    let PickerState::Displayed(view) = pick(&mut p, 1) else { panic!("not displayed") };
    assert!(view.rating_panel.is_none());
    assert!(view.watch_link.is_none());
}

#[test]
fn committed_edits_keep_range_valid() {
    let mut p = Picker::new(five(), Duration::from_secs(1));
    p.range.set(Bound::Max, 2);
    p.range.commit(Bound::Max);
    p.range.set(Bound::Min, 4);
    assert!(!p.can_generate());
    p.range.commit(Bound::Min);
    assert_eq!((p.range.min, p.range.max), (4, 4));
    assert!(p.can_generate());
}

#[test]
fn load_picker_reads_file_then_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beckDB.js");
    fs::write(&path, "const beckMovies = [{number: 1, title: \"Enda\", year: 2001}];").unwrap();

    let opts = PickerOptions { catalog_path: path.clone(), loading_delay: Duration::ZERO };
    let p = load_picker(&opts);
    assert_eq!(p.catalog().len(), 1);
    assert_eq!(p.range.effective(), Ok((1, 1)));

    // missing file: bundled copy
    let opts = PickerOptions { catalog_path: dir.path().join("missing.js"), loading_delay: Duration::ZERO };
    let p = load_picker(&opts);
    assert!(p.catalog().len() > 1);
    assert_eq!(p.state(), &PickerState::Idle);
}

#[test]
fn broken_catalog_shows_generic_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beckDB.js");
    fs::write(&path, "module.exports = 42").unwrap();

    let p = load_picker(&PickerOptions { catalog_path: path, loading_delay: Duration::ZERO });
    assert_eq!(p.state(), &PickerState::Errored("Ett fel uppstod. Vänligen försök igen.".into()));
    assert!(!p.can_generate());
}
