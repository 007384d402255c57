// src/picker/view.rs
//
// Display model for one picked movie. Built once per pick; the GUI only
// reads it, so hide/show decisions live here and not in widget code.

use crate::catalog::MovieRecord;
use crate::config::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingItem {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchLink {
    pub href: String,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poster {
    pub url: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieView {
    pub number: u32,
    /// "Title (Year)"
    pub heading: String,
    /// `None` hides the rating panel entirely.
    pub rating_panel: Option<Vec<RatingItem>>,
    pub description: Option<String>,
    pub watch_link: Option<WatchLink>,
    pub poster: Option<Poster>,
}

impl MovieView {
    pub fn from_record(m: &MovieRecord) -> Self {
        let mut items = Vec::new();
        if let Some(r) = &m.imdb_rating {
            items.push(RatingItem { label: LABEL_RATING, value: r.clone(), icon: ICON_STAR });
        }
        if let Some(rt) = &m.runtime {
            items.push(RatingItem { label: LABEL_RUNTIME, value: rt.clone(), icon: ICON_CLOCK });
        }

        Self {
            number: m.number,
            heading: format!("{} ({})", m.title, m.year),
            rating_panel: (!items.is_empty()).then_some(items),
            description: m.description.clone(),
            watch_link: m.tv4play_url.as_ref().map(|href| WatchLink { href: href.clone(), text: WATCH_LINK_TEXT }),
            poster: m.poster_url.as_ref().map(|url| Poster {
                url: url.clone(),
                alt: format!("{POSTER_ALT_PREFIX} {}", m.title),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_record_hides_optional_regions() {
        let v = MovieView::from_record(&MovieRecord::new(4, "Spår i mörker", 1997));
        assert_eq!(v.heading, "Spår i mörker (1997)");
        assert_eq!(v.rating_panel, None);
        assert_eq!(v.watch_link, None);
        assert_eq!(v.poster, None);
        assert_eq!(v.description, None);
    }

    #[test]
    fn rating_panel_shows_what_is_there() {
        let mut m = MovieRecord::new(1, "Roseanna", 1993);
        m.runtime = Some(s!("88 min"));
        let v = MovieView::from_record(&m);
        let panel = v.rating_panel.unwrap();
        assert_eq!(panel.len(), 1);
        assert_eq!(panel[0].label, "Längd:");
        assert_eq!(panel[0].value, "88 min");

        m.imdb_rating = Some(s!("6.9"));
        let panel = MovieView::from_record(&m).rating_panel.unwrap();
        assert_eq!(panel.iter().map(|i| i.label).collect::<Vec<_>>(), vec!["IMDB:", "Längd:"]);
        assert_eq!(panel[0].icon, "★");
    }

    #[test]
    fn link_and_poster() {
        let mut m = MovieRecord::new(1, "Roseanna", 1993);
        m.tv4play_url = Some(s!("https://tv4play.se/roseanna"));
        m.poster_url = Some(s!("https://img/roseanna.jpg"));
        let v = MovieView::from_record(&m);
        assert_eq!(v.watch_link.unwrap().text, "Streama filmen på TV4 Play");
        assert_eq!(v.poster.unwrap().alt, "Affisch för Roseanna");
    }
}
