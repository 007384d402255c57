// src/scrape/rating.rs
//
// Pull a `D.D` rating out of a fetched IMDb page. Patterns are tried from
// the most layout-independent to the most markup-specific; first hit wins.
// Free-form gaps are bounded ({0,200}, {0,50}) so huge pages stay cheap.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// `8.5/10` anywhere
    OutOfTen,
    /// `<span ...>8.5</span>`
    InlineSpan,
    /// legacy hero rating bar test-id
    HeroRatingBar,
    /// legacy `itemprop="ratingValue"`
    ItemProp,
    /// "IMDb RATING" caption followed by the value
    Caption,
}

pub const STRATEGIES: [Strategy; 5] = [
    Strategy::OutOfTen,
    Strategy::InlineSpan,
    Strategy::HeroRatingBar,
    Strategy::ItemProp,
    Strategy::Caption,
];

impl Strategy {
    fn source(self) -> &'static str {
        match self {
            Strategy::OutOfTen => r"(?:^|[^0-9])([0-9]\.[0-9])/10",
            Strategy::InlineSpan => r"<span[^>]{0,200}>([0-9]\.[0-9])</span>",
            Strategy::HeroRatingBar => concat!(
                r#"<span class="sc-[a-z0-9]+-1[^"]*" "#,
                r#"data-testid="hero-rating-bar__aggregate-rating__score">([0-9]\.[0-9])</span>"#,
            ),
            Strategy::ItemProp => r#"<span itemprop="ratingValue">([0-9]\.[0-9])</span>"#,
            Strategy::Caption => r"(?i)IMDb RATING[^0-9]{0,50}([0-9]\.[0-9])",
        }
    }

    fn regex(self) -> &'static Regex {
        static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
        let all = COMPILED.get_or_init(|| {
            STRATEGIES
                .iter()
                // Patterns are constants; a failure here is a programming error caught by tests.
                .map(|s| Regex::new(s.source()).unwrap_or_else(|e| panic!("bad rating pattern {s:?}: {e}")))
                .collect()
        });
        &all[self as usize]
    }

    /// Captured rating for this one pattern.
    pub fn apply(self, html: &str) -> Option<&str> {
        self.regex().captures(html)?.get(1).map(|m| m.as_str())
    }
}

/// Rating and the pattern that produced it.
pub fn extract_with_strategy(html: &str) -> Option<(String, Strategy)> {
    STRATEGIES
        .iter()
        .find_map(|&s| s.apply(html).map(|r| (s!(r), s)))
}

/// `Some("8.5")` or `None` when no pattern matches.
pub fn extract_rating(html: &str) -> Option<String> {
    extract_with_strategy(html).map(|(r, _)| r)
}
