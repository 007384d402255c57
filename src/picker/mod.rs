// src/picker/mod.rs
//
// Random movie picker: range selection, the pick state machine and the
// render model. No UI types here; the GUI drives it with `generate`/`poll`.

mod range;
mod view;

use std::time::{Duration, Instant};

use rand::Rng;

use crate::catalog::Catalog;
use crate::config::consts::MSG_GENERIC_ERROR;
use crate::error::PickError;

pub use range::{Bound, RangeSelector};
pub use view::{MovieView, Poster, RatingItem, WatchLink};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    /// A number has been drawn; it is shown once `ready_at` passes.
    Loading { number: u32, ready_at: Instant },
    Displayed(MovieView),
    Errored(String),
}

pub struct Picker {
    catalog: Catalog,
    pub range: RangeSelector,
    state: PickerState,
    /// Rejection message for the last request (invalid range). Does not touch `state`.
    notice: Option<&'static str>,
    delay: Duration,
}

impl Picker {
    pub fn new(catalog: Catalog, delay: Duration) -> Self {
        let size = u32::try_from(catalog.len()).unwrap_or(u32::MAX);
        Self {
            range: RangeSelector::new(size),
            catalog,
            state: PickerState::Idle,
            notice: None,
            delay,
        }
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn state(&self) -> &PickerState { &self.state }
    pub fn notice(&self) -> Option<&'static str> { self.notice }

    pub fn is_loading(&self) -> bool { matches!(self.state, PickerState::Loading { .. }) }

    /// Whether the generate action should be enabled.
    pub fn can_generate(&self) -> bool { self.range.is_valid() && !self.is_loading() }

    /// Start a pick. Ignored while a previous pick is still loading.
    /// An invalid range only sets `notice`; the state stays as it was.
    pub fn generate<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Result<u32, PickError> {
        if self.is_loading() {
            logd!("Pick ignored: previous pick still loading");
            return Err(PickError::Busy);
        }
        let (min, max) = match self.range.effective() {
            Ok(r) => r,
            Err(e) => {
                logf!("Pick rejected: {e}");
                self.notice = Some(e.user_message());
                return Err(e);
            }
        };

        let number = rng.random_range(min..=max);
        logd!("Drew {number} from {min}..={max}");
        self.notice = None;
        self.state = PickerState::Loading { number, ready_at: now + self.delay };
        Ok(number)
    }

    /// Advance a finished loading period. Returns true when the state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let PickerState::Loading { number, ready_at } = self.state else { return false; };
        if now < ready_at {
            return false;
        }
        self.state = match self.catalog.find(number) {
            Some(movie) => {
                logf!("Picked #{} {}", movie.number, movie.title);
                PickerState::Displayed(MovieView::from_record(movie))
            }
            None => {
                let e = PickError::NotFound(number);
                logw!("{e}");
                PickerState::Errored(s!(e.user_message()))
            }
        };
        true
    }

    /// Time left before the loading state resolves.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            PickerState::Loading { ready_at, .. } => Some(ready_at.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Surface an unexpected failure with the generic message; details go to the log only.
    pub fn fail(&mut self, err: &dyn std::error::Error) {
        loge!("Error generating random movie: {err}");
        self.notice = None;
        self.state = PickerState::Errored(s!(MSG_GENERIC_ERROR));
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::catalog::MovieRecord;

    fn five() -> Catalog {
        Catalog::new((1..=5).map(|n| MovieRecord::new(n, format!("Film {n}"), 1990 + n as i32)).collect())
    }

    fn picker(cat: Catalog) -> Picker { Picker::new(cat, Duration::from_millis(1000)) }

    fn settle(p: &mut Picker, t0: Instant) {
        assert!(p.poll(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn loading_then_displayed_after_delay() {
        let mut p = picker(five());
        let mut rng = StdRng::seed_from_u64(1);
        let t0 = Instant::now();

        let n = p.generate(t0, &mut rng).unwrap();
        assert!(p.is_loading());
        assert!(!p.can_generate());
        assert!(!p.poll(t0 + Duration::from_millis(999)));
        assert_eq!(p.remaining(t0 + Duration::from_millis(400)), Some(Duration::from_millis(600)));

        settle(&mut p, t0);
        match p.state() {
            PickerState::Displayed(v) => assert_eq!(v.number, n),
            other => panic!("unexpected state {other:?}"),
        }
        assert!(!p.poll(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn single_value_range_always_hits_it() {
        let mut p = picker(five());
        p.range.set(Bound::Min, 2);
        p.range.set(Bound::Max, 2);
        let t0 = Instant::now();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(p.generate(t0, &mut rng), Ok(2));
            settle(&mut p, t0);
            assert!(matches!(p.state(), PickerState::Displayed(v) if v.number == 2));
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut p = picker(five());
        p.range.set(Bound::Min, 2);
        p.range.set(Bound::Max, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let t0 = Instant::now();
        let mut seen = [false; 6];
        for _ in 0..200 {
            let n = p.generate(t0, &mut rng).unwrap();
            assert!((2..=4).contains(&n));
            seen[n as usize] = true;
            settle(&mut p, t0);
        }
        assert_eq!(seen, [false, false, true, true, true, false]);
    }

    #[test]
    fn inverted_range_is_rejected_without_touching_state() {
        let mut p = picker(five());
        let mut rng = StdRng::seed_from_u64(3);
        let t0 = Instant::now();
        p.generate(t0, &mut rng).unwrap();
        settle(&mut p, t0);
        let before = p.state().clone();

        p.range.set(Bound::Min, 5);
        p.range.set(Bound::Max, 1);
        let err = p.generate(t0, &mut rng).unwrap_err();
        assert!(matches!(err, PickError::InvalidRange { .. }));
        assert_eq!(p.state(), &before);
        assert_eq!(p.notice(), Some("Ogiltigt intervall. Vänligen kontrollera dina nummer."));

        // notice clears on the next accepted pick
        p.range.all_movies = true;
        p.generate(t0, &mut rng).unwrap();
        assert_eq!(p.notice(), None);
    }

    #[test]
    fn all_movies_ignores_invalid_manual_bounds() {
        let mut p = picker(five());
        p.range.set(Bound::Min, 5);
        p.range.set(Bound::Max, 1);
        p.range.all_movies = true;
        assert!(p.can_generate());
        assert_eq!(p.range.effective(), Ok((1, 5)));
        let mut rng = StdRng::seed_from_u64(9);
        let n = p.generate(Instant::now(), &mut rng).unwrap();
        assert!((1..=5).contains(&n));
    }

    #[test]
    fn repeated_click_while_loading_is_ignored() {
        let mut p = picker(five());
        let mut rng = StdRng::seed_from_u64(11);
        let t0 = Instant::now();
        let first = p.generate(t0, &mut rng).unwrap();
        assert_eq!(p.generate(t0 + Duration::from_millis(10), &mut rng), Err(PickError::Busy));
        match p.state() {
            PickerState::Loading { number, ready_at } => {
                assert_eq!(*number, first);
                assert_eq!(*ready_at, t0 + Duration::from_millis(1000));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn gap_in_numbers_shows_not_found() {
        // numbers 1, 3: range [1, 2] can draw the missing 2
        let cat = Catalog::new(vec![MovieRecord::new(1, "Ett", 1993), MovieRecord::new(3, "Tre", 1994)]);
        let mut p = picker(cat);
        p.range.set(Bound::Min, 2);
        p.range.set(Bound::Max, 2);
        let t0 = Instant::now();
        p.generate(t0, &mut StdRng::seed_from_u64(0)).unwrap();
        settle(&mut p, t0);
        assert_eq!(p.state(), &PickerState::Errored(s!("Kunde inte hitta Beck-filmen. Vänligen försök igen.")));
    }

    #[test]
    fn fail_uses_generic_message() {
        let mut p = picker(five());
        let err = std::io::Error::other("boom");
        p.fail(&err);
        assert_eq!(p.state(), &PickerState::Errored(s!("Ett fel uppstod. Vänligen försök igen.")));
    }

    #[test]
    fn empty_catalog_cannot_generate() {
        let mut p = picker(Catalog::new(Vec::new()));
        assert!(!p.can_generate());
        let err = p.generate(Instant::now(), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, PickError::EmptyCatalog);
        assert_eq!(p.state(), &PickerState::Idle);
    }
}
