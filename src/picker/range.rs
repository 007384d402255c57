// src/picker/range.rs
use crate::error::PickError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// The numeric range the user picks from. Raw inputs may hold anything
/// while typing; `commit` pulls them back into `[1, size]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSelector {
    pub min: i64,
    pub max: i64,
    pub all_movies: bool,
    size: u32,
    /// Bound typed into since its last commit.
    editing: Option<Bound>,
}

impl RangeSelector {
    /// Starts at the full range `[1, size]`.
    pub fn new(size: u32) -> Self {
        Self { min: 1, max: size as i64, all_movies: false, size, editing: None }
    }

    pub fn size(&self) -> u32 { self.size }

    /// Store a typed value without clamping (validation only).
    pub fn set(&mut self, bound: Bound, value: i64) {
        match bound {
            Bound::Min => self.min = value,
            Bound::Max => self.max = value,
        }
        self.editing = Some(bound);
    }

    /// Finished editing `edited`: clamp both bounds, then let the edited one
    /// push the other if they crossed.
    pub fn commit(&mut self, edited: Bound) {
        self.editing = None;
        let n = self.size as i64;
        if self.min < 1 || self.min > n {
            self.min = 1;
        }
        if self.max < 1 || self.max > n {
            self.max = n;
        }
        if self.min > self.max {
            match edited {
                Bound::Min => self.max = self.min,
                Bound::Max => self.min = self.max,
            }
        }
    }

    /// Commit the bound still being typed into, if any.
    pub fn commit_pending(&mut self) {
        if let Some(bound) = self.editing {
            self.commit(bound);
        }
    }

    /// Range that generation would draw from.
    pub fn effective(&self) -> Result<(u32, u32), PickError> {
        if self.size == 0 {
            return Err(PickError::EmptyCatalog);
        }
        if self.all_movies {
            return Ok((1, self.size));
        }
        let n = self.size as i64;
        let in_bounds = |v: i64| (1..=n).contains(&v);
        if in_bounds(self.min) && in_bounds(self.max) && self.min <= self.max {
            Ok((self.min as u32, self.max as u32))
        } else {
            Err(PickError::InvalidRange { min: self.min, max: self.max, size: self.size })
        }
    }

    pub fn is_valid(&self) -> bool { self.effective().is_ok() }
}
