use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

/// The score of an alignment.
///
/// Higher is better.
/// Scores may be negative, e.g. for global alignments of dissimilar sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Score(i64);

impl Score {
    pub const MIN: Score = Score(i64::MIN);
    pub const ZERO: Score = Score(0);

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
