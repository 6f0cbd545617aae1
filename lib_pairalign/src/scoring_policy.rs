use crate::{alignment_matrix::BaseAlignmentType, score::Score};

pub mod io;

/// The fixed weights of a linear-gap alignment.
///
/// The weights are opaque integers, the aligner does not require `match_score > 0` or negative penalties.
/// They are 32 bit wide, such that accumulating them over any addressable sequence length cannot overflow a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringPolicy {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl ScoringPolicy {
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    /// The score of aligning symbol `a` against symbol `b`.
    pub fn substitution_score<Symbol: Eq>(&self, a: &Symbol, b: &Symbol) -> Score {
        if a == b {
            self.match_score.into()
        } else {
            self.mismatch_score.into()
        }
    }

    /// The score of aligning a symbol against a gap.
    pub fn gap_score(&self) -> Score {
        self.gap_score.into()
    }

    pub fn score(&self, alignment_type: BaseAlignmentType) -> Score {
        match alignment_type {
            BaseAlignmentType::None => Score::ZERO,
            BaseAlignmentType::Insertion | BaseAlignmentType::Deletion => self.gap_score(),
            BaseAlignmentType::Match => self.match_score.into(),
            BaseAlignmentType::Substitution => self.mismatch_score.into(),
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap_score: -2,
        }
    }
}
