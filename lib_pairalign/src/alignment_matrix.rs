use std::fmt::{Display, Formatter};

use index::{AlignmentMatrixIndex, iterators};
use ndarray::Array2;

use crate::{alignment_mode::AlignmentMode, score::Score, scoring_policy::ScoringPolicy};

pub mod index;
mod traceback;

/// The dynamic programming matrix of a pairwise alignment.
///
/// Rows correspond to reference prefixes and columns to query prefixes,
/// such that entry `[i, j]` holds the best score of aligning the first `i` reference characters with the first `j` query characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    matrix: Array2<AlignmentMatrixEntry>,
    scoring_policy: ScoringPolicy,
    mode: AlignmentMode,
    /// The first maximum in row-major order, tracked while filling.
    max_index: AlignmentMatrixIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixEntry {
    pub score: Score,
    /// The move that produced the score.
    pub alignment_type: BaseAlignmentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseAlignmentType {
    /// Marks the matrix origin at [0, 0], and in local mode every entry where the alignment may start.
    None,
    Insertion,
    Deletion,
    Match,
    Substitution,
}

impl AlignmentMatrix {
    pub fn new(
        scoring_policy: ScoringPolicy,
        mode: AlignmentMode,
        reference_length: usize,
        query_length: usize,
    ) -> Self {
        Self {
            matrix: Array2::default((reference_length + 1, query_length + 1)),
            scoring_policy,
            mode,
            max_index: AlignmentMatrixIndex::new(0, 0),
        }
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn scoring_policy(&self) -> &ScoringPolicy {
        &self.scoring_policy
    }

    /// The reference length and the query length this matrix was built for.
    pub fn sequence_lengths(&self) -> (usize, usize) {
        let (row_count, column_count) = self.matrix.dim();
        (row_count - 1, column_count - 1)
    }

    pub fn entry(&self, index: AlignmentMatrixIndex) -> AlignmentMatrixEntry {
        self.matrix[index]
    }

    pub fn score(&self, index: AlignmentMatrixIndex) -> Score {
        self.matrix[index].score
    }

    /// The entry at which the traceback starts.
    ///
    /// This is the bottom-right corner for global alignments and the maximum entry for local alignments.
    pub fn traceback_start(&self) -> AlignmentMatrixIndex {
        match self.mode {
            AlignmentMode::Global => {
                let (reference_length, query_length) = self.sequence_lengths();
                AlignmentMatrixIndex::new(reference_length, query_length)
            }
            AlignmentMode::Local => self.max_index,
        }
    }

    /// Fills the matrix and returns the optimal alignment score.
    pub fn align<Symbol: Eq>(&mut self, reference: &[Symbol], query: &[Symbol]) -> Score {
        debug_assert_eq!(self.sequence_lengths(), (reference.len(), query.len()));

        self.initialise();
        self.fill(reference, query);
        self.matrix[self.traceback_start()].score
    }

    fn initialise(&mut self) {
        let (row_count, column_count) = self.matrix.dim();
        self.matrix[[0, 0]] = AlignmentMatrixEntry::START;
        self.max_index = AlignmentMatrixIndex::new(0, 0);

        for index in iterators::column(0, row_count).skip(1) {
            self.matrix[index] = match self.mode {
                AlignmentMode::Global => {
                    self.step(index.deletion_predecessor(), BaseAlignmentType::Deletion)
                }
                AlignmentMode::Local => AlignmentMatrixEntry::START,
            };
        }

        for index in iterators::row(0, column_count).skip(1) {
            self.matrix[index] = match self.mode {
                AlignmentMode::Global => {
                    self.step(index.insertion_predecessor(), BaseAlignmentType::Insertion)
                }
                AlignmentMode::Local => AlignmentMatrixEntry::START,
            };
        }
    }

    fn fill<Symbol: Eq>(&mut self, reference: &[Symbol], query: &[Symbol]) {
        let (row_count, column_count) = self.matrix.dim();

        for index in iterators::inner(row_count, column_count) {
            let entry = self.best_step(index, reference, query);
            self.matrix[index] = entry;

            if self.mode == AlignmentMode::Local && entry.score > self.matrix[self.max_index].score {
                self.max_index = index;
            }
        }
    }

    /// Chooses the best move into `index`.
    ///
    /// On equal scores, matches and substitutions win over deletions, and deletions over insertions.
    fn best_step<Symbol: Eq>(
        &self,
        index: AlignmentMatrixIndex,
        reference: &[Symbol],
        query: &[Symbol],
    ) -> AlignmentMatrixEntry {
        let diagonal_type =
            if reference[index.reference_index - 1] == query[index.query_index - 1] {
                BaseAlignmentType::Match
            } else {
                BaseAlignmentType::Substitution
            };

        let mut best = self.step(index.match_or_substitution_predecessor(), diagonal_type);
        for candidate in [
            self.step(index.deletion_predecessor(), BaseAlignmentType::Deletion),
            self.step(index.insertion_predecessor(), BaseAlignmentType::Insertion),
        ] {
            if candidate.score > best.score {
                best = candidate;
            }
        }

        // Restart local alignments.
        if self.mode.has_score_floor() && best.score < Score::ZERO {
            AlignmentMatrixEntry::START
        } else {
            best
        }
    }

    /// The entry reached by moving from `predecessor` with the given alignment type.
    fn step(
        &self,
        predecessor: AlignmentMatrixIndex,
        alignment_type: BaseAlignmentType,
    ) -> AlignmentMatrixEntry {
        AlignmentMatrixEntry {
            score: self.matrix[predecessor].score + self.scoring_policy.score(alignment_type),
            alignment_type,
        }
    }

    #[cfg(test)]
    fn manual_debug_fill(&mut self, entries: impl IntoIterator<Item = AlignmentMatrixEntry>) {
        let (row_count, column_count) = self.matrix.dim();
        let mut entries = entries.into_iter();
        for index in iterators::inner(row_count, column_count) {
            self.matrix[index] = entries.next().unwrap();
        }
        assert!(entries.next().is_none());
    }
}

impl AlignmentMatrixEntry {
    const START: Self = Self {
        score: Score::ZERO,
        alignment_type: BaseAlignmentType::None,
    };
}

impl Default for AlignmentMatrixEntry {
    fn default() -> Self {
        Self {
            score: Score::MIN,
            alignment_type: BaseAlignmentType::None,
        }
    }
}

impl Display for BaseAlignmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseAlignmentType::None => write!(f, "N"),
            BaseAlignmentType::Insertion => write!(f, "I"),
            BaseAlignmentType::Deletion => write!(f, "D"),
            BaseAlignmentType::Match => write!(f, "M"),
            BaseAlignmentType::Substitution => write!(f, "S"),
        }
    }
}

/// Prints one line per row, with each entry's score followed by the letter of its alignment type.
impl Display for AlignmentMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self
            .matrix
            .iter()
            .map(|entry| entry.score.to_string().len())
            .max()
            .unwrap_or(0);

        for row in self.matrix.rows() {
            write!(f, "[")?;
            for entry in row {
                write!(f, " {:>width$}{}", entry.score, entry.alignment_type)?;
            }
            writeln!(f, " ]")?;
        }

        Ok(())
    }
}
