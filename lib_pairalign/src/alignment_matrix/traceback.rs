use log::trace;

use crate::{
    alignment_mode::AlignmentMode,
    alignment_result::{AlignmentResult, AlignmentType, GAP_CHARACTER, alignment::Alignment},
    score::Score,
};

use super::{AlignmentMatrix, BaseAlignmentType, index::AlignmentMatrixIndex};

impl AlignmentMatrix {
    /// Reconstructs the optimal alignment from a filled matrix.
    ///
    /// Starts at [`Self::traceback_start`] and walks back towards the origin,
    /// choosing a match or substitution over a deletion, and a deletion over an insertion whenever both explain the current score.
    pub fn traceback<Symbol: Copy + Eq + Into<char>>(
        &self,
        reference: &[Symbol],
        query: &[Symbol],
    ) -> AlignmentResult {
        debug_assert_eq!(self.sequence_lengths(), (reference.len(), query.len()));

        let end = self.traceback_start();
        let mut index = end;
        let mut score = Score::ZERO;
        let mut aligned_reference: Vec<char> = Vec::new();
        let mut aligned_query: Vec<char> = Vec::new();
        let mut alignment = Alignment::new();

        while !self.is_traceback_finished(index) {
            let alignment_type = self.traceback_step(index, reference, query);
            debug_assert_eq!(
                BaseAlignmentType::from(alignment_type),
                self.matrix[index].alignment_type,
                "traceback disagrees with the fill at {index}"
            );
            trace!("{index}: {alignment_type}");

            match alignment_type {
                AlignmentType::Match | AlignmentType::Substitution => {
                    let reference_character = reference[index.reference_index - 1];
                    let query_character = query[index.query_index - 1];
                    score += self
                        .scoring_policy
                        .substitution_score(&reference_character, &query_character);
                    aligned_reference.push(reference_character.into());
                    aligned_query.push(query_character.into());
                    index = index.match_or_substitution_predecessor();
                }
                AlignmentType::Deletion => {
                    score += self.scoring_policy.gap_score();
                    aligned_reference.push(reference[index.reference_index - 1].into());
                    aligned_query.push(GAP_CHARACTER);
                    index = index.deletion_predecessor();
                }
                AlignmentType::Insertion => {
                    score += self.scoring_policy.gap_score();
                    aligned_reference.push(GAP_CHARACTER);
                    aligned_query.push(query[index.query_index - 1].into());
                    index = index.insertion_predecessor();
                }
            }

            alignment.push(alignment_type);
        }

        debug_assert_eq!(score, self.matrix[end].score);

        AlignmentResult::new(
            self.mode,
            aligned_reference.into_iter().rev().collect(),
            aligned_query.into_iter().rev().collect(),
            score,
            reference.len(),
            query.len(),
            index.reference_index..end.reference_index,
            index.query_index..end.query_index,
            alignment.reverse(),
        )
    }

    fn is_traceback_finished(&self, index: AlignmentMatrixIndex) -> bool {
        match self.mode {
            AlignmentMode::Global => index.is_origin(),
            AlignmentMode::Local => {
                index.reference_index == 0
                    || index.query_index == 0
                    || self.matrix[index].score == Score::ZERO
            }
        }
    }

    /// Finds the move that explains the score at `index`.
    fn traceback_step<Symbol: Eq>(
        &self,
        index: AlignmentMatrixIndex,
        reference: &[Symbol],
        query: &[Symbol],
    ) -> AlignmentType {
        let score = self.matrix[index].score;

        if index.reference_index > 0 && index.query_index > 0 {
            let reference_character = &reference[index.reference_index - 1];
            let query_character = &query[index.query_index - 1];
            let predecessor_score = self.matrix[index.match_or_substitution_predecessor()].score;

            if score
                == predecessor_score
                    + self
                        .scoring_policy
                        .substitution_score(reference_character, query_character)
            {
                return if reference_character == query_character {
                    AlignmentType::Match
                } else {
                    AlignmentType::Substitution
                };
            }
        }

        if index.reference_index > 0
            && score
                == self.matrix[index.deletion_predecessor()].score + self.scoring_policy.gap_score()
        {
            return AlignmentType::Deletion;
        }

        debug_assert!(index.query_index > 0);
        AlignmentType::Insertion
    }
}

impl From<AlignmentType> for BaseAlignmentType {
    fn from(value: AlignmentType) -> Self {
        match value {
            AlignmentType::Match => Self::Match,
            AlignmentType::Substitution => Self::Substitution,
            AlignmentType::Insertion => Self::Insertion,
            AlignmentType::Deletion => Self::Deletion,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alignment_matrix::AlignmentMatrix, alignment_mode::AlignmentMode, score::Score,
        scoring_policy::ScoringPolicy,
    };

    fn traceback(
        reference: &str,
        query: &str,
        scoring_policy: ScoringPolicy,
        mode: AlignmentMode,
    ) -> (String, String, Score) {
        let mut matrix =
            AlignmentMatrix::new(scoring_policy, mode, reference.len(), query.len());
        matrix.align(reference.as_bytes(), query.as_bytes());
        let result = matrix.traceback(reference.as_bytes(), query.as_bytes());
        (
            result.aligned_reference().to_string(),
            result.aligned_query().to_string(),
            result.score(),
        )
    }

    #[test]
    fn global_prefers_diagonal_then_deletion() {
        assert_eq!(
            traceback("ACG", "ACCG", ScoringPolicy::default(), AlignmentMode::Global),
            ("A-CG".to_string(), "ACCG".to_string(), Score::from(1))
        );
        assert_eq!(
            traceback(
                "ACACACTA",
                "AGCACACA",
                ScoringPolicy::default(),
                AlignmentMode::Global
            ),
            ("A-CACACTA".to_string(), "AGCACAC-A".to_string(), Score::from(3))
        );
        assert_eq!(
            traceback("A", "AA", ScoringPolicy::default(), AlignmentMode::Global),
            ("-A".to_string(), "AA".to_string(), Score::from(-1))
        );
    }

    #[test]
    fn global_walks_the_borders() {
        assert_eq!(
            traceback("AAAC", "C", ScoringPolicy::default(), AlignmentMode::Global),
            ("AAAC".to_string(), "---C".to_string(), Score::from(-5))
        );
        assert_eq!(
            traceback("C", "AAAC", ScoringPolicy::default(), AlignmentMode::Global),
            ("---C".to_string(), "AAAC".to_string(), Score::from(-5))
        );
    }

    #[test]
    fn local_stops_at_zero() {
        assert_eq!(
            traceback(
                "GATTACA",
                "GCATGCU",
                ScoringPolicy::default(),
                AlignmentMode::Local
            ),
            ("AT".to_string(), "AT".to_string(), Score::from(2))
        );
        assert_eq!(
            traceback("A", "T", ScoringPolicy::default(), AlignmentMode::Local),
            (String::new(), String::new(), Score::ZERO)
        );
    }

    #[test]
    fn custom_scoring_policy() {
        assert_eq!(
            traceback(
                "GATTACA",
                "GCATGCU",
                ScoringPolicy::new(2, -1, -1),
                AlignmentMode::Global
            ),
            ("G-ATTACA".to_string(), "GCA-TGCU".to_string(), Score::from(4))
        );
    }
}
