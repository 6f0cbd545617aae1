use log::debug;

use crate::{
    alignment_matrix::AlignmentMatrix,
    alignment_mode::AlignmentMode,
    alignment_result::AlignmentResult,
    error::{Error, Result, SequenceName},
    scoring_policy::ScoringPolicy,
};

/// Aligns the `reference` against the `query`.
///
/// The reference indexes the rows of the alignment matrix, and the query its columns.
/// Both sequences must be non-empty.
pub fn align<Symbol: Copy + Eq + Into<char>>(
    reference: &[Symbol],
    query: &[Symbol],
    scoring_policy: ScoringPolicy,
    mode: AlignmentMode,
) -> Result<AlignmentResult> {
    if reference.is_empty() {
        return Err(Error::InvalidInput(SequenceName::Reference));
    }
    if query.is_empty() {
        return Err(Error::InvalidInput(SequenceName::Query));
    }

    debug!(
        "Filling {}x{} {mode} alignment matrix",
        reference.len() + 1,
        query.len() + 1
    );
    let mut matrix = AlignmentMatrix::new(scoring_policy, mode, reference.len(), query.len());
    let score = matrix.align(reference, query);
    debug!("Optimal score: {score} at {}", matrix.traceback_start());

    let result = matrix.traceback(reference, query);
    debug_assert_eq!(result.score(), score);
    debug!("CIGAR: {}", result.cigar());

    Ok(result)
}

/// Aligns the characters of two strings.
pub fn align_str(
    reference: &str,
    query: &str,
    scoring_policy: ScoringPolicy,
    mode: AlignmentMode,
) -> Result<AlignmentResult> {
    let reference: Vec<_> = reference.chars().collect();
    let query: Vec<_> = query.chars().collect();
    align(&reference, &query, scoring_policy, mode)
}
