use std::{
    fmt::{Display, Formatter, Result},
    ops::Range,
};

use alignment::Alignment;
use noisy_float::types::{R64, r64};

use crate::{alignment_mode::AlignmentMode, score::Score};

pub mod alignment;

/// The gap symbol used in aligned sequences.
pub const GAP_CHARACTER: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentType {
    /// The reference and the query character are equal.
    Match,
    /// The reference and the query character differ.
    Substitution,
    /// The query contains a character that is missing from the reference.
    Insertion,
    /// The reference contains a character that is missing from the query.
    Deletion,
}

/// The outcome of aligning a reference against a query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult {
    mode: AlignmentMode,
    aligned_reference: String,
    aligned_query: String,
    score: Score,
    reference_length: usize,
    query_length: usize,
    reference_range: Range<usize>,
    query_range: Range<usize>,
    alignment: Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentStatistics {
    pub matches: usize,
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
    /// The number of alignment columns.
    pub length: usize,
    /// Matches per alignment column.
    pub identity: R64,
    /// Twice the score divided by the total length of both input sequences.
    pub score_per_base: R64,
}

impl AlignmentResult {
    #[expect(clippy::too_many_arguments)]
    pub(crate) fn new(
        mode: AlignmentMode,
        aligned_reference: String,
        aligned_query: String,
        score: Score,
        reference_length: usize,
        query_length: usize,
        reference_range: Range<usize>,
        query_range: Range<usize>,
        alignment: Alignment,
    ) -> Self {
        debug_assert_eq!(
            aligned_reference.chars().count(),
            aligned_query.chars().count()
        );
        debug_assert_eq!(aligned_reference.chars().count(), alignment.len());
        debug_assert!(reference_range.end <= reference_length);
        debug_assert!(query_range.end <= query_length);

        Self {
            mode,
            aligned_reference,
            aligned_query,
            score,
            reference_length,
            query_length,
            reference_range,
            query_range,
            alignment,
        }
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// The aligned part of the reference, with [`GAP_CHARACTER`] at deletions.
    pub fn aligned_reference(&self) -> &str {
        &self.aligned_reference
    }

    /// The aligned part of the query, with [`GAP_CHARACTER`] at insertions.
    pub fn aligned_query(&self) -> &str {
        &self.aligned_query
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn reference_length(&self) -> usize {
        self.reference_length
    }

    pub fn query_length(&self) -> usize {
        self.query_length
    }

    /// The half-open range of reference positions covered by the alignment.
    pub fn reference_range(&self) -> Range<usize> {
        self.reference_range.clone()
    }

    /// The half-open range of query positions covered by the alignment.
    pub fn query_range(&self) -> Range<usize> {
        self.query_range.clone()
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn cigar(&self) -> String {
        self.alignment.cigar()
    }

    pub fn statistics(&self) -> AlignmentStatistics {
        let matches = self.alignment.count(AlignmentType::Match);
        let length = self.alignment.len();

        AlignmentStatistics {
            matches,
            substitutions: self.alignment.count(AlignmentType::Substitution),
            insertions: self.alignment.count(AlignmentType::Insertion),
            deletions: self.alignment.count(AlignmentType::Deletion),
            length,
            identity: if length == 0 {
                r64(0.0)
            } else {
                r64(matches as f64 / length as f64)
            },
            score_per_base: r64(
                (self.score.as_i64() * 2) as f64
                    / (self.reference_length + self.query_length).max(1) as f64,
            ),
        }
    }

    /// A line marking matches with `|` and substitutions with `.`, to be printed between the aligned sequences.
    pub fn marker_line(&self) -> String {
        self.alignment
            .iter_flat()
            .map(|alignment_type| match alignment_type {
                AlignmentType::Match => '|',
                AlignmentType::Substitution => '.',
                AlignmentType::Insertion | AlignmentType::Deletion => ' ',
            })
            .collect()
    }
}

impl Display for AlignmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AlignmentType::Match => write!(f, "M"),
            AlignmentType::Substitution => write!(f, "X"),
            AlignmentType::Insertion => write!(f, "I"),
            AlignmentType::Deletion => write!(f, "D"),
        }
    }
}

impl Display for AlignmentResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.aligned_reference)?;
        writeln!(f, "{}", self.marker_line())?;
        writeln!(f, "{}", self.aligned_query)?;
        writeln!(f, "Score: {}", self.score)?;
        write!(f, "CIGAR: ")?;
        self.alignment.write_cigar(f)?;

        Ok(())
    }
}

impl Display for AlignmentStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Matches: {}", self.matches)?;
        writeln!(f, "Substitutions: {}", self.substitutions)?;
        writeln!(f, "Insertions: {}", self.insertions)?;
        writeln!(f, "Deletions: {}", self.deletions)?;
        writeln!(f, "Alignment length: {}", self.length)?;
        writeln!(f, "Identity: {:.2}", self.identity)?;
        write!(f, "Score per base: {:.2}", self.score_per_base)?;

        Ok(())
    }
}
