use std::ops::{Index, IndexMut};

use ndarray::Array2;

pub mod iterators;

/// A cell of the alignment matrix.
///
/// The reference index is the row and counts the reference characters consumed so far,
/// the query index is the column and counts the query characters consumed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlignmentMatrixIndex {
    pub(in crate::alignment_matrix) reference_index: usize,
    pub(in crate::alignment_matrix) query_index: usize,
}

impl AlignmentMatrixIndex {
    pub fn new(reference_index: usize, query_index: usize) -> Self {
        Self {
            reference_index,
            query_index,
        }
    }

    pub fn reference_index(&self) -> usize {
        self.reference_index
    }

    pub fn query_index(&self) -> usize {
        self.query_index
    }

    pub fn is_origin(&self) -> bool {
        self.reference_index == 0 && self.query_index == 0
    }

    /// The cell left of this cell.
    pub fn insertion_predecessor(&self) -> Self {
        debug_assert!(self.query_index > 0);

        Self {
            reference_index: self.reference_index,
            query_index: self.query_index - 1,
        }
    }

    /// The cell above this cell.
    pub fn deletion_predecessor(&self) -> Self {
        debug_assert!(self.reference_index > 0);

        Self {
            reference_index: self.reference_index - 1,
            query_index: self.query_index,
        }
    }

    /// The cell diagonally up-left of this cell.
    pub fn match_or_substitution_predecessor(&self) -> Self {
        debug_assert!(self.reference_index > 0);
        debug_assert!(self.query_index > 0);

        Self {
            reference_index: self.reference_index - 1,
            query_index: self.query_index - 1,
        }
    }
}

impl std::fmt::Display for AlignmentMatrixIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.reference_index, self.query_index)
    }
}

impl<T> Index<AlignmentMatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self[[index.reference_index, index.query_index]]
    }
}

impl<T> IndexMut<AlignmentMatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self[[index.reference_index, index.query_index]]
    }
}
