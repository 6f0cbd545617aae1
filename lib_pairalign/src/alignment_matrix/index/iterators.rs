//! Orders in which the alignment matrix is visited.

use super::AlignmentMatrixIndex;

/// The cells of one matrix column, from row zero downwards.
pub fn column(
    query_index: usize,
    row_count: usize,
) -> impl DoubleEndedIterator<Item = AlignmentMatrixIndex> + Clone {
    (0..row_count).map(move |reference_index| AlignmentMatrixIndex::new(reference_index, query_index))
}

/// The cells of one matrix row, from column zero rightwards.
pub fn row(
    reference_index: usize,
    column_count: usize,
) -> impl DoubleEndedIterator<Item = AlignmentMatrixIndex> + Clone {
    (0..column_count).map(move |query_index| AlignmentMatrixIndex::new(reference_index, query_index))
}

/// The cells that are neither in row zero nor in column zero, in row-major order.
///
/// Every cell is visited after its diagonal, upper and left neighbours.
pub fn inner(row_count: usize, column_count: usize) -> impl Iterator<Item = AlignmentMatrixIndex> {
    debug_assert!(row_count > 0);
    debug_assert!(column_count > 0);

    (1..row_count).flat_map(move |reference_index| row(reference_index, column_count).skip(1))
}
