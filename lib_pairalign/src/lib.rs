pub mod aligner;
pub mod alignment_matrix;
pub mod alignment_mode;
pub mod alignment_result;
pub mod error;
mod io;
pub mod score;
pub mod scoring_policy;
#[cfg(test)]
mod tests;

pub use aligner::{align, align_str};
