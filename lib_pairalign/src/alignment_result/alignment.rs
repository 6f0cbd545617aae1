use std::fmt::Display;

use super::AlignmentType;

/// A run-length encoded sequence of alignment operations, ordered from the start of the alignment to its end.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    alignment: Vec<(usize, AlignmentType)>,
}

impl Alignment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, alignment_type: AlignmentType) {
        if let Some((multiplicity, last_alignment_type)) = self.alignment.last_mut() {
            if *last_alignment_type == alignment_type {
                *multiplicity += 1;
            } else {
                self.alignment.push((1, alignment_type));
            }
        } else {
            self.alignment.push((1, alignment_type));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }

    /// The number of alignment columns.
    pub fn len(&self) -> usize {
        self.alignment
            .iter()
            .map(|(multiplicity, _)| multiplicity)
            .sum()
    }

    pub fn iter_compact(&self) -> impl DoubleEndedIterator<Item = &(usize, AlignmentType)> {
        self.alignment.iter()
    }

    pub fn iter_flat(&self) -> impl DoubleEndedIterator<Item = AlignmentType> + '_ {
        self.alignment
            .iter()
            .flat_map(|(multiplicity, alignment_type)| {
                std::iter::repeat_n(*alignment_type, *multiplicity)
            })
    }

    /// Counts the operations of the given type.
    pub fn count(&self, alignment_type: AlignmentType) -> usize {
        self.alignment
            .iter()
            .filter(|(_, other)| *other == alignment_type)
            .map(|(multiplicity, _)| multiplicity)
            .sum()
    }

    pub fn cigar(&self) -> String {
        let mut result = String::new();
        // Writing into a string cannot fail.
        let _ = self.write_cigar(&mut result);
        result
    }

    pub fn write_cigar(&self, writer: &mut impl std::fmt::Write) -> std::fmt::Result {
        for (amount, alignment_type) in &self.alignment {
            write!(writer, "{amount}{alignment_type}")?;
        }

        Ok(())
    }

    pub fn reverse(&self) -> Self {
        Self {
            alignment: self.alignment.iter().copied().rev().collect(),
        }
    }
}

impl From<Vec<(usize, AlignmentType)>> for Alignment {
    fn from(value: Vec<(usize, AlignmentType)>) -> Self {
        let mut result = Self::new();
        for (multiplicity, alignment_type) in value {
            for _ in 0..multiplicity {
                result.push(alignment_type);
            }
        }
        result
    }
}

impl FromIterator<AlignmentType> for Alignment {
    fn from_iter<T: IntoIterator<Item = AlignmentType>>(iter: T) -> Self {
        let mut result = Self::new();
        for alignment_type in iter {
            result.push(alignment_type);
        }
        result
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_cigar(f)
    }
}
