use std::{fmt::Display, str::FromStr};

/// Selects the boundary initialisation, score floor and traceback endpoints of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentMode {
    /// End-to-end alignment of both sequences (Needleman-Wunsch).
    Global,
    /// Alignment of the highest scoring pair of substrings (Smith-Waterman).
    Local,
}

impl AlignmentMode {
    /// Returns true if matrix scores are floored at zero.
    pub fn has_score_floor(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentMode::Global => write!(f, "global"),
            AlignmentMode::Local => write!(f, "local"),
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "local" => Ok(Self::Local),
            other => Err(format!("Unknown alignment mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AlignmentMode;

    #[test]
    fn parse_and_display() {
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            assert_eq!(mode.to_string().parse::<AlignmentMode>(), Ok(mode));
        }
        assert_eq!("Local".parse::<AlignmentMode>(), Ok(AlignmentMode::Local));
        assert!("semi-global".parse::<AlignmentMode>().is_err());
    }
}
