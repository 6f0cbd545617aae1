use std::{
    fmt::{Display, Formatter},
    fs::File,
    io::{Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use lib_pairalign::alignment_result::{AlignmentResult, AlignmentStatistics};
use serde::{Deserialize, Serialize};

/// The toml output of `pairalign align`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub reference_name: String,
    pub query_name: String,
    /// One entry per alignment mode, in the order they were computed.
    pub alignments: Vec<ModeReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeReport {
    pub cigar: String,
    pub duration_seconds: f64,
    pub statistics: AlignmentStatistics,
    pub result: AlignmentResult,
}

impl ModeReport {
    pub fn new(result: AlignmentResult, duration_seconds: f64) -> Self {
        Self {
            cigar: result.cigar(),
            duration_seconds,
            statistics: result.statistics(),
            result,
        }
    }
}

impl AlignmentReport {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| format!("Error opening report file {path:?}"))?
            .read_to_string(&mut buffer)
            .with_context(|| format!("Error reading report file {path:?}"))?;
        toml::from_str(&buffer).with_context(|| format!("Error parsing report file {path:?}"))
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let output = toml::to_string(self).context("Error serialising report")?;
        File::create(path)
            .with_context(|| format!("Error creating report file {path:?}"))?
            .write_all(output.as_bytes())
            .with_context(|| format!("Error writing report file {path:?}"))
    }
}

impl Display for ModeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== {} alignment ===", self.result.mode())?;
        writeln!(f, "{}", self.result)?;
        writeln!(f, "Time taken: {:.6} seconds", self.duration_seconds)?;
        writeln!(f, "Reference length: {} bases", self.result.reference_length())?;
        write!(f, "Query length: {} bases", self.result.query_length())
    }
}

#[cfg(test)]
mod tests {
    use lib_pairalign::{align_str, alignment_mode::AlignmentMode, scoring_policy::ScoringPolicy};

    use super::{AlignmentReport, ModeReport};

    #[test]
    fn toml_round_trip() {
        let report = AlignmentReport {
            reference_name: "reference".to_string(),
            query_name: "query".to_string(),
            alignments: [AlignmentMode::Global, AlignmentMode::Local]
                .into_iter()
                .map(|mode| {
                    ModeReport::new(
                        align_str("ACACACTA", "AGCACACA", ScoringPolicy::default(), mode)
                            .unwrap(),
                        0.5,
                    )
                })
                .collect(),
        };

        let serialised = toml::to_string(&report).unwrap();
        assert!(serialised.contains("cigar = \"1M1I5M1D1M\""));
        let deserialised: AlignmentReport = toml::from_str(&serialised).unwrap();
        assert_eq!(report, deserialised);
    }

    #[test]
    fn display() {
        let report = ModeReport::new(
            align_str("ACG", "ACCG", ScoringPolicy::default(), AlignmentMode::Local).unwrap(),
            0.25,
        );

        assert_eq!(
            report.to_string(),
            "=== local alignment ===\nAC\n||\nAC\nScore: 2\nCIGAR: 2M\nTime taken: 0.250000 seconds\nReference length: 3 bases\nQuery length: 4 bases"
        );
    }
}
