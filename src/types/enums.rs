use serde::{Deserialize, Serialize};

/// Reference genome an analysis runs against.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceGenome {
    Hg19,
    Hg38,
}

/// Patient gender as recorded by the platform.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Undifferentiated,
    Unknown,
}

/// Whether a germline control was sequenced alongside the sample.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GermlineControl {
    Yes,
    No,
    Unknown,
}

/// Source material of a sample.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleSource {
    FrozenSpecimen,
    ParaffinEmbeddedTissueFfpe,
    CirculatingTumorDerivedDna,
    Blood,
    Plasma,
    Protein,
    Rna,
    Dna,
    PeripheralBloodMononuclearCell,
    TumorCellLine,
    Urine,
    Saliva,
    Serum,
    Xenograft,
    Unknown,
}

/// Analysis run status. The lifecycle is server-owned: the client only
/// observes it through `get_analysis_by_uuid` and never waits on it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisStatus {
    Created,
    Queued,
    Running,
    Completed,
    Failed,
}

impl AnalysisStatus {
    /// Whether the server will not transition this status further without a
    /// rerun.
    pub fn is_terminal(self) -> bool {
        matches!(self, AnalysisStatus::Completed | AnalysisStatus::Failed)
    }
}

/// Kind of staged upload. `ANALYSIS_INPUT` is the only kind the platform
/// accepts today.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadType {
    AnalysisInput,
}

impl UploadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadType::AnalysisInput => "ANALYSIS_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(ReferenceGenome::Hg19, "\"HG19\"")]
    #[case(ReferenceGenome::Hg38, "\"HG38\"")]
    fn test_reference_genome_wire_names(#[case] genome: ReferenceGenome, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&genome).unwrap(), expected);
    }

    #[rstest]
    #[case("\"FROZEN_SPECIMEN\"", SampleSource::FrozenSpecimen)]
    #[case("\"PARAFFIN_EMBEDDED_TISSUE_FFPE\"", SampleSource::ParaffinEmbeddedTissueFfpe)]
    #[case("\"CIRCULATING_TUMOR_DERIVED_DNA\"", SampleSource::CirculatingTumorDerivedDna)]
    #[case("\"PERIPHERAL_BLOOD_MONONUCLEAR_CELL\"", SampleSource::PeripheralBloodMononuclearCell)]
    fn test_sample_source_wire_names(#[case] json: &str, #[case] expected: SampleSource) {
        assert_eq!(serde_json::from_str::<SampleSource>(json).unwrap(), expected);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(AnalysisStatus::Completed.is_terminal());
        assert!(AnalysisStatus::Failed.is_terminal());
        assert!(!AnalysisStatus::Running.is_terminal());
    }
}
