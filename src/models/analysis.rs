use super::comma_separated;
use crate::types::{
    AnalysisId, AnalysisStatus, AnalysisUuid, FileUuid, GermlineControl, ReferenceGenome,
    SampleSource,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An analysis run over sequencing input. The run status is server-owned;
/// poll `get_analysis_by_uuid` to observe transitions.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub uuid: AnalysisUuid,
    pub analysis_id: Option<AnalysisId>,
    pub status: Option<AnalysisStatus>,
    pub reference_genome: Option<ReferenceGenome>,
    #[serde(default)]
    pub input_files: Vec<FileUuid>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// What an analysis runs on: files staged through a temporal upload, or
/// mutation text in a named format. The two are mutually exclusive and text
/// always carries its format, so an invalid combination cannot be built.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum AnalysisInput {
    #[serde(rename_all = "camelCase")]
    Files { input_files: Vec<FileUuid> },
    #[serde(rename_all = "camelCase")]
    Text { input_text: String, format: String },
}

impl AnalysisInput {
    pub fn files(input_files: Vec<FileUuid>) -> Self {
        AnalysisInput::Files { input_files }
    }

    pub fn text(input_text: impl Into<String>, format: impl Into<String>) -> Self {
        AnalysisInput::Text {
            input_text: input_text.into(),
            format: format.into(),
        }
    }
}

/// Body for `create_analysis`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysis {
    pub analysis_id: AnalysisId,
    pub reference_genome: ReferenceGenome,
    #[serde(flatten)]
    pub input: AnalysisInput,
}

/// Body for `create_direct_analysis`: an analysis plus the clinical context
/// the platform would otherwise look up from existing patient, sample, and
/// sequencing records.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateDirectAnalysis {
    pub patient_id: String,
    pub sample_id: String,
    pub sequencing_id: String,
    pub analysis_id: AnalysisId,
    pub sample_source: SampleSource,
    pub tumor_type: String,
    pub sequencing_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencing_type_other: Option<String>,
    pub sequencing_germline_control: GermlineControl,
    pub reference_genome: ReferenceGenome,
    #[serde(flatten)]
    pub input: AnalysisInput,
}

/// Analysis fields for update calls.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<AnalysisId>,
}

/// Optional filters for analysis listings.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFilter {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_separated"
    )]
    pub sample_uuids: Option<Vec<crate::types::SampleUuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AnalysisStatus>,
}

/// Body for `rerun_multiple_analyses`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RerunAnalyses<'a> {
    pub analysis_uuids: &'a [AnalysisUuid],
}
