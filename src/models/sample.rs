use super::comma_separated;
use crate::types::{DateString, PatientUuid, SampleId, SampleSource, SampleUuid};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A sample taken from a patient.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SampleResponse {
    pub uuid: SampleUuid,
    pub patient_uuid: Option<PatientUuid>,
    pub sample_id: Option<SampleId>,
    pub source: Option<SampleSource>,
    pub tumor_type: Option<String>,
    pub tumor_sub_type: Option<String>,
    pub purity: Option<String>,
    #[serde(rename = "type")]
    pub sample_type: Option<String>,
    pub metastatic_site: Option<String>,
    pub age_at_sampling: Option<u32>,
    pub informed_consent_notes: Option<String>,
    pub share_for_research: Option<bool>,
    pub date: Option<DateString>,
    #[serde(default)]
    pub biomarkers: Vec<Biomarker>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Sample fields for create and update calls. Unset fields are omitted from
/// the request.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_uuid: Option<PatientUuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<SampleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SampleSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumor_sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purity: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sample_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastatic_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_at_sampling: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub informed_consent_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_for_research: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biomarkers: Option<Vec<Biomarker>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Biomarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Optional filters for sample listings.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SampleFilter {
    /// Include samples belonging to any of these patients.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_separated"
    )]
    pub patient_uuids: Option<Vec<PatientUuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_uuids_join_with_commas() {
        let filter = SampleFilter {
            patient_uuids: Some(vec![
                PatientUuid::from_static("a"),
                PatientUuid::from_static("b"),
            ]),
        };
        let query = serde_urlencoded::to_string(&filter).unwrap();
        assert_eq!(query, "patientUuids=a%2Cb");
    }

    #[test]
    fn test_type_field_wire_name() {
        let data = SampleData {
            sample_type: Some("TUMOR".to_string()),
            share_for_research: Some(true),
            ..Default::default()
        };
        let body = serde_json::to_value(&data).unwrap();
        assert_eq!(body["type"], "TUMOR");
        assert_eq!(body["shareForResearch"], true);
        assert!(body.get("sampleType").is_none());
    }
}
