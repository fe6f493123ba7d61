use super::comma_separated;
use crate::types::{
    DateString, GermlineControl, PatientId, PatientUuid, SampleUuid, SequencingId, SequencingUuid,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A sequencing run performed on a sample.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SequencingResponse {
    pub uuid: SequencingUuid,
    pub sample_uuid: Option<SampleUuid>,
    pub sequencing_id: Option<SequencingId>,
    #[serde(rename = "type")]
    pub sequencing_type: Option<String>,
    pub type_other: Option<String>,
    pub center: Option<String>,
    pub center_other: Option<String>,
    pub germline_control: Option<GermlineControl>,
    pub comments: Option<String>,
    pub date: Option<DateString>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Sequencing fields for create and update calls. Unset fields are omitted
/// from the request.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SequencingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_uuid: Option<SampleUuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencing_id: Option<SequencingId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sequencing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub germline_control: Option<GermlineControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateString>,
}

/// Optional filters for sequencing listings. Filters are ANDed together;
/// each UUID list matches records belonging to any listed parent.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SequencingFilter {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_separated"
    )]
    pub patient_uuids: Option<Vec<PatientUuid>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_separated"
    )]
    pub sample_uuids: Option<Vec<SampleUuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_compose() {
        let filter = SequencingFilter {
            patient_uuids: Some(vec![
                PatientUuid::from_static("pa"),
                PatientUuid::from_static("pb"),
            ]),
            sample_uuids: Some(vec![SampleUuid::from_static("s1")]),
            patient_id: None,
        };
        let query = serde_urlencoded::to_string(&filter).unwrap();
        assert_eq!(query, "patientUuids=pa%2Cpb&sampleUuids=s1");
    }

    #[test]
    fn test_create_body_wire_names() {
        let data = SequencingData {
            sample_uuid: Some(SampleUuid::from_static("s1")),
            sequencing_type: Some("WGS".to_string()),
            germline_control: Some(GermlineControl::Unknown),
            ..Default::default()
        };
        let body = serde_json::to_value(&data).unwrap();
        assert_eq!(body["sampleUuid"], "s1");
        assert_eq!(body["type"], "WGS");
        assert_eq!(body["germlineControl"], "UNKNOWN");
        assert!(body.get("date").is_none());
    }
}
