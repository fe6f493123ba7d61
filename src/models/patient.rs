use crate::types::{DateString, Gender, PatientId, PatientUuid};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A patient record. Belongs to a project.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub uuid: PatientUuid,
    pub patient_id: Option<PatientId>,
    pub birth_date: Option<DateString>,
    pub gender: Option<Gender>,
    pub diagnosis_age: Option<u32>,
    pub diagnosis_date: Option<DateString>,
    pub hospital: Option<String>,
    pub smoking_status: Option<String>,
    pub comments: Option<String>,
    pub vital_status: Option<String>,
    pub performance_status: Option<String>,
    pub last_follow_up_date: Option<DateString>,
    #[serde(default)]
    pub comorbidities: Vec<Comorbidity>,
    #[serde(default)]
    pub treatments: Vec<Treatment>,
    #[serde(default)]
    pub germline_alterations: Vec<GermlineAlteration>,
    #[serde(default)]
    pub other_molecular_analysis: Vec<MolecularAnalysis>,
    #[serde(default)]
    pub family_cancers: Vec<FamilyCancer>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Patient fields for create and update calls. Every field is optional;
/// fields left unset are omitted from the request, so an update leaves them
/// unchanged server-side.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatientData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_date: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_follow_up_date: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comorbidities: Option<Vec<Comorbidity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatments: Option<Vec<Treatment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub germline_alterations: Option<Vec<GermlineAlteration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_molecular_analysis: Option<Vec<MolecularAnalysis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_cancers: Option<Vec<FamilyCancer>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comorbidity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathology_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_date: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateString>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub treatment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<Vec<TreatmentResponseStatus>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentResponseStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateString>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GermlineAlteration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MolecularAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_other: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FamilyCancer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topography_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parentage: Option<String>,
}

/// Optional filters for patient listings. Keys are snake_case on the wire,
/// unlike the other resources.
#[derive(Serialize, Debug, Clone, Default)]
pub struct PatientFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_date_equals: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_cgi_analysis_date_equals: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date_before: Option<DateString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date_after: Option<DateString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let data = PatientData {
            vital_status: Some("DECEASED".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&data).unwrap();
        let map = body.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["vitalStatus"], "DECEASED");
    }

    #[test]
    fn test_filter_keys_are_snake_case() {
        let filter = PatientFilter {
            gender: Some(Gender::Female),
            birth_date_before: Some(DateString::from_static("2000-01-01")),
            ..Default::default()
        };
        let query = serde_urlencoded::to_string(&filter).unwrap();
        assert_eq!(query, "gender=FEMALE&birth_date_before=2000-01-01");
    }

    #[test]
    fn test_nested_clinical_records_round_trip() {
        let treatment = Treatment {
            treatment_id: Some("t-1".to_string()),
            treatment_type: Some("CHEMOTHERAPY".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&treatment).unwrap();
        assert_eq!(body["treatmentId"], "t-1");
        assert_eq!(body["type"], "CHEMOTHERAPY");
        assert!(body.get("startDate").is_none());
    }
}
