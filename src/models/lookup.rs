//! Project-scoped lookup tables: hospitals, sequencing centers, and
//! sequencing types. Each is a `{uuid, name}` record.

use crate::types::{HospitalUuid, SequencingCenterUuid, SequencingTypeUuid};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A hospital registered in a project.
#[derive(Deserialize, Debug, Clone)]
pub struct HospitalResponse {
    pub uuid: HospitalUuid,
    pub name: String,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A sequencing center registered in a project.
#[derive(Deserialize, Debug, Clone)]
pub struct SequencingCenterResponse {
    pub uuid: SequencingCenterUuid,
    pub name: String,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A sequencing type registered in a project.
#[derive(Deserialize, Debug, Clone)]
pub struct SequencingTypeResponse {
    pub uuid: SequencingTypeUuid,
    pub name: String,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Body for creating or renaming a lookup entry.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct LookupName<'a> {
    pub name: &'a str,
}
