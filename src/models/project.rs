use crate::types::ProjectUuid;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A project, the top-level container scoping every other resource.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub uuid: ProjectUuid,
    pub name: String,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Serialize, Debug, Clone)]
pub(crate) struct ProjectName<'a> {
    pub name: &'a str,
}

/// Optional filters for project listings.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ProjectFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
