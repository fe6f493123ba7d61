use crate::types::{FileUuid, TemporalUploadUuid, UploadCode, UploadType};
use serde::{Deserialize, Serialize};

/// Body for `request_temporal_upload`.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct TemporalUploadRequest {
    #[serde(rename = "type")]
    pub upload_type: UploadType,
}

impl TemporalUploadRequest {
    pub fn analysis_input() -> Self {
        TemporalUploadRequest {
            upload_type: UploadType::AnalysisInput,
        }
    }
}

/// A short-lived upload slot issued by the server. Push bytes to it with
/// `upload_file_to_temporal` before attaching the resulting file to an
/// analysis.
#[derive(Deserialize, Debug, Clone)]
pub struct TemporalUploadResponse {
    pub uuid: TemporalUploadUuid,
    pub code: UploadCode,
}

/// Response from pushing a file to a temporal upload slot.
#[derive(Deserialize, Debug, Clone)]
pub struct FileUploadResponse {
    pub uuid: FileUuid,
}
