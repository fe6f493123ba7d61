//! Analysis endpoints: CRUD, rerun, artifact downloads, and the two-step
//! temporal file upload.

use super::access::{Access, AdminAccess};
use crate::errors::{check, CgiError, FileIOError};
use crate::models::{
    AnalysisData, AnalysisFilter, AnalysisInput, AnalysisResponse, CreateAnalysis,
    CreateDirectAnalysis, FileUploadResponse, RerunAnalyses, TemporalUploadRequest,
    TemporalUploadResponse,
};
use crate::pagination::{Page, PageQuery};
use crate::types::{AnalysisId, AnalysisUuid, FileUuid, ProjectUuid, ReferenceGenome, UploadType};
use crate::CgiClient;
use bytes::Bytes;
use camino::Utf8Path;
use fs_err::tokio::File;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tokio_util::codec::{BytesCodec, FramedRead};

/// A typed analysis result artifact.
#[derive(Debug, Copy, Clone)]
enum ResultArtifact {
    Summary,
    Mutations,
    Biomarkers,
    Cnas,
    Fusions,
}

impl ResultArtifact {
    fn as_str(&self) -> &'static str {
        match self {
            ResultArtifact::Summary => "summary",
            ResultArtifact::Mutations => "mutations",
            ResultArtifact::Biomarkers => "biomarkers",
            ResultArtifact::Cnas => "cnas",
            ResultArtifact::Fusions => "fusions",
        }
    }
}

impl CgiClient<AdminAccess> {
    /// Get every analysis of a project, in server order. Requires the
    /// superadmin role.
    pub async fn get_all_analyses(
        &self,
        project_uuid: &ProjectUuid,
        filter: &AnalysisFilter,
    ) -> Result<Vec<AnalysisResponse>, CgiError> {
        self.fetch_query(
            self.route(format_args!("project/{project_uuid}/analysis/full")),
            filter,
        )
        .await
    }
}

impl<A: Access> CgiClient<A> {
    /// Get one page of a project's analyses.
    pub async fn get_all_analyses_paginated(
        &self,
        project_uuid: &ProjectUuid,
        filter: &AnalysisFilter,
        size: u32,
        page: u32,
    ) -> Result<Page<AnalysisResponse>, CgiError> {
        self.get_page(
            self.route(format_args!("project/{project_uuid}/analysis")),
            filter,
            PageQuery { size, page },
        )
        .await
    }

    /// Get one analysis, including its current run status.
    pub async fn get_analysis_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<AnalysisResponse, CgiError> {
        self.fetch(self.route(format_args!(
            "project/{project_uuid}/analysis/{analysis_uuid}"
        )))
        .await
    }

    /// Create an analysis from already-staged input.
    pub async fn create_analysis(
        &self,
        project_uuid: &ProjectUuid,
        body: &CreateAnalysis,
    ) -> Result<AnalysisResponse, CgiError> {
        self.post_json(self.route(format_args!("project/{project_uuid}/analysis")), body)
            .await
    }

    /// Upload local files and create an analysis running on them.
    pub async fn create_analysis_with_files(
        &self,
        project_uuid: &ProjectUuid,
        analysis_id: AnalysisId,
        reference_genome: ReferenceGenome,
        local_files: &[&Utf8Path],
    ) -> Result<AnalysisResponse, FileIOError> {
        let mut input_files = Vec::with_capacity(local_files.len());
        for local_file in local_files {
            input_files.push(self.upload_file(project_uuid, local_file).await?);
        }
        let body = CreateAnalysis {
            analysis_id,
            reference_genome,
            input: AnalysisInput::files(input_files),
        };
        Ok(self.create_analysis(project_uuid, &body).await?)
    }

    /// Create an analysis carrying its own clinical context instead of
    /// referencing existing patient, sample, and sequencing records.
    pub async fn create_direct_analysis(
        &self,
        project_uuid: &ProjectUuid,
        body: &CreateDirectAnalysis,
    ) -> Result<AnalysisResponse, CgiError> {
        self.post_json(
            self.route(format_args!("project/{project_uuid}/direct-analysis")),
            body,
        )
        .await
    }

    /// Update an analysis. Fields left unset in `data` are unchanged.
    pub async fn update_analysis(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
        data: &AnalysisData,
    ) -> Result<AnalysisResponse, CgiError> {
        self.put_json(
            self.route(format_args!(
                "project/{project_uuid}/analysis/{analysis_uuid}"
            )),
            data,
        )
        .await
    }

    pub async fn delete_analysis(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!(
            "project/{project_uuid}/analysis/{analysis_uuid}"
        )))
        .await
    }

    // ==================================================
    //                 RERUN
    // ==================================================

    /// Send a completed or failed analysis back to the queue.
    pub async fn rerun_analysis(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<AnalysisResponse, CgiError> {
        let url = self.route(format_args!(
            "project/{project_uuid}/analysis/{analysis_uuid}/rerun"
        ));
        log::debug!("POST {}", url);
        let res = self.client.post(&url).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// Send several analyses back to the queue in one request.
    pub async fn rerun_multiple_analyses(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuids: &[AnalysisUuid],
    ) -> Result<(), CgiError> {
        let url = self.route(format_args!("project/{project_uuid}/analysis/rerun"));
        log::debug!("POST {}", url);
        let res = self
            .client
            .post(&url)
            .json(&RerunAnalyses { analysis_uuids })
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }

    // ==================================================
    //                 ARTIFACT DOWNLOADS
    // ==================================================

    /// Download the result files of an analysis as a zip archive.
    /// Persisting the bytes is the caller's concern.
    pub async fn get_analysis_result_files(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<Bytes, CgiError> {
        self.get_bytes(self.route(format_args!(
            "project/{project_uuid}/analysis/{analysis_uuid}/result/files"
        )))
        .await
    }

    /// Download the input files of an analysis as a zip archive.
    pub async fn get_analysis_input_files(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<Bytes, CgiError> {
        self.get_bytes(self.route(format_args!(
            "project/{project_uuid}/analysis/{analysis_uuid}/input/files"
        )))
        .await
    }

    /// Download the full run log of an analysis.
    pub async fn get_analysis_full_log(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<String, CgiError> {
        self.get_text(self.route(format_args!(
            "project/{project_uuid}/analysis/{analysis_uuid}/full-log"
        )))
        .await
    }

    pub async fn get_analysis_result_summary(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<String, CgiError> {
        self.result_artifact(project_uuid, analysis_uuid, ResultArtifact::Summary)
            .await
    }

    pub async fn get_analysis_result_mutations(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<String, CgiError> {
        self.result_artifact(project_uuid, analysis_uuid, ResultArtifact::Mutations)
            .await
    }

    pub async fn get_analysis_result_biomarkers(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<String, CgiError> {
        self.result_artifact(project_uuid, analysis_uuid, ResultArtifact::Biomarkers)
            .await
    }

    pub async fn get_analysis_result_cnas(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<String, CgiError> {
        self.result_artifact(project_uuid, analysis_uuid, ResultArtifact::Cnas)
            .await
    }

    pub async fn get_analysis_result_fusions(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
    ) -> Result<String, CgiError> {
        self.result_artifact(project_uuid, analysis_uuid, ResultArtifact::Fusions)
            .await
    }

    async fn result_artifact(
        &self,
        project_uuid: &ProjectUuid,
        analysis_uuid: &AnalysisUuid,
        artifact: ResultArtifact,
    ) -> Result<String, CgiError> {
        self.get_text(self.route(format_args!(
            "project/{project_uuid}/analysis/{analysis_uuid}/result/{}",
            artifact.as_str()
        )))
        .await
    }

    // ==================================================
    //                 FILE UPLOAD
    // ==================================================

    /// Request a temporal upload slot for staging an analysis input file.
    pub async fn request_temporal_upload(
        &self,
        project_uuid: &ProjectUuid,
    ) -> Result<TemporalUploadResponse, CgiError> {
        self.post_json(
            self.route(format_args!("project/{project_uuid}/temporal-upload")),
            &TemporalUploadRequest::analysis_input(),
        )
        .await
    }

    /// Push a local file to a temporal upload slot. The file is streamed
    /// from disk with its length known up front.
    pub async fn upload_file_to_temporal(
        &self,
        project_uuid: &ProjectUuid,
        upload: &TemporalUploadResponse,
        local_file: &Utf8Path,
    ) -> Result<FileUuid, FileIOError> {
        let filename = local_file
            .file_name()
            .ok_or_else(|| FileIOError::PathError(local_file.to_string()))?
            .to_string();
        let file = File::open(local_file).await.map_err(FileIOError::IO)?;
        let content_length = fs_err::tokio::metadata(local_file).await?.len();
        // https://github.com/seanmonstar/reqwest/issues/646#issuecomment-616985015
        let reader = Body::wrap_stream(FramedRead::new(file, BytesCodec::new()));
        let form = Form::new()
            .text("type", UploadType::AnalysisInput.as_str())
            .text("code", upload.code.to_string())
            .part(
                "file",
                Part::stream_with_length(reader, content_length).file_name(filename),
            );
        let url = self.route(format_args!(
            "public/project/{project_uuid}/temporal-upload/{}",
            upload.uuid
        ));
        log::debug!("POST {} ({} bytes)", url, content_length);
        let res = self.client.post(&url).multipart(form).send().await?;
        let data: FileUploadResponse = check(res).await?.json().await?;
        Ok(data.uuid)
    }

    /// Stage a local file for analysis input: request a temporal upload
    /// slot, then push the bytes to it.
    pub async fn upload_file(
        &self,
        project_uuid: &ProjectUuid,
        local_file: &Utf8Path,
    ) -> Result<FileUuid, FileIOError> {
        let upload = self.request_temporal_upload(project_uuid).await?;
        self.upload_file_to_temporal(project_uuid, &upload, local_file)
            .await
    }
}
