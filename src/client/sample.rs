use super::access::{Access, AdminAccess};
use crate::errors::{check, CgiError};
use crate::models::{SampleData, SampleFilter, SampleResponse};
use crate::pagination::{Page, PageQuery};
use crate::types::{ProjectUuid, SampleUuid};
use crate::CgiClient;
use itertools::Itertools;

impl CgiClient<AdminAccess> {
    /// Get every sample across the given projects, in server order.
    /// Requires the superadmin role.
    pub async fn get_all_samples(
        &self,
        project_uuids: &[ProjectUuid],
        filter: &SampleFilter,
    ) -> Result<Vec<SampleResponse>, CgiError> {
        let url = self.route("sample/full");
        log::debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .query(&[("projectUuids", project_uuids.iter().join(","))])
            .query(filter)
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }
}

impl<A: Access> CgiClient<A> {
    /// Get one page of a project's samples.
    pub async fn get_all_samples_paginated(
        &self,
        project_uuid: &ProjectUuid,
        filter: &SampleFilter,
        size: u32,
        page: u32,
    ) -> Result<Page<SampleResponse>, CgiError> {
        self.get_page(
            self.route(format_args!("{project_uuid}/sample")),
            filter,
            PageQuery { size, page },
        )
        .await
    }

    pub async fn get_sample_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
        sample_uuid: &SampleUuid,
    ) -> Result<SampleResponse, CgiError> {
        self.fetch(self.route(format_args!("{project_uuid}/sample/{sample_uuid}")))
            .await
    }

    /// Create a sample. The server assigns its UUID and validates the
    /// required fields.
    pub async fn create_sample(
        &self,
        project_uuid: &ProjectUuid,
        data: &SampleData,
    ) -> Result<SampleResponse, CgiError> {
        self.post_json(self.route(format_args!("{project_uuid}/sample")), data)
            .await
    }

    /// Update a sample. Fields left unset in `data` are unchanged.
    pub async fn update_sample(
        &self,
        project_uuid: &ProjectUuid,
        sample_uuid: &SampleUuid,
        data: &SampleData,
    ) -> Result<SampleResponse, CgiError> {
        self.put_json(
            self.route(format_args!("{project_uuid}/sample/{sample_uuid}")),
            data,
        )
        .await
    }

    pub async fn delete_sample(
        &self,
        project_uuid: &ProjectUuid,
        sample_uuid: &SampleUuid,
    ) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!("{project_uuid}/sample/{sample_uuid}")))
            .await
    }
}
