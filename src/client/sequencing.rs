use super::access::{Access, AdminAccess};
use crate::errors::{check, CgiError};
use crate::models::{SequencingData, SequencingFilter, SequencingResponse};
use crate::pagination::{Page, PageQuery};
use crate::types::{ProjectUuid, SequencingUuid};
use crate::CgiClient;
use itertools::Itertools;

impl CgiClient<AdminAccess> {
    /// Get every sequencing across the given projects, in server order.
    /// Requires the superadmin role.
    pub async fn get_all_sequencings(
        &self,
        project_uuids: &[ProjectUuid],
        filter: &SequencingFilter,
    ) -> Result<Vec<SequencingResponse>, CgiError> {
        let url = self.route("sequencing/full");
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
    /// Get one page of a project's sequencings.
    pub async fn get_all_sequencings_paginated(
        &self,
        project_uuid: &ProjectUuid,
        filter: &SequencingFilter,
        size: u32,
        page: u32,
    ) -> Result<Page<SequencingResponse>, CgiError> {
        self.get_page(
            self.route(format_args!("{project_uuid}/sequencing")),
            filter,
            PageQuery { size, page },
        )
        .await
    }

    pub async fn get_sequencing_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_uuid: &SequencingUuid,
    ) -> Result<SequencingResponse, CgiError> {
        self.fetch(self.route(format_args!(
            "{project_uuid}/sequencing/{sequencing_uuid}"
        )))
        .await
    }

    /// Create a sequencing. The server assigns its UUID and validates the
    /// required fields.
    pub async fn create_sequencing(
        &self,
        project_uuid: &ProjectUuid,
        data: &SequencingData,
    ) -> Result<SequencingResponse, CgiError> {
        self.post_json(self.route(format_args!("{project_uuid}/sequencing")), data)
            .await
    }

    /// Update a sequencing. Fields left unset in `data` are unchanged.
    pub async fn update_sequencing(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_uuid: &SequencingUuid,
        data: &SequencingData,
    ) -> Result<SequencingResponse, CgiError> {
        self.put_json(
            self.route(format_args!("{project_uuid}/sequencing/{sequencing_uuid}")),
            data,
        )
        .await
    }

    pub async fn delete_sequencing(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_uuid: &SequencingUuid,
    ) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!(
            "{project_uuid}/sequencing/{sequencing_uuid}"
        )))
        .await
    }
}
