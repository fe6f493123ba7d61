use super::access::{Access, AdminAccess};
use crate::errors::CgiError;
use crate::models::{LookupName, SequencingCenterResponse};
use crate::pagination::{Page, PageQuery, NO_QUERY};
use crate::types::{ProjectUuid, SequencingCenterUuid};
use crate::CgiClient;

impl CgiClient<AdminAccess> {
    /// Get every sequencing center of a project, in server order. Requires
    /// the superadmin role.
    pub async fn get_all_sequencing_centers(
        &self,
        project_uuid: &ProjectUuid,
    ) -> Result<Vec<SequencingCenterResponse>, CgiError> {
        self.fetch(self.route(format_args!(
            "project/{project_uuid}/sequencing-center/full"
        )))
        .await
    }
}

impl<A: Access> CgiClient<A> {
    /// Get one page of a project's sequencing centers.
    pub async fn get_all_sequencing_centers_paginated(
        &self,
        project_uuid: &ProjectUuid,
        size: u32,
        page: u32,
    ) -> Result<Page<SequencingCenterResponse>, CgiError> {
        self.get_page(
            self.route(format_args!("project/{project_uuid}/sequencing-center")),
            &NO_QUERY,
            PageQuery { size, page },
        )
        .await
    }

    pub async fn get_sequencing_center_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_center_uuid: &SequencingCenterUuid,
    ) -> Result<SequencingCenterResponse, CgiError> {
        self.fetch(self.route(format_args!(
            "project/{project_uuid}/sequencing-center/{sequencing_center_uuid}"
        )))
        .await
    }

    pub async fn create_sequencing_center(
        &self,
        project_uuid: &ProjectUuid,
        name: &str,
    ) -> Result<SequencingCenterResponse, CgiError> {
        self.post_json(
            self.route(format_args!("project/{project_uuid}/sequencing-center")),
            &LookupName { name },
        )
        .await
    }

    /// Rename a sequencing center.
    pub async fn update_sequencing_center(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_center_uuid: &SequencingCenterUuid,
        name: &str,
    ) -> Result<SequencingCenterResponse, CgiError> {
        self.put_json(
            self.route(format_args!(
                "project/{project_uuid}/sequencing-center/{sequencing_center_uuid}"
            )),
            &LookupName { name },
        )
        .await
    }

    pub async fn delete_sequencing_center(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_center_uuid: &SequencingCenterUuid,
    ) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!(
            "project/{project_uuid}/sequencing-center/{sequencing_center_uuid}"
        )))
        .await
    }
}
