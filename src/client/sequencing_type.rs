use super::access::{Access, AdminAccess};
use crate::errors::CgiError;
use crate::models::{LookupName, SequencingTypeResponse};
use crate::pagination::{Page, PageQuery, NO_QUERY};
use crate::types::{ProjectUuid, SequencingTypeUuid};
use crate::CgiClient;

impl CgiClient<AdminAccess> {
    /// Get every sequencing type of a project, in server order. Requires
    /// the superadmin role.
    pub async fn get_all_sequencing_types(
        &self,
        project_uuid: &ProjectUuid,
    ) -> Result<Vec<SequencingTypeResponse>, CgiError> {
        self.fetch(self.route(format_args!(
            "project/{project_uuid}/sequencing-type/full"
        )))
        .await
    }
}

impl<A: Access> CgiClient<A> {
    /// Get one page of a project's sequencing types.
    pub async fn get_all_sequencing_types_paginated(
        &self,
        project_uuid: &ProjectUuid,
        size: u32,
        page: u32,
    ) -> Result<Page<SequencingTypeResponse>, CgiError> {
        self.get_page(
            self.route(format_args!("project/{project_uuid}/sequencing-type")),
            &NO_QUERY,
            PageQuery { size, page },
        )
        .await
    }

    pub async fn get_sequencing_type_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_type_uuid: &SequencingTypeUuid,
    ) -> Result<SequencingTypeResponse, CgiError> {
        self.fetch(self.route(format_args!(
            "project/{project_uuid}/sequencing-type/{sequencing_type_uuid}"
        )))
        .await
    }

    pub async fn create_sequencing_type(
        &self,
        project_uuid: &ProjectUuid,
        name: &str,
    ) -> Result<SequencingTypeResponse, CgiError> {
        self.post_json(
            self.route(format_args!("project/{project_uuid}/sequencing-type")),
            &LookupName { name },
        )
        .await
    }

    /// Rename a sequencing type.
    pub async fn update_sequencing_type(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_type_uuid: &SequencingTypeUuid,
        name: &str,
    ) -> Result<SequencingTypeResponse, CgiError> {
        self.put_json(
            self.route(format_args!(
                "project/{project_uuid}/sequencing-type/{sequencing_type_uuid}"
            )),
            &LookupName { name },
        )
        .await
    }

    pub async fn delete_sequencing_type(
        &self,
        project_uuid: &ProjectUuid,
        sequencing_type_uuid: &SequencingTypeUuid,
    ) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!(
            "project/{project_uuid}/sequencing-type/{sequencing_type_uuid}"
        )))
        .await
    }
}
