use super::access::{Access, AdminAccess};
use crate::errors::CgiError;
use crate::models::{HospitalResponse, LookupName};
use crate::pagination::{Page, PageQuery, NO_QUERY};
use crate::types::{HospitalUuid, ProjectUuid};
use crate::CgiClient;

impl CgiClient<AdminAccess> {
    /// Get every hospital of a project. Hospitals have no server-side full
    /// listing, so pages are drained client-side.
    pub async fn get_all_hospitals(
        &self,
        project_uuid: &ProjectUuid,
    ) -> Result<Vec<HospitalResponse>, CgiError> {
        self.drain(
            self.route(format_args!("project/{project_uuid}/hospital")),
            &NO_QUERY,
        )
        .await
    }
}

impl<A: Access> CgiClient<A> {
    /// Get one page of a project's hospitals.
    pub async fn get_all_hospitals_paginated(
        &self,
        project_uuid: &ProjectUuid,
        size: u32,
        page: u32,
    ) -> Result<Page<HospitalResponse>, CgiError> {
        self.get_page(
            self.route(format_args!("project/{project_uuid}/hospital")),
            &NO_QUERY,
            PageQuery { size, page },
        )
        .await
    }

    pub async fn get_hospital_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
        hospital_uuid: &HospitalUuid,
    ) -> Result<HospitalResponse, CgiError> {
        self.fetch(self.route(format_args!(
            "project/{project_uuid}/hospital/{hospital_uuid}"
        )))
        .await
    }

    pub async fn create_hospital(
        &self,
        project_uuid: &ProjectUuid,
        name: &str,
    ) -> Result<HospitalResponse, CgiError> {
        self.post_json(
            self.route(format_args!("project/{project_uuid}/hospital")),
            &LookupName { name },
        )
        .await
    }

    /// Rename a hospital.
    pub async fn update_hospital(
        &self,
        project_uuid: &ProjectUuid,
        hospital_uuid: &HospitalUuid,
        name: &str,
    ) -> Result<HospitalResponse, CgiError> {
        self.put_json(
            self.route(format_args!(
                "project/{project_uuid}/hospital/{hospital_uuid}"
            )),
            &LookupName { name },
        )
        .await
    }

    pub async fn delete_hospital(
        &self,
        project_uuid: &ProjectUuid,
        hospital_uuid: &HospitalUuid,
    ) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!(
            "project/{project_uuid}/hospital/{hospital_uuid}"
        )))
        .await
    }
}
