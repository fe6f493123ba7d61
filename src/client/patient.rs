use super::access::{Access, AdminAccess};
use crate::errors::{check, CgiError};
use crate::models::{PatientData, PatientFilter, PatientResponse};
use crate::pagination::{Page, PageQuery};
use crate::types::{PatientUuid, ProjectUuid};
use crate::CgiClient;

impl CgiClient<AdminAccess> {
    /// Get every patient of a project, in server order. Requires the
    /// superadmin role.
    pub async fn get_all_patients(
        &self,
        project_uuid: &ProjectUuid,
        filter: &PatientFilter,
    ) -> Result<Vec<PatientResponse>, CgiError> {
        let url = self.route("patient/full");
        log::debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .query(&[("project_uuid", project_uuid.as_str())])
            .query(filter)
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }
}

impl<A: Access> CgiClient<A> {
    /// Get one page of a project's patients.
    pub async fn get_all_patients_paginated(
        &self,
        project_uuid: &ProjectUuid,
        filter: &PatientFilter,
        size: u32,
        page: u32,
    ) -> Result<Page<PatientResponse>, CgiError> {
        self.get_page(
            self.route(format_args!("{project_uuid}/patient")),
            filter,
            PageQuery { size, page },
        )
        .await
    }

    pub async fn get_patient_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
        patient_uuid: &PatientUuid,
    ) -> Result<PatientResponse, CgiError> {
        self.fetch(self.route(format_args!("{project_uuid}/patient/{patient_uuid}")))
            .await
    }

    /// Create a patient. The server assigns its UUID and validates the
    /// required fields.
    pub async fn create_patient(
        &self,
        project_uuid: &ProjectUuid,
        data: &PatientData,
    ) -> Result<PatientResponse, CgiError> {
        self.post_json(self.route(format_args!("{project_uuid}/patient")), data)
            .await
    }

    /// Update a patient. Fields left unset in `data` are unchanged.
    pub async fn update_patient(
        &self,
        project_uuid: &ProjectUuid,
        patient_uuid: &PatientUuid,
        data: &PatientData,
    ) -> Result<PatientResponse, CgiError> {
        self.put_json(
            self.route(format_args!("{project_uuid}/patient/{patient_uuid}")),
            data,
        )
        .await
    }

    pub async fn delete_patient(
        &self,
        project_uuid: &ProjectUuid,
        patient_uuid: &PatientUuid,
    ) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!("{project_uuid}/patient/{patient_uuid}")))
            .await
    }
}
