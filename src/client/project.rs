use super::access::{Access, AdminAccess};
use crate::errors::CgiError;
use crate::models::{ProjectFilter, ProjectName, ProjectResponse};
use crate::pagination::{Page, PageQuery};
use crate::types::ProjectUuid;
use crate::CgiClient;

impl CgiClient<AdminAccess> {
    /// Get every project, in server order. Requires the superadmin role.
    pub async fn get_all_projects(
        &self,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectResponse>, CgiError> {
        self.fetch_query(self.route("project/full"), filter).await
    }
}

impl<A: Access> CgiClient<A> {
    /// Get one page of projects.
    pub async fn get_all_projects_paginated(
        &self,
        filter: &ProjectFilter,
        size: u32,
        page: u32,
    ) -> Result<Page<ProjectResponse>, CgiError> {
        self.get_page(self.route("project"), filter, PageQuery { size, page })
            .await
    }

    pub async fn get_project_by_uuid(
        &self,
        project_uuid: &ProjectUuid,
    ) -> Result<ProjectResponse, CgiError> {
        self.fetch(self.route(format_args!("project/{project_uuid}")))
            .await
    }

    /// Create a project. The server assigns its UUID.
    pub async fn create_project(&self, name: &str) -> Result<ProjectResponse, CgiError> {
        self.post_json(self.route("project"), &ProjectName { name })
            .await
    }

    /// Rename a project.
    pub async fn update_project(
        &self,
        project_uuid: &ProjectUuid,
        name: &str,
    ) -> Result<ProjectResponse, CgiError> {
        self.put_json(
            self.route(format_args!("project/{project_uuid}")),
            &ProjectName { name },
        )
        .await
    }

    /// Delete a project. The server refuses when dependent records remain.
    pub async fn delete_project(&self, project_uuid: &ProjectUuid) -> Result<(), CgiError> {
        self.delete_item(self.route(format_args!("project/{project_uuid}")))
            .await
    }
}
