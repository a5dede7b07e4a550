use chrono::Utc;
use uuid::Uuid;

use crate::models::content::Content;
use crate::models::custom_projects::{
    CustomProject, CustomProjectRequest, ProjectStatus, UpdateProjectStatus,
};
use crate::models::users::{Role, User};

use super::{Backend, BackendError, MockBackendConfig};

/// In-process stand-in for the eventual real backend. Holds its own copies
/// of the collections, allocates ids and timestamps, and sleeps a fixed
/// artificial delay before acknowledging a submission. Submissions always
/// succeed once validation passes; there is no retry or cancellation.
#[derive(Debug)]
pub struct MockBackend {
    config: MockBackendConfig,
    content: Vec<Content>,
    projects: Vec<CustomProject>,
}

impl MockBackend {
    pub fn new(config: MockBackendConfig) -> Self {
        Self {
            config,
            content: Vec::new(),
            projects: Vec::new(),
        }
    }

    /// A backend pre-seeded with catalog content.
    pub fn with_content(config: MockBackendConfig, content: Vec<Content>) -> Self {
        Self {
            config,
            content,
            projects: Vec::new(),
        }
    }
}

/// Required-field validation, mirroring the request form's messages.
fn validate_request(request: &CustomProjectRequest) -> Result<(), BackendError> {
    let required = [
        (&request.title, "Title is required"),
        (&request.description, "Description is required"),
        (&request.requirements, "Requirements are required"),
        (&request.budget, "Budget is required"),
        (&request.timeline, "Timeline is required"),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            return Err(BackendError::ValidationFailed(message.to_string()));
        }
    }
    Ok(())
}

impl Backend for MockBackend {
    async fn submit_request(
        &mut self,
        buyer: &User,
        request: CustomProjectRequest,
    ) -> Result<CustomProject, BackendError> {
        validate_request(&request)?;

        // Simulated network latency; the request always succeeds past here.
        tokio::time::sleep(self.config.submit_delay).await;

        let now = Utc::now();
        let project = CustomProject {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            buyer_id: buyer.id,
            buyer_name: buyer.name.clone(),
            developer_id: None,
            developer_name: None,
            price: None,
            status: ProjectStatus::Pending,
            requirements: request.requirements,
            progress: 0.0,
            created_at: now,
            updated_at: now,
        };
        tracing::info!(
            project_id = %project.id,
            buyer_id = %buyer.id,
            category = ?request.category,
            budget = %request.budget,
            timeline = %request.timeline,
            "custom project request submitted"
        );
        self.projects.push(project.clone());
        Ok(project)
    }

    async fn fetch_marketplace(&self) -> Result<Vec<Content>, BackendError> {
        let mut content = self.content.clone();
        content.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(content)
    }

    async fn fetch_projects(&self, buyer_id: Uuid) -> Result<Vec<CustomProject>, BackendError> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.buyer_id == buyer_id)
            .cloned()
            .collect())
    }

    async fn update_project(
        &mut self,
        actor: &User,
        id: Uuid,
        update: UpdateProjectStatus,
    ) -> Result<CustomProject, BackendError> {
        if !actor.has_role(Role::Developer) && !actor.has_role(Role::Admin) {
            return Err(BackendError::Unauthorized(
                "only developers and admins can update project status".to_string(),
            ));
        }

        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| BackendError::NotFound(format!("project {id}")))?;

        project.status = update.status;
        project.progress = update.progress;
        project.updated_at = Utc::now();
        tracing::info!(
            project_id = %id,
            actor_id = %actor.id,
            status = ?update.status,
            progress = update.progress,
            "project status updated"
        );
        Ok(project.clone())
    }
}
