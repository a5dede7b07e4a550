use chrono::Utc;
use uuid::Uuid;

use crate::models::content::{CatalogSort, Category, Content, ContentStatus};
use crate::models::custom_projects::{CustomProject, ProjectStatus};

/// In-memory catalog state: the marketplace listing, the signed-in seller's
/// uploads, and the custom-project collection. Collections are replaced
/// wholesale by the fetch paths and edited in place by the update paths.
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    marketplace_content: Vec<Content>,
    my_uploads: Vec<Content>,
    custom_projects: Vec<CustomProject>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Marketplace content ──

    pub fn marketplace_content(&self) -> &[Content] {
        &self.marketplace_content
    }

    pub fn set_marketplace_content(&mut self, content: Vec<Content>) {
        self.marketplace_content = content;
    }

    /// Buyer-facing view: approved listings only. Moderation itself is the
    /// backend's job; this just mirrors what buyers are meant to see.
    pub fn approved_marketplace(&self) -> Vec<&Content> {
        self.marketplace_content
            .iter()
            .filter(|c| c.status == ContentStatus::Approved)
            .collect()
    }

    /// Listings filtered to one category, or everything when `None` ("All").
    pub fn marketplace_by_category(&self, category: Option<Category>) -> Vec<&Content> {
        self.marketplace_content
            .iter()
            .filter(|c| category.is_none_or(|cat| c.category == cat))
            .collect()
    }

    /// A sorted copy of the listing, matching the marketplace sort menu.
    pub fn sorted_marketplace(&self, sort: CatalogSort) -> Vec<Content> {
        let mut content = self.marketplace_content.clone();
        match sort {
            CatalogSort::Newest => content.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            CatalogSort::PriceLow => content.sort_by(|a, b| a.price.total_cmp(&b.price)),
            CatalogSort::PriceHigh => content.sort_by(|a, b| b.price.total_cmp(&a.price)),
            CatalogSort::Rating => content.sort_by(|a, b| {
                b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0))
            }),
        }
        content
    }

    // ── Seller uploads ──

    pub fn my_uploads(&self) -> &[Content] {
        &self.my_uploads
    }

    pub fn set_my_uploads(&mut self, content: Vec<Content>) {
        self.my_uploads = content;
    }

    pub fn add_upload(&mut self, content: Content) {
        tracing::info!(content_id = %content.id, title = %content.title, "upload added");
        self.my_uploads.push(content);
    }

    /// Update an upload's moderation status. Returns the updated record, or
    /// `None` when the id is unknown (the update is then a no-op).
    pub fn update_upload_status(&mut self, id: Uuid, status: ContentStatus) -> Option<&Content> {
        let item = self.my_uploads.iter_mut().find(|c| c.id == id)?;
        item.status = status;
        item.updated_at = Utc::now();
        Some(item)
    }

    // ── Custom projects ──

    pub fn custom_projects(&self) -> &[CustomProject] {
        &self.custom_projects
    }

    pub fn set_custom_projects(&mut self, projects: Vec<CustomProject>) {
        self.custom_projects = projects;
    }

    pub fn projects_for_buyer(&self, buyer_id: Uuid) -> Vec<&CustomProject> {
        self.custom_projects
            .iter()
            .filter(|p| p.buyer_id == buyer_id)
            .collect()
    }

    /// Update a project's stage and reported progress together. Returns the
    /// updated record, or `None` when the id is unknown (no-op). Progress is
    /// stored as given; it is not clamped or derived from the stage.
    pub fn update_project_status(
        &mut self,
        id: Uuid,
        status: ProjectStatus,
        progress: f32,
    ) -> Option<&CustomProject> {
        let project = self.custom_projects.iter_mut().find(|p| p.id == id)?;
        project.status = status;
        project.progress = progress;
        project.updated_at = Utc::now();
        tracing::info!(project_id = %id, status = ?status, progress, "project updated");
        Some(project)
    }
}
