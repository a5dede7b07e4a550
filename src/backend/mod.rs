//! The boundary a real backend would sit behind. The library ships only the
//! in-process mock; everything above it talks to this trait so the mock can
//! be swapped for a remote implementation later.

pub mod mock;

use std::time::Duration;

use uuid::Uuid;

use crate::models::content::Content;
use crate::models::custom_projects::{CustomProject, CustomProjectRequest, UpdateProjectStatus};
use crate::models::users::User;

pub use mock::MockBackend;

/// Error kinds surfaced at the backend boundary.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    ValidationFailed(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

/// Operations the presentation layer needs from a backend.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Submit a custom-project request on behalf of `buyer`. The backend
    /// allocates the id and timestamps and returns the created record.
    async fn submit_request(
        &mut self,
        buyer: &User,
        request: CustomProjectRequest,
    ) -> Result<CustomProject, BackendError>;

    /// The full marketplace listing, newest first.
    async fn fetch_marketplace(&self) -> Result<Vec<Content>, BackendError>;

    /// All custom projects belonging to one buyer.
    async fn fetch_projects(&self, buyer_id: Uuid) -> Result<Vec<CustomProject>, BackendError>;

    /// Update a project's stage and progress. Restricted to developer and
    /// admin actors.
    async fn update_project(
        &mut self,
        actor: &User,
        id: Uuid,
        update: UpdateProjectStatus,
    ) -> Result<CustomProject, BackendError>;
}

/// Mock backend tuning, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct MockBackendConfig {
    /// Artificial latency before a submission is acknowledged.
    pub submit_delay: Duration,
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
        }
    }
}

impl MockBackendConfig {
    pub fn from_env() -> Self {
        Self {
            submit_delay: parse_duration_millis("MOCK_SUBMIT_DELAY_MS", 1500),
        }
    }
}

fn parse_duration_millis(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or_else(|| Duration::from_millis(default))
}
