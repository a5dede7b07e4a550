use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::Category;

/// Lifecycle stages of a custom project, serialized as snake_case strings.
///
/// The declaration order is the canonical progression; see the `lifecycle`
/// module for the ordering-derived logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    DeveloperSelection,
    InProgress,
    Completed,
    SecurityCheck,
    Delivered,
}

impl ProjectStatus {
    /// The stage's wire/step identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::DeveloperSelection => "developer_selection",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::SecurityCheck => "security_check",
            ProjectStatus::Delivered => "delivered",
        }
    }

    /// Parse a step identifier. Unknown identifiers are simply not found;
    /// callers treat that as "not a completed step" rather than an error.
    pub fn from_step_id(id: &str) -> Option<Self> {
        match id {
            "pending" => Some(ProjectStatus::Pending),
            "developer_selection" => Some(ProjectStatus::DeveloperSelection),
            "in_progress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            "security_check" => Some(ProjectStatus::SecurityCheck),
            "delivered" => Some(ProjectStatus::Delivered),
            _ => None,
        }
    }

    /// Position in the canonical progression, starting at 0 for `Pending`.
    pub fn position(&self) -> usize {
        match self {
            ProjectStatus::Pending => 0,
            ProjectStatus::DeveloperSelection => 1,
            ProjectStatus::InProgress => 2,
            ProjectStatus::Completed => 3,
            ProjectStatus::SecurityCheck => 4,
            ProjectStatus::Delivered => 5,
        }
    }
}

/// A bespoke work request tracked through the six-stage lifecycle.
///
/// `status` and `progress` are independently mutable: progress is a
/// percentage the assigned developer reports, never derived from the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProject {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub buyer_id: Uuid,
    pub buyer_name: String,
    pub developer_id: Option<Uuid>,
    pub developer_name: Option<String>,
    pub price: Option<f64>,
    pub status: ProjectStatus,
    pub requirements: String,
    /// Nominally 0–100. Not clamped here; display rounds and clips it.
    pub progress: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomProject {
    /// Progress as rendered next to the tracker ("NN% Complete").
    pub fn rounded_progress(&self) -> i64 {
        self.progress.round() as i64
    }
}

// ── DTOs ──

/// Request-form input; the backend assigns id, timestamps and the initial
/// `Pending` status. Budget and timeline stay free text ("$500-1000",
/// "2 weeks").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomProjectRequest {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub requirements: String,
    pub budget: String,
    pub timeline: String,
}

/// Status/progress update keyed by project id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProjectStatus {
    pub status: ProjectStatus,
    pub progress: f32,
}
