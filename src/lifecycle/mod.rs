//! Custom-project lifecycle model: the canonical status ordering, the
//! progress-tracker derivations built on it, and the rule that picks which
//! of a buyer's projects the tracker shows.

use uuid::Uuid;

use crate::models::custom_projects::{CustomProject, ProjectStatus};

/// Canonical progression, in order. `ProjectStatus::position` agrees with
/// the index of each stage in this array.
pub const STATUS_ORDER: [ProjectStatus; 6] = [
    ProjectStatus::Pending,
    ProjectStatus::DeveloperSelection,
    ProjectStatus::InProgress,
    ProjectStatus::Completed,
    ProjectStatus::SecurityCheck,
    ProjectStatus::Delivered,
];

/// One milestone row in the progress tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerStep {
    pub id: &'static str,
    pub label: &'static str,
    /// Shown under the step while it is the current one.
    pub blurb: &'static str,
}

/// The five milestones the tracker renders. `pending` is not shown as a
/// step; a pending project simply has no milestone reached yet.
pub const TRACKER_STEPS: [TrackerStep; 5] = [
    TrackerStep {
        id: "developer_selection",
        label: "Developer Selection",
        blurb: "We are finding the best developer for your project.",
    },
    TrackerStep {
        id: "in_progress",
        label: "Project Making",
        blurb: "Your project is currently being worked on.",
    },
    TrackerStep {
        id: "completed",
        label: "Project Completion",
        blurb: "Your project is complete and waiting for final checks.",
    },
    TrackerStep {
        id: "security_check",
        label: "Security Checks",
        blurb: "Security review is in progress.",
    },
    TrackerStep {
        id: "delivered",
        label: "Completed",
        blurb: "Your project has been delivered successfully!",
    },
];

/// Whether the given step has been reached: its position is strictly before
/// the project's current stage, or it is the current stage itself.
///
/// Unknown step identifiers are never completed; the lookup must not panic.
pub fn is_step_completed(project: &CustomProject, step_id: &str) -> bool {
    match ProjectStatus::from_step_id(step_id) {
        Some(step) => step.position() < project.status.position() || project.status == step,
        None => false,
    }
}

/// Whether the given step is the project's current stage.
pub fn is_current_step(project: &CustomProject, step_id: &str) -> bool {
    project.status.as_str() == step_id
}

/// Pick the project the tracker should show for a buyer: among the buyer's
/// projects, a left fold seeded with the first one, replaced only by a
/// later-created project that is not yet delivered.
///
/// Consequences, kept deliberately: a delivered project never displaces the
/// accumulator, so when every owned project is delivered the *first* one is
/// returned; and a non-delivered candidate only wins on recency.
pub fn select_active_project(projects: &[CustomProject], buyer_id: Uuid) -> Option<&CustomProject> {
    let mut owned = projects.iter().filter(|p| p.buyer_id == buyer_id);
    let first = owned.next()?;
    Some(owned.fold(first, |acc, current| {
        if current.status != ProjectStatus::Delivered && current.created_at > acc.created_at {
            current
        } else {
            acc
        }
    }))
}

/// What the tracker panel displays. The demo record used when there is
/// nothing real to show stays in its own variants so it can never be
/// mistaken for (or written back as) a real project.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectView<'a> {
    /// A real project owned by the signed-in buyer.
    Active(&'a CustomProject),
    /// Signed in, but no projects yet; shows the demo record.
    Placeholder(&'a CustomProject),
    /// Nobody signed in; shows the demo record as a worked example.
    SignedOut(&'a CustomProject),
}

impl<'a> ProjectView<'a> {
    /// The record the tracker renders, whichever variant applies.
    pub fn project(&self) -> &'a CustomProject {
        match self {
            ProjectView::Active(p) | ProjectView::Placeholder(p) | ProjectView::SignedOut(p) => p,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, ProjectView::Active(_))
    }
}

/// Resolve the tracker display for an optionally signed-in buyer,
/// substituting `placeholder` (display only, never persisted) when there is
/// no active project.
pub fn project_view<'a>(
    projects: &'a [CustomProject],
    buyer_id: Option<Uuid>,
    placeholder: &'a CustomProject,
) -> ProjectView<'a> {
    match buyer_id {
        Some(id) => match select_active_project(projects, id) {
            Some(p) => ProjectView::Active(p),
            None => ProjectView::Placeholder(placeholder),
        },
        None => ProjectView::SignedOut(placeholder),
    }
}
