use uuid::Uuid;

use crate::models::users::{Role, User};

/// In-memory session state: who is signed in and which of their roles is
/// active. Constructed explicitly and passed where needed; there is no
/// ambient global.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    user: Option<User>,
    active_role: Option<Role>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a user in. The active role defaults to the first role the
    /// account holds.
    pub fn login(&mut self, user: User) {
        self.active_role = user.default_role();
        tracing::info!(user_id = %user.id, role = ?self.active_role, "user signed in");
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "user signed out");
        }
        self.active_role = None;
    }

    /// Switch the active role. Silently ignored when nobody is signed in or
    /// the account does not hold the requested role; that is a UI guard, not
    /// an error.
    pub fn switch_role(&mut self, role: Role) {
        match &self.user {
            Some(user) if user.has_role(role) => {
                self.active_role = Some(role);
                tracing::info!(user_id = %user.id, role = ?role, "active role switched");
            }
            _ => {
                tracing::warn!(role = ?role, "ignored switch to a role the session does not hold");
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_user_id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn active_role(&self) -> Option<Role> {
        self.active_role
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
