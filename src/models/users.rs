use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles an account can hold, serialized as lowercase strings.
///
/// A user may hold several roles at once (e.g. a seller who also buys);
/// the session narrows to a single active role at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
    Developer,
    Admin,
}

impl Role {
    /// Human-readable label shown in the role-switcher menu.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
            Role::Developer => "Developer",
            Role::Admin => "Admin",
        }
    }
}

/// A marketplace account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Non-empty; the first entry is the default active role on login.
    pub roles: Vec<Role>,
    pub avatar_url: Option<String>,
    pub rating: Option<f32>,
    pub projects_count: Option<u32>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// The role a fresh session starts in.
    pub fn default_role(&self) -> Option<Role> {
        self.roles.first().copied()
    }
}
