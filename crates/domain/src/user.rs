use rolegate_core::UserIdentity;
use serde::{Deserialize, Serialize};

use crate::role_set::RoleSet;

/// Read-only view of a user and the roles it currently holds.
///
/// Built on demand from the role store and never persisted as such.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User name the roles belong to.
    pub user_name: UserIdentity,
    /// Roles currently held.
    pub roles: RoleSet,
}

impl User {
    /// Creates a user view.
    #[must_use]
    pub fn new(user_name: UserIdentity, roles: RoleSet) -> Self {
        Self { user_name, roles }
    }
}

/// Request to replace every role a user holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateRolesCommand {
    /// Complete replacement role set.
    pub roles: RoleSet,
    /// Optional reason recorded in the audit trail.
    #[serde(default)]
    pub comment: Option<String>,
}

impl UpdateRolesCommand {
    /// Creates a replacement command.
    #[must_use]
    pub fn new(roles: RoleSet, comment: Option<String>) -> Self {
        Self { roles, comment }
    }

    /// Returns the comment, or `None` when it is absent or blank.
    #[must_use]
    pub fn effective_comment(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .filter(|comment| !comment.trim().is_empty())
    }
}

/// Person resolved from the person directory, used as the audit subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable directory identifier.
    pub id: i64,
    /// User name linked to the person.
    pub user_id: UserIdentity,
    /// Human-readable name, logged alongside audit writes.
    pub display_name: String,
}
