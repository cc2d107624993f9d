use async_trait::async_trait;
use chrono::{DateTime, Utc};

use rolegate_core::{AppResult, UserIdentity};
use rolegate_domain::{ChangeLogEntry, EntityReference, Person, RoleSet, User};

/// Repository port for role assignments.
#[async_trait]
pub trait UserRoleRepository: Send + Sync {
    /// Returns the roles currently held by a user, empty when the user is unknown.
    async fn get_user_roles(&self, user_name: &UserIdentity) -> AppResult<RoleSet>;

    /// Replaces every role held by a user and reports whether the write succeeded.
    async fn update_roles(&self, user_name: &UserIdentity, roles: RoleSet) -> AppResult<bool>;

    /// Lists every known user with its roles.
    async fn find_all_users(&self) -> AppResult<Vec<User>>;
}

/// Port for resolving user names to people in the person directory.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Finds the person linked to a user name.
    async fn find_person_by_user_id(&self, user_id: &UserIdentity) -> AppResult<Option<Person>>;
}

/// Audit entry as stored by the change log, with write-time metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedChangeLog {
    /// Identifier assigned by the store.
    pub id: i64,
    /// Entry as written.
    pub entry: ChangeLogEntry,
    /// Time the entry was written.
    pub created_at: DateTime<Utc>,
}

/// Port for the append-only change log.
#[async_trait]
pub trait ChangeLogRepository: Send + Sync {
    /// Persists one entry.
    async fn write(&self, entry: ChangeLogEntry) -> AppResult<()>;

    /// Lists entries recorded against an entity, oldest first.
    async fn find_by_parent(&self, parent: EntityReference) -> AppResult<Vec<RecordedChangeLog>>;
}
