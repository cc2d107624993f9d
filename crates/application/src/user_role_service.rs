use std::sync::Arc;

use rolegate_core::{AppResult, UserIdentity};
use rolegate_domain::{
    ChangeLogEntry, EntityReference, Operation, Person, Severity, UpdateRolesCommand,
};
use tracing::{info, warn};

use crate::{ChangeLogRepository, PersonRepository, UserRoleRepository};

/// Application service replacing user roles with an audit trail.
///
/// The change-log write and the role replacement are two independent calls
/// with no shared transaction. A crash between them can leave an audit entry
/// for a change that was never persisted.
#[derive(Clone)]
pub struct UserRoleService {
    role_repository: Arc<dyn UserRoleRepository>,
    person_repository: Arc<dyn PersonRepository>,
    change_log_repository: Arc<dyn ChangeLogRepository>,
}

impl UserRoleService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        role_repository: Arc<dyn UserRoleRepository>,
        person_repository: Arc<dyn PersonRepository>,
        change_log_repository: Arc<dyn ChangeLogRepository>,
    ) -> Self {
        Self {
            role_repository,
            person_repository,
            change_log_repository,
        }
    }

    /// Replaces every role held by `target_user` and records who did it.
    ///
    /// Returns the role store's own success flag. Audit problems never change
    /// the outcome: an unknown audit subject or a failed change-log write is
    /// logged and the replacement still goes ahead.
    pub async fn update_roles(
        &self,
        acting_user: &UserIdentity,
        target_user: &UserIdentity,
        command: UpdateRolesCommand,
    ) -> AppResult<bool> {
        info!(
            target_user = %target_user,
            roles = %command.roles,
            "updating user roles"
        );

        match self.resolve_audit_subject(target_user).await {
            Some(person) => {
                self.write_change_log(acting_user, target_user, &command, &person)
                    .await;
            }
            None => {
                warn!(
                    target_user = %target_user,
                    "user does not exist in the person directory, cannot create audit log for role update"
                );
            }
        }

        self.role_repository
            .update_roles(target_user, command.roles)
            .await
    }

    async fn resolve_audit_subject(&self, target_user: &UserIdentity) -> Option<Person> {
        match self
            .person_repository
            .find_person_by_user_id(target_user)
            .await
        {
            Ok(person) => person,
            Err(error) => {
                warn!(
                    target_user = %target_user,
                    error = %error,
                    "failed to resolve person for role update audit"
                );
                None
            }
        }
    }

    async fn write_change_log(
        &self,
        acting_user: &UserIdentity,
        target_user: &UserIdentity,
        command: &UpdateRolesCommand,
        person: &Person,
    ) {
        let entry = ChangeLogEntry {
            parent_reference: EntityReference::person(person.id),
            severity: Severity::Information,
            user_id: acting_user.clone(),
            message: role_update_message(target_user, command),
            child_kind: None,
            operation: Operation::Update,
        };

        if let Err(error) = self.change_log_repository.write(entry).await {
            warn!(
                target_user = %target_user,
                person_id = person.id,
                person = %person.display_name,
                error = %error,
                "failed to write role update audit entry"
            );
        }
    }
}

fn role_update_message(target_user: &UserIdentity, command: &UpdateRolesCommand) -> String {
    format!(
        "Roles for {target_user} updated to {}.  Comment: {}",
        command.roles,
        command.effective_comment().unwrap_or("none")
    )
}
