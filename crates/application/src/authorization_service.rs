use std::sync::Arc;

use rolegate_core::{AppError, AppResult, UserIdentity};
use rolegate_domain::{RoleSet, SystemRole};

use crate::UserRoleRepository;

/// Application service answering role-membership questions.
///
/// Every check reads the user's current roles from the repository; nothing is
/// cached and no state is shared between calls.
#[derive(Clone)]
pub struct AuthorizationService {
    repository: Arc<dyn UserRoleRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRoleRepository>) -> Self {
        Self { repository }
    }

    /// Returns whether the user holds every required role.
    ///
    /// An empty requirement is always satisfied.
    pub async fn has_role(
        &self,
        user_name: &UserIdentity,
        required_roles: &RoleSet,
    ) -> AppResult<bool> {
        let user_roles = self.repository.get_user_roles(user_name).await?;
        Ok(required_roles.is_subset_of(&user_roles))
    }

    /// Returns whether the user holds at least one required role.
    ///
    /// An empty requirement is never satisfied.
    pub async fn has_any_role(
        &self,
        user_name: &UserIdentity,
        required_roles: &RoleSet,
    ) -> AppResult<bool> {
        let user_roles = self.repository.get_user_roles(user_name).await?;
        Ok(required_roles.intersects(&user_roles))
    }

    /// Returns whether the user holds every listed system role.
    pub async fn has_system_roles(
        &self,
        user_name: &UserIdentity,
        required_roles: &[SystemRole],
    ) -> AppResult<bool> {
        self.has_role(user_name, &RoleSet::from_system_roles(required_roles))
            .await
    }

    /// Returns whether the user holds at least one listed system role.
    pub async fn has_any_system_role(
        &self,
        user_name: &UserIdentity,
        required_roles: &[SystemRole],
    ) -> AppResult<bool> {
        self.has_any_role(user_name, &RoleSet::from_system_roles(required_roles))
            .await
    }

    /// Returns whether the user holds every named role.
    pub async fn has_role_names(
        &self,
        user_name: &UserIdentity,
        required_roles: &[&str],
    ) -> AppResult<bool> {
        self.has_role(
            user_name,
            &RoleSet::from_names(required_roles.iter().copied()),
        )
        .await
    }

    /// Returns whether the user holds at least one named role.
    pub async fn has_any_role_name(
        &self,
        user_name: &UserIdentity,
        required_roles: &[&str],
    ) -> AppResult<bool> {
        self.has_any_role(
            user_name,
            &RoleSet::from_names(required_roles.iter().copied()),
        )
        .await
    }

    /// Ensures the user holds every required role.
    pub async fn require_role(
        &self,
        user_name: &UserIdentity,
        required_roles: &RoleSet,
    ) -> AppResult<()> {
        if self.has_role(user_name, required_roles).await? {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "user '{user_name}' is missing one of roles {required_roles}"
        )))
    }

    /// Ensures the user holds at least one required role.
    pub async fn require_any_role(
        &self,
        user_name: &UserIdentity,
        required_roles: &RoleSet,
    ) -> AppResult<()> {
        if self.has_any_role(user_name, required_roles).await? {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "user '{user_name}' holds none of roles {required_roles}"
        )))
    }
}

#[cfg(test)]
mod tests;
