use std::sync::Arc;

use rolegate_core::{AppResult, UserIdentity};
use rolegate_domain::{RoleSet, User};

use crate::UserRoleRepository;

/// Read-only queries over user role assignments.
#[derive(Clone)]
pub struct RoleDirectoryService {
    repository: Arc<dyn UserRoleRepository>,
}

impl RoleDirectoryService {
    /// Creates a new directory service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRoleRepository>) -> Self {
        Self { repository }
    }

    /// Lists every known user with its roles.
    pub async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.repository.find_all_users().await
    }

    /// Builds a user view; unknown users come back with no roles.
    pub async fn get_user_view(&self, user_name: &UserIdentity) -> AppResult<User> {
        let roles = self.repository.get_user_roles(user_name).await?;
        Ok(User::new(user_name.clone(), roles))
    }

    /// Returns the roles currently held by a user.
    pub async fn get_user_roles(&self, user_name: &UserIdentity) -> AppResult<RoleSet> {
        self.repository.get_user_roles(user_name).await
    }
}
