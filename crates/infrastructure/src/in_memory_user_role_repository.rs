use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rolegate_application::UserRoleRepository;
use rolegate_core::{AppResult, UserIdentity};
use rolegate_domain::{RoleSet, User};
use tokio::sync::RwLock;

/// In-memory role store.
///
/// Replacements are last-write-wins; there is no version check.
#[derive(Debug)]
pub struct InMemoryUserRoleRepository {
    roles: RwLock<HashMap<UserIdentity, RoleSet>>,
    accepts_updates: AtomicBool,
}

impl InMemoryUserRoleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Creates a repository pre-populated with users.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            roles: RwLock::new(
                users
                    .into_iter()
                    .map(|user| (user.user_name, user.roles))
                    .collect(),
            ),
            accepts_updates: AtomicBool::new(true),
        }
    }

    /// Controls whether role replacements succeed. Rejected updates leave the
    /// stored roles untouched and report `false`.
    pub fn set_accepts_updates(&self, accepts_updates: bool) {
        self.accepts_updates
            .store(accepts_updates, Ordering::SeqCst);
    }
}

impl Default for InMemoryUserRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRoleRepository for InMemoryUserRoleRepository {
    async fn get_user_roles(&self, user_name: &UserIdentity) -> AppResult<RoleSet> {
        Ok(self
            .roles
            .read()
            .await
            .get(user_name)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_roles(&self, user_name: &UserIdentity, roles: RoleSet) -> AppResult<bool> {
        if !self.accepts_updates.load(Ordering::SeqCst) {
            return Ok(false);
        }

        self.roles.write().await.insert(user_name.clone(), roles);
        Ok(true)
    }

    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        let roles = self.roles.read().await;

        let mut users: Vec<User> = roles
            .iter()
            .map(|(user_name, roles)| User::new(user_name.clone(), roles.clone()))
            .collect();
        users.sort_by(|left, right| left.user_name.cmp(&right.user_name));

        Ok(users)
    }
}
