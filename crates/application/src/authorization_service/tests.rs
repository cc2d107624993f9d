use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use rolegate_core::{AppError, AppResult, UserIdentity};
use rolegate_domain::{RoleSet, SystemRole, User};

use crate::UserRoleRepository;

use super::AuthorizationService;

struct FakeUserRoleRepository {
    roles: HashMap<UserIdentity, RoleSet>,
}

#[async_trait]
impl UserRoleRepository for FakeUserRoleRepository {
    async fn get_user_roles(&self, user_name: &UserIdentity) -> AppResult<RoleSet> {
        Ok(self.roles.get(user_name).cloned().unwrap_or_default())
    }

    async fn update_roles(&self, _user_name: &UserIdentity, _roles: RoleSet) -> AppResult<bool> {
        Ok(false)
    }

    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        Ok(Vec::new())
    }
}

struct UnavailableUserRoleRepository;

#[async_trait]
impl UserRoleRepository for UnavailableUserRoleRepository {
    async fn get_user_roles(&self, _user_name: &UserIdentity) -> AppResult<RoleSet> {
        Err(AppError::Internal("role store unavailable".to_owned()))
    }

    async fn update_roles(&self, _user_name: &UserIdentity, _roles: RoleSet) -> AppResult<bool> {
        Err(AppError::Internal("role store unavailable".to_owned()))
    }

    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        Err(AppError::Internal("role store unavailable".to_owned()))
    }
}

fn service() -> AuthorizationService {
    AuthorizationService::new(Arc::new(FakeUserRoleRepository {
        roles: HashMap::from([
            (
                UserIdentity::new("alice"),
                RoleSet::from_names(["ADMIN", "USER"]),
            ),
            (UserIdentity::new("bob"), RoleSet::new()),
        ]),
    }))
}

fn alice() -> UserIdentity {
    UserIdentity::new("alice")
}

fn bob() -> UserIdentity {
    UserIdentity::new("bob")
}

#[tokio::test]
async fn has_role_requires_every_role() -> AppResult<()> {
    let service = service();

    assert!(
        service
            .has_role(&alice(), &RoleSet::from_names(["ADMIN"]))
            .await?
    );
    assert!(
        !service
            .has_role(&alice(), &RoleSet::from_names(["ADMIN", "OWNER"]))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn has_any_role_requires_one_shared_role() -> AppResult<()> {
    let service = service();

    assert!(
        service
            .has_any_role(&alice(), &RoleSet::from_names(["OWNER", "USER"]))
            .await?
    );
    assert!(
        !service
            .has_any_role(&alice(), &RoleSet::from_names(["OWNER"]))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn empty_requirement_passes_has_role_and_fails_has_any_role() -> AppResult<()> {
    let service = service();

    for user in [alice(), bob(), UserIdentity::new("unknown")] {
        assert!(service.has_role(&user, &RoleSet::new()).await?);
        assert!(!service.has_any_role(&user, &RoleSet::new()).await?);
    }
    Ok(())
}

#[tokio::test]
async fn user_without_roles_matches_nothing() -> AppResult<()> {
    let service = service();

    assert!(
        !service
            .has_any_role(&bob(), &RoleSet::from_names(["ADMIN"]))
            .await?
    );
    assert!(
        !service
            .has_role(&bob(), &RoleSet::from_names(["ADMIN"]))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn user_names_are_case_sensitive() -> AppResult<()> {
    let service = service();

    assert!(
        !service
            .has_role(&UserIdentity::new("Alice"), &RoleSet::from_names(["ADMIN"]))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn system_role_and_name_overloads_agree() -> AppResult<()> {
    let service = service();

    assert!(
        service
            .has_system_roles(&alice(), &[SystemRole::Admin])
            .await?
    );
    assert!(service.has_role_names(&alice(), &["ADMIN"]).await?);
    assert!(
        !service
            .has_system_roles(&alice(), &[SystemRole::Admin, SystemRole::UserAdmin])
            .await?
    );
    assert!(
        service
            .has_any_system_role(&alice(), &[SystemRole::Admin, SystemRole::UserAdmin])
            .await?
    );
    assert!(
        service
            .has_any_role_name(&alice(), &["USER", "USER_ADMIN"])
            .await?
    );
    assert!(!service.has_any_role_name(&alice(), &[]).await?);
    assert!(service.has_system_roles(&bob(), &[]).await?);
    Ok(())
}

#[tokio::test]
async fn require_role_denies_missing_role() {
    let service = service();

    let granted = service
        .require_role(&alice(), &RoleSet::from_names(["USER"]))
        .await;
    let denied = service
        .require_role(&alice(), &RoleSet::from_names(["USER", "OWNER"]))
        .await;

    assert!(granted.is_ok());
    assert!(matches!(denied, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn require_any_role_denies_empty_requirement() {
    let service = service();

    let result = service.require_any_role(&alice(), &RoleSet::new()).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn store_failure_propagates_instead_of_denying() {
    let service = AuthorizationService::new(Arc::new(UnavailableUserRoleRepository));

    let result = service.has_role(&alice(), &RoleSet::new()).await;

    assert!(matches!(result, Err(AppError::Internal(_))));
}
