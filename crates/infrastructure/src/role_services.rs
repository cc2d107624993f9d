use std::sync::Arc;

use rolegate_application::{
    AuthorizationService, ChangeLogRepository, PersonRepository, RoleDirectoryService,
    UserRoleRepository, UserRoleService,
};
use rolegate_core::{AppError, AppResult};
use tracing::info;

use crate::{
    DiscardingChangeLogRepository, InMemoryChangeLogRepository, InMemoryPersonRepository,
    InMemoryUserRoleRepository, RoleSeed, RuntimeConfig,
};

/// Services sharing one set of collaborators.
#[derive(Clone)]
pub struct RoleServices {
    /// Role-membership checks.
    pub authorization_service: AuthorizationService,
    /// Audited role replacement.
    pub user_role_service: UserRoleService,
    /// Read-only role queries.
    pub role_directory_service: RoleDirectoryService,
    /// Change log the services write to, for reading audit history.
    pub change_log_repository: Arc<dyn ChangeLogRepository>,
}

/// Collects collaborators and fails fast when one is missing.
#[derive(Default)]
pub struct RoleServicesBuilder {
    role_repository: Option<Arc<dyn UserRoleRepository>>,
    person_repository: Option<Arc<dyn PersonRepository>>,
    change_log_repository: Option<Arc<dyn ChangeLogRepository>>,
}

impl RoleServicesBuilder {
    /// Creates a builder with no collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the role store.
    #[must_use]
    pub fn role_repository(mut self, repository: Arc<dyn UserRoleRepository>) -> Self {
        self.role_repository = Some(repository);
        self
    }

    /// Sets the person directory.
    #[must_use]
    pub fn person_repository(mut self, repository: Arc<dyn PersonRepository>) -> Self {
        self.person_repository = Some(repository);
        self
    }

    /// Sets the change log.
    #[must_use]
    pub fn change_log_repository(mut self, repository: Arc<dyn ChangeLogRepository>) -> Self {
        self.change_log_repository = Some(repository);
        self
    }

    /// Wires every service, or reports the first missing collaborator.
    pub fn build(self) -> AppResult<RoleServices> {
        let role_repository = required(self.role_repository, "role repository")?;
        let person_repository = required(self.person_repository, "person repository")?;
        let change_log_repository = required(self.change_log_repository, "change log repository")?;

        Ok(RoleServices {
            authorization_service: AuthorizationService::new(role_repository.clone()),
            user_role_service: UserRoleService::new(
                role_repository.clone(),
                person_repository,
                change_log_repository.clone(),
            ),
            role_directory_service: RoleDirectoryService::new(role_repository),
            change_log_repository,
        })
    }
}

fn required<T: ?Sized>(value: Option<Arc<T>>, name: &str) -> AppResult<Arc<T>> {
    value.ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

/// Builds in-memory role services from runtime configuration.
pub fn build_role_services(config: &RuntimeConfig) -> AppResult<RoleServices> {
    let seed = match config.seed_path.as_deref() {
        Some(path) => RoleSeed::load(path)?,
        None => RoleSeed::default(),
    };

    in_memory_role_services(seed, config.audit_enabled)
}

/// Builds role services backed by in-memory adapters populated from a seed.
pub fn in_memory_role_services(seed: RoleSeed, audit_enabled: bool) -> AppResult<RoleServices> {
    info!(
        users = seed.users.len(),
        people = seed.people.len(),
        audit_enabled,
        "building in-memory role services"
    );

    let change_log_repository: Arc<dyn ChangeLogRepository> = if audit_enabled {
        Arc::new(InMemoryChangeLogRepository::new())
    } else {
        Arc::new(DiscardingChangeLogRepository)
    };

    RoleServicesBuilder::new()
        .role_repository(Arc::new(InMemoryUserRoleRepository::with_users(seed.users)))
        .person_repository(Arc::new(InMemoryPersonRepository::new(seed.people)))
        .change_log_repository(change_log_repository)
        .build()
}
