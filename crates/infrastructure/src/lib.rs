//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_change_log_repository;
mod in_memory_person_repository;
mod in_memory_user_role_repository;
mod role_seed;
mod role_services;
mod runtime_config;
mod telemetry;

pub use in_memory_change_log_repository::{
    DiscardingChangeLogRepository, InMemoryChangeLogRepository,
};
pub use in_memory_person_repository::InMemoryPersonRepository;
pub use in_memory_user_role_repository::InMemoryUserRoleRepository;
pub use role_seed::RoleSeed;
pub use role_services::{
    RoleServices, RoleServicesBuilder, build_role_services, in_memory_role_services,
};
pub use runtime_config::RuntimeConfig;
pub use telemetry::init_tracing;
