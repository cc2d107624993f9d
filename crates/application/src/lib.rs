//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod role_directory_service;
mod user_role_ports;
mod user_role_service;

pub use authorization_service::AuthorizationService;
pub use role_directory_service::RoleDirectoryService;
pub use user_role_ports::{
    ChangeLogRepository, PersonRepository, RecordedChangeLog, UserRoleRepository,
};
pub use user_role_service::UserRoleService;
