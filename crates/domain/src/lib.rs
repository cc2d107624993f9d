//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod change_log;
mod role;
mod role_set;
mod user;

pub use change_log::{ChangeLogEntry, EntityKind, EntityReference, Operation, Severity};
pub use role::{RoleName, SystemRole};
pub use role_set::RoleSet;
pub use user::{Person, UpdateRolesCommand, User};
