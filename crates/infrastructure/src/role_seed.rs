use std::path::Path;

use rolegate_core::{AppError, AppResult};
use rolegate_domain::{Person, User};
use serde::{Deserialize, Serialize};

/// Initial users and people loaded into the in-memory adapters.
///
/// ```json
/// {
///   "users": [{ "user_name": "alice", "roles": ["ADMIN"] }],
///   "people": [{ "id": 42, "user_id": "alice", "display_name": "Alice" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSeed {
    /// Users and their starting roles.
    #[serde(default)]
    pub users: Vec<User>,
    /// People resolvable as audit subjects.
    #[serde(default)]
    pub people: Vec<Person>,
}

impl RoleSeed {
    /// Parses a seed document.
    pub fn from_json(value: &str) -> AppResult<Self> {
        serde_json::from_str(value)
            .map_err(|error| AppError::Validation(format!("invalid role seed: {error}")))
    }

    /// Reads and parses a seed file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|error| {
            AppError::Internal(format!(
                "failed to read role seed '{}': {error}",
                path.display()
            ))
        })?;

        Self::from_json(contents.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rolegate_core::{AppError, UserIdentity};
    use rolegate_domain::RoleSet;

    use super::RoleSeed;

    #[test]
    fn seed_parses_users_and_people() {
        let seed = RoleSeed::from_json(
            r#"{
                "users": [{ "user_name": "alice", "roles": ["USER", "ADMIN", "USER"] }],
                "people": [{ "id": 42, "user_id": "alice", "display_name": "Alice" }]
            }"#,
        )
        .unwrap_or_default();

        assert_eq!(seed.users.len(), 1);
        assert_eq!(seed.users[0].roles, RoleSet::from_names(["ADMIN", "USER"]));
        assert_eq!(seed.people.len(), 1);
        assert_eq!(seed.people[0].user_id, UserIdentity::new("alice"));
        assert_eq!(seed.people[0].display_name, "Alice");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let seed = RoleSeed::from_json("{}");
        assert_eq!(seed.ok(), Some(RoleSeed::default()));
    }

    #[test]
    fn malformed_seed_is_a_validation_error() {
        let result = RoleSeed::from_json(r#"{ "users": "alice" }"#);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn missing_seed_file_is_reported() {
        let result = RoleSeed::load(Path::new("/nonexistent/rolegate-seed.json"));
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
