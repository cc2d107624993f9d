use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque, case-sensitive name of a user.
///
/// Used as the key for every role lookup and mutation. No normalisation is
/// applied: `alice` and `Alice` are different users.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
    /// Creates a user identity from its raw name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying user name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for UserIdentity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserIdentity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for UserIdentity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}
