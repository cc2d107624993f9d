use rolegate_core::UserIdentity;
use serde::{Deserialize, Serialize};

/// Kinds of entity an audit entry can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// A person from the person directory.
    Person,
}

impl EntityKind {
    /// Returns a stable storage value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
        }
    }
}

/// Typed pointer to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    /// Entity kind.
    pub kind: EntityKind,
    /// Entity identifier within its kind.
    pub id: i64,
}

impl EntityReference {
    /// Creates a reference to a person.
    #[must_use]
    pub fn person(id: i64) -> Self {
        Self {
            kind: EntityKind::Person,
            id,
        }
    }
}

/// Severity attached to an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Routine change.
    Information,
    /// Change worth reviewing.
    Warning,
    /// Failed or harmful change.
    Error,
}

impl Severity {
    /// Returns a stable storage value for this severity.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Information => "INFORMATION",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// Kind of change recorded by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Something was created.
    Add,
    /// Something was modified in place.
    Update,
    /// Something was deleted.
    Remove,
}

impl Operation {
    /// Returns a stable storage value for this operation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Update => "UPDATE",
            Self::Remove => "REMOVE",
        }
    }
}

/// Immutable audit entry describing who changed what.
///
/// The write timestamp is assigned by the change-log store, not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    /// Entity the change is recorded against.
    pub parent_reference: EntityReference,
    /// Entry severity.
    pub severity: Severity,
    /// User that performed the change.
    pub user_id: UserIdentity,
    /// Human-readable description.
    pub message: String,
    /// Kind of child entity affected, if any.
    pub child_kind: Option<EntityKind>,
    /// Kind of change.
    pub operation: Operation,
}
