use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::role::{RoleName, SystemRole};

/// Set of role names held by, or required of, a user.
///
/// Duplicates collapse on insert and iteration is always in lexicographic
/// order, which is the order used when a set is rendered for audit messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<RoleName>);

impl RoleSet {
    /// Creates an empty role set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Builds a role set from raw role-name strings.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(RoleName::new).collect()
    }

    /// Builds a role set from well-known system roles.
    #[must_use]
    pub fn from_system_roles(roles: &[SystemRole]) -> Self {
        roles.iter().copied().map(RoleName::from).collect()
    }

    /// Adds a role, returning whether it was newly inserted.
    pub fn insert(&mut self, role: impl Into<RoleName>) -> bool {
        self.0.insert(role.into())
    }

    /// Returns whether the set holds the given role name.
    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates roles in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleName> {
        self.0.iter()
    }

    /// Returns whether every role in `self` is also in `other`.
    ///
    /// The empty set is a subset of every set.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Returns whether `self` and `other` share at least one role.
    ///
    /// Always false when either side is empty.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    /// Returns the roles present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Returns role names in lexicographic order.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        self.0.iter().map(RoleName::as_str).collect()
    }
}

impl FromIterator<RoleName> for RoleSet {
    fn from_iter<T: IntoIterator<Item = RoleName>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<RoleName> for RoleSet {
    fn extend<T: IntoIterator<Item = RoleName>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for RoleSet {
    type Item = RoleName;
    type IntoIter = std::collections::btree_set::IntoIter<RoleName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a RoleName;
    type IntoIter = std::collections::btree_set::Iter<'a, RoleName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as `[A, B, C]` in sorted order.
impl Display for RoleSet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}]", self.sorted_names().join(", "))
    }
}
