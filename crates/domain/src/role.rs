use std::borrow::Borrow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rolegate_core::AppError;
use serde::{Deserialize, Serialize};

/// Name of a role held by a user.
///
/// Any string is a valid role name. Well-known names are available through
/// [`SystemRole`], but role checks only ever compare plain names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    /// Creates a role name from its raw value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying role name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for RoleName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RoleName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<SystemRole> for RoleName {
    fn from(value: SystemRole) -> Self {
        Self::new(value.as_str())
    }
}

impl Borrow<str> for RoleName {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RoleName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Well-known roles defined by the hosting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemRole {
    /// Full administrative access.
    Admin,
    /// Marker role for unauthenticated visitors.
    Anonymous,
    /// Allows editing applications.
    AppEditor,
    /// Allows administering attestations.
    AttestationAdmin,
    /// Allows editing bookmarks.
    BookmarkEditor,
    /// Allows editing capabilities.
    CapabilityEditor,
    /// Allows editing change initiatives.
    ChangeInitiativeEditor,
    /// Allows editing lineage.
    LineageEditor,
    /// Allows editing logical data flows.
    LogicalDataFlowEditor,
    /// Allows editing organisational units.
    OrgUnitEditor,
    /// Allows editing ratings.
    RatingEditor,
    /// Allows administering scenarios.
    ScenarioAdmin,
    /// Allows administering surveys.
    SurveyAdmin,
    /// Allows administering survey templates.
    SurveyTemplateAdmin,
    /// Allows editing taxonomies.
    TaxonomyEditor,
    /// Allows managing user roles.
    UserAdmin,
}

impl SystemRole {
    /// Returns the stable role name for this system role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Anonymous => "ANONYMOUS",
            Self::AppEditor => "APP_EDITOR",
            Self::AttestationAdmin => "ATTESTATION_ADMIN",
            Self::BookmarkEditor => "BOOKMARK_EDITOR",
            Self::CapabilityEditor => "CAPABILITY_EDITOR",
            Self::ChangeInitiativeEditor => "CHANGE_INITIATIVE_EDITOR",
            Self::LineageEditor => "LINEAGE_EDITOR",
            Self::LogicalDataFlowEditor => "LOGICAL_DATA_FLOW_EDITOR",
            Self::OrgUnitEditor => "ORG_UNIT_EDITOR",
            Self::RatingEditor => "RATING_EDITOR",
            Self::ScenarioAdmin => "SCENARIO_ADMIN",
            Self::SurveyAdmin => "SURVEY_ADMIN",
            Self::SurveyTemplateAdmin => "SURVEY_TEMPLATE_ADMIN",
            Self::TaxonomyEditor => "TAXONOMY_EDITOR",
            Self::UserAdmin => "USER_ADMIN",
        }
    }

    /// Returns all known system roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[SystemRole] = &[
            SystemRole::Admin,
            SystemRole::Anonymous,
            SystemRole::AppEditor,
            SystemRole::AttestationAdmin,
            SystemRole::BookmarkEditor,
            SystemRole::CapabilityEditor,
            SystemRole::ChangeInitiativeEditor,
            SystemRole::LineageEditor,
            SystemRole::LogicalDataFlowEditor,
            SystemRole::OrgUnitEditor,
            SystemRole::RatingEditor,
            SystemRole::ScenarioAdmin,
            SystemRole::SurveyAdmin,
            SystemRole::SurveyTemplateAdmin,
            SystemRole::TaxonomyEditor,
            SystemRole::UserAdmin,
        ];

        ALL
    }
}

impl FromStr for SystemRole {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown system role '{value}'")))
    }
}

impl Display for SystemRole {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
