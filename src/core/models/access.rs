//! Roles and access policies
//!
//! A route is guarded by an [`AccessPolicy`]: the set of roles allowed to
//! reach it. There is one policy type for every role combination.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator: reviews reports and statistics
    Admin,
    /// Inspection staff: schedules and conducts inspections
    #[serde(alias = "inspector")]
    Staff,
    /// Establishment user
    User,
}

impl Role {
    /// All roles
    pub const ALL: [Self; 3] = [Self::Admin, Self::Staff, Self::User];
}

/// Error returned when a role name is not recognized
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid role: {0}. Use: admin, staff, user")]
pub struct ParseRoleError(pub String);

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Staff => write!(f, "staff"),
            Self::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" | "inspector" => Ok(Self::Staff),
            "user" => Ok(Self::User),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Set of roles allowed to reach a route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessPolicy {
    allowed: BTreeSet<Role>,
}

impl AccessPolicy {
    /// Policy allowing exactly the given roles
    #[must_use]
    pub fn allow<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    /// Policy allowing every role
    #[must_use]
    pub fn any_role() -> Self {
        Self::allow(Role::ALL)
    }

    /// Whether the role may pass
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    /// Allowed roles, in order
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed.iter().copied()
    }
}
