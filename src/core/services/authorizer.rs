//! Route authorization
//!
//! A single role check replaces per-role guards: every route name maps to
//! an [`AccessPolicy`] and [`RouteTable::authorize`] is called the same way
//! for all of them. Routes missing from the table are denied.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::models::{AccessPolicy, Role};

/// Why a request was refused
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    /// No role was supplied
    #[error("authentication required for route '{route}'")]
    Unauthenticated {
        /// Requested route
        route: String,
    },

    /// The role is not in the route's policy
    #[error("role '{role}' may not access route '{route}'")]
    Forbidden {
        /// Caller's role
        role: Role,
        /// Requested route
        route: String,
    },

    /// The route has no policy
    #[error("no access policy for route '{0}'")]
    UnknownRoute(String),
}

/// Route name to access policy mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, AccessPolicy>,
}

impl RouteTable {
    /// The standard routes of the inspection records system
    #[must_use]
    pub fn standard() -> Self {
        let everyone = AccessPolicy::any_role();
        let staff = AccessPolicy::allow([Role::Admin, Role::Staff]);
        let admin = AccessPolicy::allow([Role::Admin]);

        let mut table = Self::default();
        table.insert("dashboard", everyone.clone());
        table.insert("establishments", everyone);
        table.insert("inspections", staff.clone());
        table.insert("responses", staff.clone());
        table.insert("keywords", staff);
        table.insert("reports", admin.clone());
        table.insert("statistics", admin.clone());
        table.insert("users", admin);
        table
    }

    /// Set the policy for a route, replacing any previous one
    pub fn insert(&mut self, route: &str, policy: AccessPolicy) {
        self.routes.insert(route.to_string(), policy);
    }

    /// Apply overrides on top of this table
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, AccessPolicy>) -> Self {
        for (route, policy) in overrides {
            self.insert(route, policy.clone());
        }
        self
    }

    /// Policy for a route
    #[must_use]
    pub fn policy(&self, route: &str) -> Option<&AccessPolicy> {
        self.routes.get(route)
    }

    /// All routes with their policies, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AccessPolicy)> {
        self.routes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Decide whether a caller may reach a route
    pub fn authorize(&self, route: &str, role: Option<Role>) -> Result<(), AccessDenied> {
        let policy =
            self.policy(route).ok_or_else(|| AccessDenied::UnknownRoute(route.to_string()))?;

        let role = role.ok_or_else(|| AccessDenied::Unauthenticated {
            route: route.to_string(),
        })?;

        if policy.permits(role) {
            Ok(())
        } else {
            Err(AccessDenied::Forbidden {
                role,
                route: route.to_string(),
            })
        }
    }
}
