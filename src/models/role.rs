//! Dashboard roles and the capabilities they grant.
//!
//! Every role-dependent decision goes through [`Role::can`], which reads a
//! single lookup table.

use serde::{Deserialize, Serialize};

/// The role of a dashboard viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full access.
    Admin,
    /// Runs a team and sees its dashboard and payroll totals.
    Manager,
    /// Sees only their own records.
    Employee,
}

/// Something a viewer may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// See every employee's clock summary.
    ViewTeamDashboard,
    /// See pay-period hour totals for everyone.
    ViewPayroll,
}

const ROLE_CAPABILITIES: &[(Role, &[Capability])] = &[
    (
        Role::Admin,
        &[Capability::ViewTeamDashboard, Capability::ViewPayroll],
    ),
    (
        Role::Manager,
        &[Capability::ViewTeamDashboard, Capability::ViewPayroll],
    ),
    (Role::Employee, &[]),
];

impl Role {
    /// Returns the capabilities granted to this role.
    pub fn capabilities(self) -> &'static [Capability] {
        ROLE_CAPABILITIES
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, capabilities)| *capabilities)
            .unwrap_or(&[])
    }

    /// Returns true if this role grants `capability`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_clock::models::{Capability, Role};
    ///
    /// assert!(Role::Manager.can(Capability::ViewTeamDashboard));
    /// assert!(!Role::Employee.can(Capability::ViewTeamDashboard));
    /// ```
    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Manager => write!(f, "MANAGER"),
            Role::Employee => write!(f, "EMPLOYEE"),
        }
    }
}
