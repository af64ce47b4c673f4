//! Viewer session context.
//!
//! A [`Session`] is an explicit value handed to the operations that depend on
//! who is looking. It changes only through [`Session::login`] and
//! [`Session::logout`].

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::role::{Capability, Role};

/// The person looking at the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// The viewer's employee record.
    pub employee_id: String,
    /// The viewer's role.
    pub role: Role,
}

/// Holds the logged-in viewer, if any.
///
/// # Example
///
/// ```
/// use shift_clock::models::{Capability, Role, Session, Viewer};
///
/// let mut session = Session::default();
/// assert!(!session.can(Capability::ViewTeamDashboard));
///
/// session.login(Viewer { employee_id: "emp_001".to_string(), role: Role::Manager });
/// assert!(session.can(Capability::ViewTeamDashboard));
///
/// session.logout();
/// assert!(session.viewer().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    viewer: Option<Viewer>,
}

impl Session {
    /// Starts a session for `viewer`, replacing any previous one.
    pub fn login(&mut self, viewer: Viewer) {
        self.viewer = Some(viewer);
    }

    /// Ends the session and returns who was logged in.
    pub fn logout(&mut self) -> Option<Viewer> {
        self.viewer.take()
    }

    /// Returns the logged-in viewer.
    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    /// Returns true if a viewer is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.viewer.is_some()
    }

    /// Returns true if the logged-in viewer holds `capability`.
    pub fn can(&self, capability: Capability) -> bool {
        self.viewer
            .as_ref()
            .is_some_and(|viewer| viewer.role.can(capability))
    }

    /// Returns the viewer if they hold `capability`, or a permission error
    /// naming `action`.
    pub fn require(&self, capability: Capability, action: &str) -> EngineResult<&Viewer> {
        match self.viewer.as_ref() {
            Some(viewer) if viewer.role.can(capability) => Ok(viewer),
            Some(viewer) => Err(EngineError::PermissionDenied {
                role: viewer.role.to_string(),
                action: action.to_string(),
            }),
            None => Err(EngineError::PermissionDenied {
                role: "anonymous".to_string(),
                action: action.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(role: Role) -> Viewer {
        Viewer {
            employee_id: "emp_001".to_string(),
            role,
        }
    }

    #[test]
    fn test_anonymous_session_is_denied() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        match session.require(Capability::ViewPayroll, "view payroll") {
            Err(EngineError::PermissionDenied { role, action }) => {
                assert_eq!(role, "anonymous");
                assert_eq!(action, "view payroll");
            }
            other => panic!("Expected PermissionDenied, got {:?}", other),
        }
    }

    #[test]
    fn test_require_returns_viewer_when_granted() {
        let mut session = Session::default();
        session.login(viewer(Role::Admin));
        let granted = session.require(Capability::ViewPayroll, "view payroll").unwrap();
        assert_eq!(granted.employee_id, "emp_001");
    }

    #[test]
    fn test_require_names_role_when_refused() {
        let mut session = Session::default();
        session.login(viewer(Role::Employee));
        match session.require(Capability::ViewPayroll, "view payroll") {
            Err(EngineError::PermissionDenied { role, .. }) => assert_eq!(role, "EMPLOYEE"),
            other => panic!("Expected PermissionDenied, got {:?}", other),
        }
    }

    #[test]
    fn test_login_replaces_and_logout_clears() {
        let mut session = Session::default();
        session.login(viewer(Role::Employee));
        session.login(viewer(Role::Manager));
        assert_eq!(session.viewer().map(|v| v.role), Some(Role::Manager));

        let previous = session.logout();
        assert_eq!(previous.map(|v| v.role), Some(Role::Manager));
        assert!(!session.is_authenticated());
        assert!(session.logout().is_none());
    }
}
