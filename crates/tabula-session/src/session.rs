//! Session context passed explicitly to views.

use serde::{Deserialize, Serialize};

/// A user role, compared case-insensitively.
///
/// Roles are open-ended strings because the catalog that consumes them is
/// configuration, not code; the backend remains the authority on what a
/// role may actually do.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Role(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq<str> for Role {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::new(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The signed-in user's context, owned by the application shell and handed
/// to each view instead of being read from ambient storage.
///
/// Holding a token here only scopes UI; it grants nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for the backend, if signed in.
    pub token: Option<String>,
    /// The role the backend reported at sign-in.
    pub role: Role,
    /// Display name for the account menu.
    pub display_name: String,
}

impl Session {
    /// A signed-in session.
    pub fn signed_in(
        token: impl Into<String>,
        role: impl Into<Role>,
        display_name: impl Into<String>,
    ) -> Self {
        Session {
            token: Some(token.into()),
            role: role.into(),
            display_name: display_name.into(),
        }
    }

    /// The anonymous session used before sign-in.
    pub fn anonymous() -> Self {
        Session {
            token: None,
            role: Role::new("guest"),
            display_name: String::new(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_compare_case_insensitively() {
        assert_eq!(Role::new("Admin"), Role::new("admin"));
        assert_eq!(Role::new("ADMIN"), *"admin");
        assert_ne!(Role::new("admin"), Role::new("manager"));
    }

    #[test]
    fn anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_signed_in());
        assert_eq!(session.role, *"guest");
    }

    #[test]
    fn signed_in_session() {
        let session = Session::signed_in("tok-123", "manager", "Dana");
        assert!(session.is_signed_in());
        assert_eq!(session.role.as_str(), "manager");
    }
}
