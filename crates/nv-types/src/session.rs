use serde::{Deserialize, Serialize};

/// Client-held record of the current user's authentication token, role,
/// permissions, and identity.
///
/// A session without a token is anonymous no matter what the other fields
/// say. The whole value is replaced on login and cleared on logout; there is
/// no partial update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the backend.
    pub token: Option<String>,
    /// Role label ("CLIENT", "AGENT", ...).
    pub role: Option<String>,
    /// Permission labels, in the order the backend issued them.
    pub acls: Vec<String>,
    /// Email identifying the logged-in user.
    pub email: Option<String>,
}

impl Session {
    /// The empty, unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Exact string membership; no wildcards, no hierarchy.
    pub fn has_permission(&self, acl: &str) -> bool {
        self.acls.iter().any(|held| held == acl)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_has_nothing() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(!session.has_permission("view_property"));
        assert!(!session.has_role("AGENT"));
    }

    #[test]
    fn token_alone_authenticates() {
        let session = Session {
            token: Some("tok".into()),
            ..Session::anonymous()
        };
        assert!(session.is_authenticated());
    }

    #[test]
    fn permission_check_is_exact() {
        let session = Session {
            token: Some("tok".into()),
            acls: vec!["view_property".into()],
            ..Session::anonymous()
        };
        assert!(session.has_permission("view_property"));
        assert!(!session.has_permission("view_prop"));
        assert!(!session.has_permission("VIEW_PROPERTY"));
    }

    #[test]
    fn role_check_is_equality() {
        let session = Session {
            role: Some("AGENT".into()),
            ..Session::anonymous()
        };
        assert!(session.has_role("AGENT"));
        assert!(!session.has_role("CLIENT"));
    }
}
