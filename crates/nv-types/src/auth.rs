use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Role labels issued by the backend.
pub const ROLE_CLIENT: &str = "CLIENT";
pub const ROLE_AGENT: &str = "AGENT";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Login payload submitted to the authentication endpoint.
pub struct LoginRequest {
    /// Email submitted by the client.
    pub email: String,
    /// Plaintext password submitted by the client.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Successful login response; composed into a [`Session`] by the caller.
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Role label granted to the user.
    pub role: String,
    /// Permission labels granted to the user.
    pub acls: Vec<String>,
    /// Email the account is registered under.
    pub email: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session {
            token: Some(response.token),
            role: Some(response.role),
            acls: response.acls,
            email: Some(response.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_becomes_authenticated_session() {
        let session: Session = LoginResponse {
            token: "tok".into(),
            role: ROLE_AGENT.into(),
            acls: vec!["view_property".into(), "edit_property".into()],
            email: "agent@example.com".into(),
        }
        .into();

        assert!(session.is_authenticated());
        assert!(session.has_role(ROLE_AGENT));
        assert_eq!(session.acls, vec!["view_property", "edit_property"]);
        assert_eq!(session.email.as_deref(), Some("agent@example.com"));
    }
}
