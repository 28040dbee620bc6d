//! Authentication payloads and the explicit session credential.
//!
//! There is no ambient auth state: a [`Session`] is created by logging in
//! (or from a stored token) and passed to every call that reaches the
//! external service.

use serde::{Deserialize, Serialize};

/// Login request payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Administrator user name.
    pub username: String,
    /// Administrator password.
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// The authenticated user as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User name.
    pub username: String,
    /// Role assigned by the service (e.g. "admin").
    pub role: String,
}

/// Token verification response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    /// The user the token belongs to.
    pub user: User,
}

/// Credential threaded through every request to the external service.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: Option<User>,
}

impl Session {
    /// Creates a session from a bearer token that has not been verified yet.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: None,
        }
    }

    /// Attaches the verified user to this session.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Returns the raw bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the verified user, if the token has been verified.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_authorization_header() {
        let session = Session::from_token("abc.def");
        assert_eq!(session.authorization(), "Bearer abc.def");
        assert_eq!(session.token(), "abc.def");
        assert!(session.user().is_none());
    }

    #[test]
    fn test_session_with_user() {
        let user = User {
            username: "admin".into(),
            role: "admin".into(),
        };
        let session = Session::from_token("t").with_user(user.clone());
        assert_eq!(session.user(), Some(&user));
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session::from_token("super-secret");
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_verify_response_deserializes() {
        let body = r#"{"user":{"username":"admin","role":"admin"}}"#;
        let parsed: VerifyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.user.username, "admin");
    }
}
