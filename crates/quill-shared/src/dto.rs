//! Data Transfer Objects - request types for the API.
//!
//! Fields are optional on the wire so a missing field reaches validation
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Request to login.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Read a login body without rejecting it.
    ///
    /// Anything that is not a JSON object with string fields yields `None`
    /// for the unusable fields, so a bad payload is just a mismatch.
    pub fn from_slice(body: &[u8]) -> Self {
        let payload: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();
        let field = |name: &str| {
            payload
                .get(name)
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        };

        Self {
            username: field("username"),
            password: field("password"),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title":"Hi"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Hi"));
        assert!(req.content.is_none());
        assert!(req.author.is_none());

        let login: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(login.username.is_none());
        assert!(login.password.is_none());
    }

    #[test]
    fn test_login_from_slice_tolerates_bad_shapes() {
        let login = LoginRequest::from_slice(br#"{"username":"admin","password":"password123"}"#);
        assert_eq!(login.username.as_deref(), Some("admin"));
        assert_eq!(login.password.as_deref(), Some("password123"));

        let login = LoginRequest::from_slice(br#"{"username":123,"password":"password123"}"#);
        assert!(login.username.is_none());
        assert_eq!(login.password.as_deref(), Some("password123"));

        for body in [&b""[..], &b"not json"[..], &b"[1,2]"[..], &b"null"[..]] {
            let login = LoginRequest::from_slice(body);
            assert!(login.username.is_none());
            assert!(login.password.is_none());
        }
    }
}
