//! Credential verification port.

/// A caller-supplied username and password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Verifies caller credentials against a known secret.
///
/// `Ok(false)` is a plain mismatch. `Err` is reserved for verifier faults
/// such as an unparseable stored hash.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_password() {
        let creds = Credentials::new("admin", "password123");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("password123"));
    }
}
