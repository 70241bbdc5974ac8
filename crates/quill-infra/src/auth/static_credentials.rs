//! Fixed username/password pair.

use quill_core::ports::{AuthError, CredentialVerifier, Credentials};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password123";

/// Verifier comparing against one configured pair, byte for byte.
pub struct StaticCredentialVerifier {
    expected: Credentials,
}

impl StaticCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            expected: Credentials::new(username, password),
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError> {
        Ok(credentials.username.as_bytes() == self.expected.username.as_bytes()
            && credentials.password.as_bytes() == self.expected.password.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_matches() {
        let verifier = StaticCredentialVerifier::default();
        assert!(
            verifier
                .verify(&Credentials::new("admin", "password123"))
                .unwrap()
        );
    }

    #[test]
    fn test_mismatch_is_not_an_error() {
        let verifier = StaticCredentialVerifier::default();
        for (user, pass) in [
            ("admin", "wrong"),
            ("root", "password123"),
            ("Admin", "password123"),
            ("admin", "password123 "),
            ("", ""),
        ] {
            assert!(!verifier.verify(&Credentials::new(user, pass)).unwrap());
        }
    }
}
