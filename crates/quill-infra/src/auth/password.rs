//! Argon2 password verification.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use quill_core::ports::{AuthError, CredentialVerifier, Credentials};

/// Verifier checking the password against an Argon2 PHC hash string.
pub struct Argon2CredentialVerifier {
    argon2: Argon2<'static>,
    username: String,
    password_hash: String,
}

impl Argon2CredentialVerifier {
    /// Fails if `password_hash` is not a valid PHC string.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::default(),
            username: username.into(),
            password_hash,
        })
    }
}

impl CredentialVerifier for Argon2CredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError> {
        if credentials.username != self.username {
            return Ok(false);
        }

        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(credentials.password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_against_hash() {
        let verifier = Argon2CredentialVerifier::new("admin", hash("secure_password_123")).unwrap();

        assert!(
            verifier
                .verify(&Credentials::new("admin", "secure_password_123"))
                .unwrap()
        );
        assert!(
            !verifier
                .verify(&Credentials::new("admin", "wrong_password"))
                .unwrap()
        );
        assert!(
            !verifier
                .verify(&Credentials::new("other", "secure_password_123"))
                .unwrap()
        );
    }

    #[test]
    fn test_rejects_malformed_hash() {
        assert!(matches!(
            Argon2CredentialVerifier::new("admin", "not-a-phc-string"),
            Err(AuthError::HashingError(_))
        ));
    }
}
