//! Argon2id password hashing in PHC string format.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::SoapboxError;

/// Default bootstrap credential: `admin` / `password` (Argon2id,
/// m=102400, t=2, p=8). An operational requirement, not enforced here:
/// rotate it before exposing the service.
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=102400,t=2,p=8$l7bMrtz82jfIJk5Uq82mGQ$1ABNbzjrDJ6WPNnhGi5UpQ";

/// Hash a plaintext with a fresh random salt.
pub fn hash(plaintext: &str) -> Result<String, SoapboxError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hashed.to_string())
}

/// Verify a plaintext against a PHC hash string. A mismatch is `Ok(false)`;
/// only a malformed stored hash is an error.
pub fn verify(plaintext: &str, phc_hash: &str) -> Result<bool, SoapboxError> {
    let parsed = PasswordHash::new(phc_hash)?;
    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hash_verifies_default_password() {
        assert!(verify("password", DEFAULT_PASSWORD_HASH).expect("verify failed"));
        assert!(!verify("not-the-password", DEFAULT_PASSWORD_HASH).expect("verify failed"));
    }

    #[test]
    fn hash_then_verify_round_trips() {
        let phc = hash("hunter2").expect("hash failed");
        assert!(phc.starts_with("$argon2id$"));
        assert!(verify("hunter2", &phc).expect("verify failed"));
        assert!(!verify("hunter3", &phc).expect("verify failed"));
    }

    #[test]
    fn fresh_salts_differ() {
        let a = hash("same").expect("hash failed");
        let b = hash("same").expect("hash failed");
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify("whatever", "not-a-phc-string").is_err());
    }
}
