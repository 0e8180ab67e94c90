//! Password hashing and verification using bcrypt.
//!
//! Hashes are salted per call, so two hashes of the same password never
//! compare equal as strings. Verification is constant-time within bcrypt.

use stonegate_core::error::CoreError;

/// Work factor for new hashes. Raising it only affects newly stored hashes;
/// existing ones keep the cost they were created with.
const BCRYPT_COST: u32 = 10;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, CoreError> {
    bcrypt::hash(plain, BCRYPT_COST)
        .map_err(|e| CoreError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on mismatch; errors only on a malformed hash.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, CoreError> {
    bcrypt::verify(plain, hash)
        .map_err(|e| CoreError::Internal(format!("password verification failed: {e}")))
}

/// Enforce the password policy for new passwords.
pub fn validate_password_strength(plain: &str) -> Result<(), CoreError> {
    if plain.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_password_strength("short").is_err());
        assert!(validate_password_strength("long enough").is_ok());
    }
}
