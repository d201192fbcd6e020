//! Password hashing and the account password policy.
//!
//! Registrar accounts are provisioned by an administrator, so new passwords
//! only ever arrive through the admin user-management endpoints (account
//! creation and reset); [`validate_new_password`] gates both. Hashes are
//! Argon2id in PHC string format, so the parameters and salt travel with
//! the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a plaintext password against a stored PHC-format hash.
///
/// A mismatch is `Ok(false)`; `Err` is reserved for malformed hashes.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check a candidate password against the account policy: at least
/// [`MIN_PASSWORD_LENGTH`] characters, containing at least one letter
/// and one digit.
///
/// Returns the rejection reason, phrased for the admin filling in the
/// user form.
pub fn validate_new_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter".into());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("Registrar2026").expect("hashing should succeed");
        assert!(
            hash.starts_with("$argon2id$"),
            "expected an argon2id PHC string"
        );

        assert!(verify_password("Registrar2026", &hash).expect("verify should succeed"));
        assert!(!verify_password("Registrar2027", &hash).expect("verify should succeed"));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let first = hash_password("Registrar2026").expect("hashing should succeed");
        let second = hash_password("Registrar2026").expect("hashing should succeed");
        assert_ne!(first, second, "each hash must get its own salt");
    }

    #[test]
    fn policy_rejects_short_passwords() {
        let msg = validate_new_password("ab1").expect_err("short password must be rejected");
        assert!(
            msg.contains("at least 8 characters"),
            "rejection should state the minimum length"
        );
    }

    #[test]
    fn policy_requires_a_letter_and_a_digit() {
        assert!(validate_new_password("24601-24601").is_err());
        assert!(validate_new_password("justletters").is_err());
        assert!(validate_new_password("letters4days").is_ok());
    }

    #[test]
    fn policy_counts_characters_not_bytes() {
        // Multibyte characters still count toward the length minimum.
        assert!(validate_new_password("päss1wörd").is_ok());
    }
}
