//! Password value object - hashing and verification.
//!
//! New hashes are always Argon2 (PHC string format). Stored bcrypt hashes
//! are still accepted for verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::{ARGON2_HASH_PREFIX, BCRYPT_HASH_PREFIXES, MIN_PASSWORD_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Hash algorithm family recognised from a stored hash string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    Argon2,
    Bcrypt,
}

impl HashScheme {
    /// Detect the scheme from the hash prefix. Returns `None` for anything
    /// that is not a recognised format.
    pub fn detect(hash: &str) -> Option<Self> {
        if hash.starts_with(ARGON2_HASH_PREFIX) {
            Some(HashScheme::Argon2)
        } else if BCRYPT_HASH_PREFIXES.iter().any(|p| hash.starts_with(p)) {
            Some(HashScheme::Bcrypt)
        } else {
            None
        }
    }
}

/// Password value object holding a one-way hash.
///
/// Compared by value; never holds the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with Argon2.
    ///
    /// # Errors
    /// Returns a validation error if the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`] UTF-16 code units.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if (plain_text.encode_utf16().count() as u64) < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Wrap an existing hash (from the database).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Scheme of the wrapped hash, if recognised.
    pub fn scheme(&self) -> Option<HashScheme> {
        HashScheme::detect(&self.hash)
    }

    /// Verify a plaintext password against this hash.
    ///
    /// Malformed or unrecognised hashes never match.
    pub fn verify(&self, plain_text: &str) -> bool {
        match self.scheme() {
            Some(HashScheme::Argon2) => Self::verify_argon2(plain_text, &self.hash).unwrap_or(false),
            Some(HashScheme::Bcrypt) => bcrypt::verify(plain_text, &self.hash).unwrap_or(false),
            None => false,
        }
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_argon2(plain_text: &str, hash: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| DomainError::password(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("correctpw").unwrap();

        assert_eq!(password.scheme(), Some(HashScheme::Argon2));
        assert!(password.verify("correctpw"));
        assert!(!password.verify("wrongpw"));
    }

    #[test]
    fn test_password_from_hash() {
        let hash = Password::new("TestPassword123").unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("TestPassword123"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let pass1 = Password::new("SamePassword").unwrap();
        let pass2 = Password::new("SamePassword").unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify("SamePassword"));
        assert!(pass2.verify("SamePassword"));
    }

    #[test]
    fn test_password_too_short() {
        assert!(matches!(
            Password::new("short"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        let password = Password::new("😀😀😀").unwrap();
        assert!(password.verify("😀😀😀"));
        assert!(Password::new("😀😀").is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(Password::new("123456").is_ok());
    }

    #[test]
    fn test_bcrypt_hash_verifies() {
        let hash = bcrypt::hash("correctpw", 4).unwrap();
        let password = Password::from_hash(hash);

        assert_eq!(password.scheme(), Some(HashScheme::Bcrypt));
        assert!(password.verify("correctpw"));
        assert!(!password.verify("wrongpw"));
    }

    #[test]
    fn test_unknown_or_malformed_hash_never_matches() {
        assert!(!Password::from_hash("correctpw").verify("correctpw"));
        assert!(!Password::from_hash("").verify(""));
        assert!(!Password::from_hash("$argon2id$garbage").verify("correctpw"));
        assert!(!Password::from_hash("$2b$garbage").verify("correctpw"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::from_hash("$argon2id$secret");
        assert!(!format!("{:?}", password).contains("secret"));
    }
}
