//! Domain-level constants.
//!
//! These constants define the credential rules and the hash formats the
//! verifier understands.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length accepted in a login attempt
pub const MIN_PASSWORD_LENGTH: u64 = 6;

// =============================================================================
// Password Hashing
// =============================================================================

/// PHC prefix shared by every Argon2 variant
pub const ARGON2_HASH_PREFIX: &str = "$argon2";

/// Modular-crypt prefixes produced by bcrypt implementations
pub const BCRYPT_HASH_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2x$", "$2y$"];

/// Plaintext hashed once to produce the timing-equalisation hash
pub const DUMMY_PASSWORD: &str = "dummy-password-for-timing";

// =============================================================================
// Messages
// =============================================================================

/// Message reported for every rejected login attempt
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
