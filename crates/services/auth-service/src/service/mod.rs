//! Credential verification logic.

mod provider;
mod verifier;

pub use provider::CredentialsProvider;
pub use verifier::{CredentialVerifier, Verification};
