//! Login credentials and their declared shape.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Local part, `@`, then dot-separated labels ending in an alphabetic TLD.
static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").ok()
});

/// Email/password pair submitted by a login attempt.
///
/// Only constructed through [`Credentials::parse`], so a value of this type
/// always satisfies the shape constraints.
#[derive(Clone, Deserialize, Validate)]
pub struct Credentials {
    #[validate(custom(function = "validate_email", message = "Invalid email format"))]
    email: String,
    #[validate(custom(
        function = "validate_password_length",
        message = "Password must be at least 6 characters"
    ))]
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Parse an untyped payload into credentials.
    ///
    /// The payload must be a JSON object; unknown keys are ignored. Missing
    /// keys, non-string values, an invalid email or a short password all
    /// fail with a validation error carrying the first violation.
    pub fn parse(raw: &Value) -> DomainResult<Self> {
        if !raw.is_object() {
            return Err(DomainError::validation("Credentials must be an object"));
        }

        let credentials = Credentials::deserialize(raw)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        credentials.validate().map_err(|e| {
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            DomainError::validation(message)
        })?;

        Ok(credentials)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Split into owned email and password.
    pub fn into_parts(self) -> (String, String) {
        (self.email, self.password)
    }
}

/// No leading dot and no consecutive dots, on top of [`EMAIL_REGEX`].
fn validate_email(email: &str) -> Result<(), ValidationError> {
    let well_formed = EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(email));
    if email.starts_with('.') || email.contains("..") || !well_formed {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}

/// Length is counted in UTF-16 code units, as browsers count it.
fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if (password.encode_utf16().count() as u64) < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_valid_credentials() {
        let credentials =
            Credentials::parse(&json!({ "email": "u@x.com", "password": "correctpw" })).unwrap();

        assert_eq!(credentials.email(), "u@x.com");
        assert_eq!(credentials.password(), "correctpw");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let raw = json!({
            "email": "u@x.com",
            "password": "correctpw",
            "callbackUrl": "/dashboard",
        });

        assert!(Credentials::parse(&raw).is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let result = Credentials::parse(&json!({ "email": "a@b.com", "password": "short" }));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_password_length_boundary_matches_constant() {
        let exact = "x".repeat(MIN_PASSWORD_LENGTH as usize);
        let below = "x".repeat(MIN_PASSWORD_LENGTH as usize - 1);

        assert!(Credentials::parse(&json!({ "email": "a@b.com", "password": exact })).is_ok());
        assert!(Credentials::parse(&json!({ "email": "a@b.com", "password": below })).is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let result =
            Credentials::parse(&json!({ "email": "not-an-email", "password": "longenough" }));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_email_requires_dotted_domain() {
        for email in ["u@x", "u@localhost", "a@[127.0.0.1]", ".u@x.com", "u..v@x.com", "u@x.c"] {
            let result = Credentials::parse(&json!({ "email": email, "password": "longenough" }));
            assert!(matches!(result, Err(DomainError::Validation(_))), "accepted {}", email);
        }

        for email in ["u@x.com", "first.last+tag@mail.example.org", "o'neil@x.io"] {
            let result = Credentials::parse(&json!({ "email": email, "password": "longenough" }));
            assert!(result.is_ok(), "rejected {}", email);
        }
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Each emoji is a surrogate pair: three of them count as six
        let accepted = Credentials::parse(&json!({ "email": "a@b.com", "password": "😀😀😀" }));
        assert!(accepted.is_ok());

        let rejected = Credentials::parse(&json!({ "email": "a@b.com", "password": "😀😀" }));
        assert!(matches!(rejected, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_array_payload_rejected() {
        let result = Credentials::parse(&json!(["u@x.com", "correctpw"]));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_malformed_payloads_rejected() {
        let payloads = [
            json!({}),
            json!({ "email": "u@x.com" }),
            json!({ "password": "correctpw" }),
            json!({ "email": 42, "password": "correctpw" }),
            json!({ "email": "u@x.com", "password": null }),
            json!(["u@x.com", "correctpw"]),
            json!("u@x.com"),
            Value::Null,
        ];

        for raw in payloads {
            assert!(Credentials::parse(&raw).is_err(), "accepted {}", raw);
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials =
            Credentials::parse(&json!({ "email": "u@x.com", "password": "correctpw" })).unwrap();

        assert!(!format!("{:?}", credentials).contains("correctpw"));
    }
}
