//! Session token value object.

use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::Password;

/// An opaque session token.
///
/// Tokens handed out by [`crate::domain::Account::authenticate`] are the
/// account's password re-wrapped, so the same password always yields the
/// same token. Expiry is left to whatever transport carries the token.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

crate::impl_string_value_object!(Token, kind: "token", validate: validate_token);

impl Token {
    /// Derive the token for a password.
    pub fn from_password(password: &Password) -> Self {
        Self(password.as_str().to_string())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&"[REDACTED]").finish()
    }
}

fn validate_token(value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Empty { kind: "token" });
    }
    Ok(())
}
