//! Password value object.
//!
//! Passwords are kept as plain strings and compared by value. This is a
//! teaching model, not a credential store: there is no hashing or salting.

use crate::error::{ValidationError, ValidationResult};

/// An opaque, non-empty password.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

crate::impl_string_value_object!(Password, kind: "password", validate: validate_password);

// Keep the raw value out of logs and panic messages.
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

fn validate_password(value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Empty { kind: "password" });
    }
    Ok(())
}
