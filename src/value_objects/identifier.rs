//! Identifier value object for aggregate and entity identity.
//!
//! Identifiers are opaque strings. Fresh ones are random UUID v4 strings.

use crate::error::{ValidationError, ValidationResult};

/// An opaque, non-empty identity string.
///
/// ## Examples
///
/// ```rust
/// use chat_domain::value_objects::Identifier;
///
/// let generated = Identifier::generate();
/// assert!(!generated.as_str().is_empty());
///
/// let known = Identifier::new("user-1").unwrap();
/// assert_eq!(known.to_string(), "user-1");
/// assert!(Identifier::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

crate::impl_string_value_object!(Identifier, kind: "identifier", validate: validate_identifier);

impl Identifier {
    /// Generate a fresh identifier.
    ///
    /// Collisions are as unlikely as for any random v4 UUID; nothing checks
    /// for them.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

fn validate_identifier(value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { kind: "identifier" });
    }
    Ok(())
}
