//! DisplayName value object for people and accounts.

use crate::error::{ValidationError, ValidationResult};

/// Maximum number of characters in a display name.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 50;

/// A human-readable name.
///
/// ## Validation Rules
///
/// - Must contain at least one non-whitespace character
/// - At most [`MAX_DISPLAY_NAME_LENGTH`] characters
///
/// The stored value is kept exactly as given; use
/// [`DisplayName::capitalized`] for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

crate::impl_string_value_object!(DisplayName, kind: "displayName", validate: validate_display_name);

impl DisplayName {
    /// The name with its first character upper-cased.
    ///
    /// ```rust
    /// use chat_domain::value_objects::DisplayName;
    ///
    /// assert_eq!(DisplayName::new("ann").unwrap().capitalized(), "Ann");
    /// assert_eq!(DisplayName::new("émile").unwrap().capitalized(), "Émile");
    /// ```
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

fn validate_display_name(value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty {
            kind: "displayName",
        });
    }
    let length = value.chars().count();
    if length > MAX_DISPLAY_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            kind: "displayName",
            max: MAX_DISPLAY_NAME_LENGTH,
            actual: length,
        });
    }
    Ok(())
}
