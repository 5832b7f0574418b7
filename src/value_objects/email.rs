//! Email value object.

use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@(?:[^\s@.]+\.)+[A-Za-z]{2,}$").expect("email pattern is a valid regex")
});

/// A syntactically valid email address of the form `local@domain.tld`.
///
/// Only the shape is checked: a non-empty local part, an `@`, one or more
/// dot-terminated domain labels and an alphabetic top-level domain of at least
/// two letters. Whitespace anywhere is rejected rather than trimmed.
///
/// ```rust
/// use chat_domain::value_objects::Email;
///
/// assert!(Email::new("a@b.com").is_ok());
/// assert!(Email::new("a.b.com").is_err());
/// assert!(Email::new("a@bcom").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

crate::impl_string_value_object!(Email, kind: "email", validate: validate_email);

fn validate_email(value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Empty { kind: "email" });
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::invalid_format("email", value));
    }
    Ok(())
}
