//! MessageContent value object.

use crate::error::{ValidationError, ValidationResult};

/// Maximum number of characters in a chat message.
pub const MAX_MESSAGE_LENGTH: usize = 100;

/// The text of a chat message, at most [`MAX_MESSAGE_LENGTH`] characters.
///
/// Length counts Unicode scalar values, not bytes. An empty message is
/// allowed.
///
/// ```rust
/// use chat_domain::value_objects::MessageContent;
///
/// assert!(MessageContent::new("x".repeat(100)).is_ok());
/// assert!(MessageContent::new("x".repeat(101)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageContent(String);

crate::impl_string_value_object!(MessageContent, kind: "messageContent", validate: validate_content);

impl MessageContent {
    /// Number of characters in the message.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn validate_content(value: &str) -> ValidationResult<()> {
    let length = value.chars().count();
    if length > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::TooLong {
            kind: "messageContent",
            max: MAX_MESSAGE_LENGTH,
            actual: length,
        });
    }
    Ok(())
}
