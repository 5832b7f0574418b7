//! Value objects for the chat domain primitives.
//!
//! Each value object wraps one primitive, enforces its invariants at
//! construction time, and compares by value. Once built it cannot change.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use chat_domain::value_objects::{Email, MessageContent, ValueObject};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let email = Email::new("ann@example.com")?;
//!     assert_eq!(email.to_primitive(), "ann@example.com");
//!
//!     let too_long = MessageContent::new("x".repeat(101));
//!     assert!(too_long.is_err());
//!     Ok(())
//! }
//! ```

mod car_model;
mod display_name;
mod email;
mod identifier;
mod message_content;
mod password;
mod token;
mod value_object_trait;

pub use car_model::CarModel;
pub use display_name::{DisplayName, MAX_DISPLAY_NAME_LENGTH};
pub use email::Email;
pub use identifier::Identifier;
pub use message_content::{MAX_MESSAGE_LENGTH, MessageContent};
pub use password::Password;
pub use token::Token;
pub use value_object_trait::{ValueObject, deserialize, serialize};
