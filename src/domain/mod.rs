//! Aggregates and entities of the chat domain.
//!
//! Aggregates reference each other by [`Identifier`](crate::value_objects::Identifier)
//! only, never by holding another aggregate, so each can be loaded and saved
//! on its own. Mutations happen through named operations; nothing is deleted.

mod account;
mod aggregate;
mod car;
mod conversation;
mod message;
mod person;

pub use account::Account;
pub use aggregate::{Aggregate, Entity};
pub use car::Car;
pub use conversation::Conversation;
pub use message::Message;
pub use person::Person;
