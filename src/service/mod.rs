//! Application layer called by the GraphQL resolvers.
//!
//! Every operation takes raw primitives as they arrive from a request,
//! validates them into value objects, runs the aggregate operation, saves
//! through the stores and returns a [`projection`] view. Failures come back as
//! [`DomainError`](crate::error::DomainError) with a stable error code.
//!
//! # Example Usage
//!
//! ```rust
//! use chat_domain::service::ServiceBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let services = ServiceBuilder::new().build().await?;
//! let chat = &services.chat;
//!
//! chat.sign_up("a@b.com", "pw", "Ann").await?;
//! let session = chat.sign_in("a@b.com", "pw").await?;
//!
//! let conversation = chat.start_conversation(&session.token, Vec::<String>::new()).await?;
//! chat.send_message(&session.token, &conversation.id, "hello").await?;
//!
//! let messages = chat.messages(&session.token, &conversation.id).await?;
//! assert_eq!(messages[0].content, "hello");
//! # Ok(())
//! # }
//! ```

mod chat;
mod config;
mod feed;
mod people;
pub mod projection;
mod seed;

pub use chat::ChatService;
pub use config::{
    InMemoryChatService, InMemoryPeopleService, MAX_FEED_CAPACITY, ServiceBuilder, ServiceConfig,
    Services,
};
pub use feed::{MessageFeed, MessagePublished, MessageSubscription};
pub use people::PeopleService;
pub use projection::{AccountView, CarView, ConversationView, MessageView, PersonView, Session};
