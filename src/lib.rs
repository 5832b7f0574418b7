//! Domain layer for a small GraphQL chat API.
//!
//! Provides validated value objects, aggregates that reference each other by
//! identifier, async in-memory stores, and the service operations a GraphQL
//! resolver layer calls into.
//!
//! # Core Components
//!
//! - [`ValueObject`] - Validated wrapper around a single primitive
//! - [`Aggregate`] - Root entity with its own identity, loaded and saved whole
//! - [`Store`] - Keyed container for one aggregate kind
//! - [`ChatService`] / [`PeopleService`] - Resolver-facing operations
//!
//! # Quick Start
//!
//! ```rust
//! use chat_domain::ServiceBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let services = ServiceBuilder::new().build().await?;
//! services.chat.sign_up("a@b.com", "pw", "Ann").await?;
//!
//! let session = services.chat.sign_in("a@b.com", "pw").await?;
//! assert_eq!(session.token, "pw");
//! assert!(services.chat.sign_in("a@b.com", "wrong").await.is_err());
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod service;
pub mod storage;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use domain::{Account, Aggregate, Car, Conversation, Entity, Message, Person};
pub use error::{
    AuthenticationError, BuildError, DomainError, DomainResult, NotFoundError,
    ReferentialIntegrityError, ValidationError, ValidationResult,
};
pub use service::{ChatService, PeopleService, ServiceBuilder, ServiceConfig, Services};
pub use storage::{InMemoryStore, Store};
pub use value_objects::{
    CarModel, DisplayName, Email, Identifier, MessageContent, Password, Token, ValueObject,
};
