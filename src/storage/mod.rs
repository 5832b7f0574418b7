//! Storage abstraction for aggregates.
//!
//! A [`Store`] keeps the current state of one aggregate kind, keyed by the
//! aggregate's identity. It is a stand-in for a persistence layer: state lives
//! as long as the process and is gone on restart.
//!
//! # Contract
//!
//! - `save` upserts by identity. Last write wins and it never fails.
//! - `load` returns the current instance or `None`.
//! - `all` returns every stored instance in no particular order.
//!
//! Read-modify-write on one aggregate is not atomic across callers. A backend
//! that needs that would have to add optimistic versioning or a per-aggregate
//! lock on top of this trait.
//!
//! # Example Usage
//!
//! ```rust
//! use chat_domain::domain::{Aggregate, Person};
//! use chat_domain::storage::{InMemoryStore, Store};
//! use chat_domain::value_objects::DisplayName;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::<Person>::new();
//!
//! let ann = store.save(Person::new(DisplayName::new("ann")?)).await;
//! let loaded = store.load(ann.id()).await;
//! assert_eq!(loaded, Some(ann));
//! assert_eq!(store.all().await.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod in_memory;
pub mod queries;


pub use in_memory::{InMemoryStore, StoreStats};
pub use queries::{AccountQueries, CarQueries, ConversationQueries, PersonQueries};

use crate::domain::Aggregate;
use crate::value_objects::Identifier;
use std::future::Future;

/// Keyed container for one aggregate kind.
///
/// Operations are async so a real backend can slot in behind the same
/// interface; the in-memory implementation completes without waiting on I/O.
pub trait Store<A: Aggregate>: Send + Sync {
    /// Insert or replace the aggregate under its identity and return it.
    ///
    /// After this resolves, `load` and `all` observe the new state.
    fn save(&self, aggregate: A) -> impl Future<Output = A> + Send;

    /// Current state of the aggregate with identifier `id`, if any.
    fn load(&self, id: &Identifier) -> impl Future<Output = Option<A>> + Send;

    /// Every stored aggregate, in unspecified order.
    fn all(&self) -> impl Future<Output = Vec<A>> + Send;

    /// Whether an aggregate with identifier `id` is stored.
    fn exists(&self, id: &Identifier) -> impl Future<Output = bool> + Send {
        async move { self.load(id).await.is_some() }
    }
}
