//! Capability traits for aggregates and the entities they own.

use crate::value_objects::Identifier;
use std::fmt::Debug;

/// An aggregate root: the unit a [`crate::storage::Store`] loads and saves.
///
/// Anything with a stable identifier qualifies. The identifier is fixed at
/// construction; no implementor exposes a way to change it.
pub trait Aggregate: Debug + Clone + Send + Sync + 'static {
    /// Aggregate kind, used in not-found and integrity errors.
    const KIND: &'static str;

    /// The aggregate's identifier.
    fn id(&self) -> &Identifier;

    /// The identity as a plain string, used as the storage key.
    fn identity(&self) -> String {
        self.id().as_str().to_string()
    }
}

/// An entity owned by exactly one aggregate.
///
/// Entities have identity but no persistence of their own; they are saved
/// and loaded as part of their aggregate.
pub trait Entity: Debug + Clone {
    fn id(&self) -> &Identifier;
}
