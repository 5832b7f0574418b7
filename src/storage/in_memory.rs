//! In-memory store implementation.
//!
//! Backed by a `HashMap` from identity string to aggregate, behind a tokio
//! `RwLock` so one instance can be cloned into every consumer.
//!
//! # Performance Characteristics
//!
//! * SAVE/LOAD: O(1) average case plus one clone of the aggregate
//! * ALL and every query helper: O(n), cloning each aggregate

use crate::domain::Aggregate;
use crate::storage::Store;
use crate::value_objects::Identifier;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-scoped store for one aggregate kind.
///
/// Clones share the same underlying map, so create one per aggregate kind at
/// startup and hand clones to whatever needs it.
#[derive(Debug)]
pub struct InMemoryStore<A> {
    // Structure: identity -> aggregate
    data: Arc<RwLock<HashMap<String, A>>>,
}

/// Snapshot of what a store currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub aggregate_kind: &'static str,
    pub total: usize,
}

impl<A: Aggregate> InMemoryStore<A> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored aggregates.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }

    /// Drop every stored aggregate (useful for testing).
    pub async fn clear(&self) {
        self.data.write().await.clear();
    }

    pub async fn stats(&self) -> StoreStats {
        StoreStats {
            aggregate_kind: A::KIND,
            total: self.len().await,
        }
    }

    /// Every stored aggregate matching `predicate`, in unspecified order.
    pub async fn find_all<P>(&self, predicate: P) -> Vec<A>
    where
        P: Fn(&A) -> bool,
    {
        let data_guard = self.data.read().await;
        data_guard
            .values()
            .filter(|aggregate| predicate(aggregate))
            .cloned()
            .collect()
    }
}

impl<A> Clone for InMemoryStore<A> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<A: Aggregate> Default for InMemoryStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Aggregate> Store<A> for InMemoryStore<A> {
    async fn save(&self, aggregate: A) -> A {
        let mut data_guard = self.data.write().await;
        data_guard.insert(aggregate.identity(), aggregate.clone());
        aggregate
    }

    async fn load(&self, id: &Identifier) -> Option<A> {
        let data_guard = self.data.read().await;
        data_guard.get(id.as_str()).cloned()
    }

    async fn all(&self) -> Vec<A> {
        let data_guard = self.data.read().await;
        data_guard.values().cloned().collect()
    }

    async fn exists(&self, id: &Identifier) -> bool {
        self.data.read().await.contains_key(id.as_str())
    }
}
