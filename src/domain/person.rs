//! Person aggregate with a one-directional best-friend reference.

use crate::domain::Aggregate;
use crate::value_objects::{DisplayName, Identifier};

/// A person in the social graph.
///
/// The best friend is stored as an identifier. Nothing keeps the relation
/// symmetric: Ann naming Bob does not make Bob name Ann.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: Identifier,
    name: DisplayName,
    best_friend: Option<Identifier>,
}

impl Person {
    pub fn new(name: DisplayName) -> Self {
        Self::restore(Identifier::generate(), name, None)
    }

    /// Rebuild a person whose identifier is already known.
    pub fn restore(id: Identifier, name: DisplayName, best_friend: Option<Identifier>) -> Self {
        Self {
            id,
            name,
            best_friend,
        }
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn best_friend_id(&self) -> Option<&Identifier> {
        self.best_friend.as_ref()
    }

    pub fn set_best_friend(&mut self, friend_id: Identifier) {
        self.best_friend = Some(friend_id);
    }

    pub fn clear_best_friend(&mut self) {
        self.best_friend = None;
    }

    pub fn rename(&mut self, name: DisplayName) {
        self.name = name;
    }
}

impl Aggregate for Person {
    const KIND: &'static str = "Person";

    fn id(&self) -> &Identifier {
        &self.id
    }
}
