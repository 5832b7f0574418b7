//! Read-only query helpers for specific aggregate stores.
//!
//! Each helper is a linear scan over [`Store::all`] with a predicate, which
//! is fine for a demo-sized store. A store that grows would index the queried
//! field instead. The traits are blanket-implemented, so any `Store` of the
//! right aggregate gets them.

use crate::domain::{Account, Aggregate, Car, Conversation, Person};
use crate::error::ReferentialIntegrityError;
use crate::storage::Store;
use crate::value_objects::{Email, Identifier, Token};
use std::future::Future;

/// Lookups over a store of [`Account`]s.
pub trait AccountQueries: Store<Account> {
    /// The account registered with `email`, if any.
    fn find_by_email(&self, email: &Email) -> impl Future<Output = Option<Account>> + Send {
        async move {
            self.all()
                .await
                .into_iter()
                .find(|account| account.email() == email)
        }
    }

    /// The account that issued `token`, if any.
    fn find_by_token(&self, token: &Token) -> impl Future<Output = Option<Account>> + Send {
        async move {
            self.all()
                .await
                .into_iter()
                .find(|account| account.owns_token(token))
        }
    }
}

impl<S: Store<Account>> AccountQueries for S {}

/// Lookups over a store of [`Conversation`]s.
pub trait ConversationQueries: Store<Conversation> {
    /// Every conversation `account_id` is a member of.
    fn conversations_of(
        &self,
        account_id: &Identifier,
    ) -> impl Future<Output = Vec<Conversation>> + Send {
        async move {
            self.all()
                .await
                .into_iter()
                .filter(|conversation| conversation.has_member(account_id))
                .collect()
        }
    }
}

impl<S: Store<Conversation>> ConversationQueries for S {}

/// Relation traversal over a store of [`Person`]s.
pub trait PersonQueries: Store<Person> {
    /// Load the best friend `person` points at.
    ///
    /// `Ok(None)` when no best friend is set. A set reference that does not
    /// resolve is broken stored data and comes back as an error.
    fn best_friend_of(
        &self,
        person: &Person,
    ) -> impl Future<Output = Result<Option<Person>, ReferentialIntegrityError>> + Send {
        async move {
            let Some(friend_id) = person.best_friend_id() else {
                return Ok(None);
            };
            match self.load(friend_id).await {
                Some(friend) => Ok(Some(friend)),
                None => Err(ReferentialIntegrityError::new(
                    "bestFriend",
                    person.identity(),
                    Person::KIND,
                    friend_id.as_str(),
                )),
            }
        }
    }

    /// Everyone who named `person_id` as their best friend.
    fn admirers_of(&self, person_id: &Identifier) -> impl Future<Output = Vec<Person>> + Send {
        async move {
            self.all()
                .await
                .into_iter()
                .filter(|person| person.best_friend_id() == Some(person_id))
                .collect()
        }
    }
}

impl<S: Store<Person>> PersonQueries for S {}

/// Lookups over a store of [`Car`]s.
pub trait CarQueries: Store<Car> {
    /// Every car owned by `owner_id`.
    fn cars_owned_by(&self, owner_id: &Identifier) -> impl Future<Output = Vec<Car>> + Send {
        async move {
            self.all()
                .await
                .into_iter()
                .filter(|car| car.is_owned_by(owner_id))
                .collect()
        }
    }
}

impl<S: Store<Car>> CarQueries for S {}
