//! Plain, serializable views of aggregates.
//!
//! These are what the resolver layer hands to the transport. They carry
//! strings rather than value objects and never include credentials.

use crate::domain::{Account, Aggregate, Car, Conversation, Entity, Message, Person};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public view of an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub account: AccountView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub id: String,
    pub members: Vec<String>,
    pub messages: Vec<MessageView>,
}

/// Public view of a [`Person`]; the name is capitalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    pub id: String,
    pub name: String,
    pub best_friend_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarView {
    pub id: String,
    pub model: String,
    pub owner_id: String,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.identity(),
            email: account.email().to_string(),
            name: account.name().to_string(),
        }
    }
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            author_id: message.author_id().to_string(),
            content: message.content().to_string(),
            published_at: message.published_at(),
        }
    }
}

impl From<&Conversation> for ConversationView {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.identity(),
            members: conversation
                .members()
                .iter()
                .map(ToString::to_string)
                .collect(),
            messages: conversation.messages().iter().map(MessageView::from).collect(),
        }
    }
}

impl From<&Person> for PersonView {
    fn from(person: &Person) -> Self {
        Self {
            id: person.identity(),
            name: person.name().capitalized(),
            best_friend_id: person.best_friend_id().map(ToString::to_string),
        }
    }
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        Self {
            id: car.identity(),
            model: car.model().to_string(),
            owner_id: car.owner_id().to_string(),
        }
    }
}
