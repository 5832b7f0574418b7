//! Conversation aggregate: members plus the ordered messages they exchanged.

use crate::domain::{Aggregate, Message};
use crate::value_objects::{Identifier, MessageContent};

/// A chat conversation.
///
/// Owns its [`Message`] entities and an ordered list of member account
/// identifiers. Both collections only grow. Adding the same member twice is
/// not prevented here; callers that need uniqueness check
/// [`Conversation::has_member`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    id: Identifier,
    members: Vec<Identifier>,
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation between the given members, with no messages.
    pub fn start(members: Vec<Identifier>) -> Self {
        Self {
            id: Identifier::generate(),
            members,
            messages: Vec::new(),
        }
    }

    pub fn members(&self) -> &[Identifier] {
        &self.members
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn has_member(&self, account_id: &Identifier) -> bool {
        self.members.contains(account_id)
    }

    /// Append a member identifier.
    pub fn add_member(&mut self, account_id: Identifier) {
        self.members.push(account_id);
    }

    /// Append a new message and return it.
    ///
    /// The message gets its own generated identifier and the current time.
    pub fn publish_message(&mut self, author_id: Identifier, content: MessageContent) -> &Message {
        self.messages.push(Message::new(author_id, content));
        &self.messages[self.messages.len() - 1]
    }
}

impl Aggregate for Conversation {
    const KIND: &'static str = "Conversation";

    fn id(&self) -> &Identifier {
        &self.id
    }
}
