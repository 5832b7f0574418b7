//! Message entity, owned by a [`crate::domain::Conversation`].

use crate::domain::Entity;
use crate::value_objects::{Identifier, MessageContent};
use chrono::{DateTime, Utc};

/// One message in a conversation.
///
/// The author is referenced by account identifier only.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: Identifier,
    author_id: Identifier,
    content: MessageContent,
    published_at: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(author_id: Identifier, content: MessageContent) -> Self {
        Self {
            id: Identifier::generate(),
            author_id,
            content,
            published_at: Utc::now(),
        }
    }

    pub fn author_id(&self) -> &Identifier {
        &self.author_id
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}

impl Entity for Message {
    fn id(&self) -> &Identifier {
        &self.id
    }
}
