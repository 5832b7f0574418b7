//! Message feed backing chat subscriptions.
//!
//! Every published message is broadcast to all live subscriptions; a
//! subscription can be narrowed to one conversation.

use crate::service::projection::MessageView;
use log::{debug, warn};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// Event emitted when a message is published to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePublished {
    pub conversation_id: String,
    pub message: MessageView,
}

/// Fan-out channel for [`MessagePublished`] events.
#[derive(Debug, Clone)]
pub struct MessageFeed {
    sender: broadcast::Sender<MessagePublished>,
}

impl MessageFeed {
    /// Create a feed buffering at most `capacity` events per subscriber.
    ///
    /// `capacity` must be between 1 and [`crate::service::MAX_FEED_CAPACITY`];
    /// [`crate::service::ServiceBuilder`] checks this before constructing the feed.
    pub(crate) fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Broadcast an event and return how many subscriptions received it.
    pub fn publish(&self, event: MessagePublished) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!("No subscribers for published message");
                0
            }
        }
    }

    /// Subscribe to every conversation.
    pub fn subscribe(&self) -> MessageSubscription {
        MessageSubscription {
            receiver: self.sender.subscribe(),
            conversation_id: None,
        }
    }

    /// Subscribe to messages of a single conversation.
    pub fn subscribe_to(&self, conversation_id: impl Into<String>) -> MessageSubscription {
        MessageSubscription {
            receiver: self.sender.subscribe(),
            conversation_id: Some(conversation_id.into()),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A live subscription to the feed.
///
/// Only events published after the subscription was created are seen.
#[derive(Debug)]
pub struct MessageSubscription {
    receiver: broadcast::Receiver<MessagePublished>,
    conversation_id: Option<String>,
}

impl MessageSubscription {
    /// Wait for the next matching event.
    ///
    /// Returns `None` once the feed has been dropped. A subscriber that falls
    /// behind by more than the feed capacity skips the overwritten events.
    pub async fn next(&mut self) -> Option<MessagePublished> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.matches(&event) => return Some(event),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Message subscription lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next matching event that is already buffered, without waiting.
    pub fn try_next(&mut self) -> Option<MessagePublished> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.matches(&event) => return Some(event),
                Ok(_) => continue,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Message subscription lagged, skipped {} events", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    fn matches(&self, event: &MessagePublished) -> bool {
        self.conversation_id
            .as_ref()
            .is_none_or(|id| *id == event.conversation_id)
    }
}
