//! Service configuration and the builder that assembles the services.

use crate::error::{BuildError, BuildResult};
use crate::service::seed::seed_demo_data;
use crate::service::{ChatService, MessageFeed, PeopleService};
use crate::storage::InMemoryStore;
use log::info;
use serde::Deserialize;

/// Largest accepted [`ServiceConfig::feed_capacity`]. The feed allocates its
/// buffer up front.
pub const MAX_FEED_CAPACITY: usize = 65_536;

/// Tunables for the chat and people services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Events buffered per subscription before a slow subscriber starts
    /// skipping messages. Must be between 1 and [`MAX_FEED_CAPACITY`].
    pub feed_capacity: usize,

    /// Upper bound on members in one conversation, the creator included.
    pub max_members_per_conversation: usize,

    /// Insert the demo accounts, people and cars at build time.
    pub seed_demo_data: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            feed_capacity: 100,
            max_members_per_conversation: 50,
            seed_demo_data: false,
        }
    }
}

impl ServiceConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> BuildResult<()> {
        if self.feed_capacity == 0 {
            return Err(BuildError::InvalidConfiguration {
                message: "feedCapacity must be greater than zero".to_string(),
            });
        }
        if self.feed_capacity > MAX_FEED_CAPACITY {
            return Err(BuildError::InvalidConfiguration {
                message: format!(
                    "feedCapacity must be at most {}, got {}",
                    MAX_FEED_CAPACITY, self.feed_capacity
                ),
            });
        }
        if self.max_members_per_conversation == 0 {
            return Err(BuildError::InvalidConfiguration {
                message: "maxMembersPerConversation must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// The in-memory chat service.
pub type InMemoryChatService =
    ChatService<InMemoryStore<crate::domain::Account>, InMemoryStore<crate::domain::Conversation>>;

/// The in-memory people service.
pub type InMemoryPeopleService =
    PeopleService<InMemoryStore<crate::domain::Person>, InMemoryStore<crate::domain::Car>>;

/// Everything the resolver layer needs, created once at process start.
#[derive(Debug, Clone)]
pub struct Services {
    pub chat: InMemoryChatService,
    pub people: InMemoryPeopleService,
}

/// Builder for [`Services`].
///
/// ```rust
/// use chat_domain::service::ServiceBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let services = ServiceBuilder::new()
///     .with_feed_capacity(16)
///     .with_demo_data()
///     .build()
///     .await?;
/// assert!(!services.people.people().await.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceBuilder {
    config: ServiceConfig,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn with_feed_capacity(mut self, capacity: usize) -> Self {
        self.config.feed_capacity = capacity;
        self
    }

    pub fn with_max_members_per_conversation(mut self, max: usize) -> Self {
        self.config.max_members_per_conversation = max;
        self
    }

    pub fn with_demo_data(mut self) -> Self {
        self.config.seed_demo_data = true;
        self
    }

    /// Validate the configuration, create one store per aggregate kind and
    /// wire the services around them.
    pub async fn build(self) -> BuildResult<Services> {
        self.config.validate()?;

        let chat = ChatService::new(
            InMemoryStore::new(),
            InMemoryStore::new(),
            MessageFeed::new(self.config.feed_capacity),
            self.config.clone(),
        );
        let people = PeopleService::new(InMemoryStore::new(), InMemoryStore::new());

        if self.config.seed_demo_data {
            seed_demo_data(&chat, &people)
                .await
                .map_err(BuildError::Seed)?;
        }

        info!(
            "Services ready (feed capacity {}, max members {})",
            self.config.feed_capacity, self.config.max_members_per_conversation
        );
        Ok(Services { chat, people })
    }
}
