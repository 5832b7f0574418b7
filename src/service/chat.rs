//! Chat operations: accounts, sessions, conversations and messages.
//!
//! Each operation takes the raw primitives a GraphQL resolver receives,
//! turns them into value objects, runs the aggregate operation, saves the
//! result and returns a projection.

use crate::domain::{Account, Aggregate, Conversation};
use crate::error::{AuthenticationError, DomainError, DomainResult};
use crate::service::config::ServiceConfig;
use crate::service::feed::{MessageFeed, MessagePublished, MessageSubscription};
use crate::service::projection::{AccountView, ConversationView, MessageView, Session};
use crate::storage::{AccountQueries, ConversationQueries, Store};
use crate::value_objects::{DisplayName, Email, Identifier, MessageContent, Password, Token};
use log::{debug, info, warn};

/// Chat service over pluggable account and conversation stores.
#[derive(Debug, Clone)]
pub struct ChatService<AS, CS> {
    accounts: AS,
    conversations: CS,
    feed: MessageFeed,
    config: ServiceConfig,
}

impl<AS, CS> ChatService<AS, CS>
where
    AS: Store<Account>,
    CS: Store<Conversation>,
{
    pub fn new(accounts: AS, conversations: CS, feed: MessageFeed, config: ServiceConfig) -> Self {
        Self {
            accounts,
            conversations,
            feed,
            config,
        }
    }

    /// Register a new account.
    ///
    /// The email must not already be registered.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> DomainResult<AccountView> {
        let email = Email::new(email)?;
        let password = Password::new(password)?;
        let name = DisplayName::new(name)?;

        if self.accounts.find_by_email(&email).await.is_some() {
            warn!("Sign-up rejected, email {} already registered", email);
            return Err(DomainError::conflict(format!(
                "email {} is already registered",
                email
            )));
        }

        let account = self
            .accounts
            .save(Account::register(email, password, name))
            .await;
        info!("Registered account {}", account.id());
        Ok(AccountView::from(&account))
    }

    /// Exchange email and password for a session token.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn sign_in(&self, email: &str, password: &str) -> DomainResult<Session> {
        let email = Email::new(email)?;
        let password = Password::new(password)?;

        let Some(account) = self.accounts.find_by_email(&email).await else {
            debug!("Sign-in for unknown email {}", email);
            return Err(AuthenticationError::InvalidCredentials.into());
        };
        let token = account.authenticate(&password).inspect_err(|_| {
            warn!("Wrong password for account {}", account.id());
        })?;

        info!("Account {} signed in", account.id());
        Ok(Session {
            token: token.into_string(),
            account: AccountView::from(&account),
        })
    }

    /// The account a session token belongs to.
    ///
    /// Tokens are derived from passwords, so accounts sharing a password share
    /// a token and this may resolve to either of them.
    pub async fn current_account(&self, token: &str) -> DomainResult<AccountView> {
        let account = self.authenticated(token).await?;
        Ok(AccountView::from(&account))
    }

    pub async fn accounts(&self) -> Vec<AccountView> {
        self.accounts
            .all()
            .await
            .iter()
            .map(AccountView::from)
            .collect()
    }

    pub async fn account(&self, id: &str) -> DomainResult<AccountView> {
        let id = Identifier::new(id)?;
        let account = self.load_account(&id).await?;
        Ok(AccountView::from(&account))
    }

    /// Start a conversation between the caller and `member_ids`.
    ///
    /// The caller is always the first member. Every other id must name an
    /// existing account; repeated ids are collapsed.
    pub async fn start_conversation<I, S>(
        &self,
        token: &str,
        member_ids: I,
    ) -> DomainResult<ConversationView>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let caller = self.authenticated(token).await?;

        let mut members = vec![caller.id().clone()];
        for raw in member_ids {
            let id = Identifier::new(raw.as_ref())?;
            self.load_account(&id).await?;
            if !members.contains(&id) {
                members.push(id);
            }
        }
        self.check_member_limit(members.len())?;

        let conversation = self.conversations.save(Conversation::start(members)).await;
        info!(
            "Account {} started conversation {} with {} members",
            caller.id(),
            conversation.id(),
            conversation.members().len()
        );
        Ok(ConversationView::from(&conversation))
    }

    /// Add an existing account to a conversation the caller belongs to.
    pub async fn add_member(
        &self,
        token: &str,
        conversation_id: &str,
        account_id: &str,
    ) -> DomainResult<ConversationView> {
        let caller = self.authenticated(token).await?;
        let mut conversation = self.member_conversation(&caller, conversation_id).await?;

        let new_member = Identifier::new(account_id)?;
        self.load_account(&new_member).await?;
        if conversation.has_member(&new_member) {
            return Err(DomainError::conflict(format!(
                "account {} is already a member of conversation {}",
                new_member,
                conversation.id()
            )));
        }
        self.check_member_limit(conversation.members().len() + 1)?;

        conversation.add_member(new_member.clone());
        let conversation = self.conversations.save(conversation).await;
        debug!("Added {} to conversation {}", new_member, conversation.id());
        Ok(ConversationView::from(&conversation))
    }

    /// Publish a message from the caller and notify subscribers.
    pub async fn send_message(
        &self,
        token: &str,
        conversation_id: &str,
        content: &str,
    ) -> DomainResult<MessageView> {
        let caller = self.authenticated(token).await?;
        let content = MessageContent::new(content)?;
        let mut conversation = self.member_conversation(&caller, conversation_id).await?;

        let message = MessageView::from(conversation.publish_message(caller.id().clone(), content));
        let conversation = self.conversations.save(conversation).await;

        let delivered = self.feed.publish(MessagePublished {
            conversation_id: conversation.identity(),
            message: message.clone(),
        });
        debug!(
            "Message {} published to conversation {} ({} subscribers)",
            message.id,
            conversation.id(),
            delivered
        );
        Ok(message)
    }

    /// Conversations the caller is a member of, in unspecified order.
    pub async fn conversations(&self, token: &str) -> DomainResult<Vec<ConversationView>> {
        let caller = self.authenticated(token).await?;
        Ok(self
            .conversations
            .conversations_of(caller.id())
            .await
            .iter()
            .map(ConversationView::from)
            .collect())
    }

    /// Messages of one conversation, oldest first.
    pub async fn messages(
        &self,
        token: &str,
        conversation_id: &str,
    ) -> DomainResult<Vec<MessageView>> {
        let caller = self.authenticated(token).await?;
        let conversation = self.member_conversation(&caller, conversation_id).await?;
        Ok(conversation.messages().iter().map(MessageView::from).collect())
    }

    /// Subscribe to every message published through this service.
    pub fn subscribe(&self) -> MessageSubscription {
        self.feed.subscribe()
    }

    /// Subscribe to new messages in one conversation the caller belongs to.
    pub async fn subscribe_to(
        &self,
        token: &str,
        conversation_id: &str,
    ) -> DomainResult<MessageSubscription> {
        let caller = self.authenticated(token).await?;
        let conversation = self.member_conversation(&caller, conversation_id).await?;
        Ok(self.feed.subscribe_to(conversation.identity()))
    }

    /// Resolve a raw session token to its account.
    async fn authenticated(&self, token: &str) -> DomainResult<Account> {
        let token = Token::new(token).map_err(|_| AuthenticationError::InvalidToken)?;
        self.accounts
            .find_by_token(&token)
            .await
            .ok_or_else(|| AuthenticationError::InvalidToken.into())
    }

    async fn load_account(&self, id: &Identifier) -> DomainResult<Account> {
        self.accounts
            .load(id)
            .await
            .ok_or_else(|| DomainError::not_found(Account::KIND, id.as_str()))
    }

    /// Load a conversation and check that `caller` is one of its members.
    async fn member_conversation(
        &self,
        caller: &Account,
        conversation_id: &str,
    ) -> DomainResult<Conversation> {
        let id = Identifier::new(conversation_id)?;
        let conversation = self
            .conversations
            .load(&id)
            .await
            .ok_or_else(|| DomainError::not_found(Conversation::KIND, id.as_str()))?;

        if !conversation.has_member(caller.id()) {
            return Err(AuthenticationError::NotAMember {
                account_id: caller.identity(),
                conversation_id: conversation.identity(),
            }
            .into());
        }
        Ok(conversation)
    }

    fn check_member_limit(&self, members: usize) -> DomainResult<()> {
        let max = self.config.max_members_per_conversation;
        if members > max {
            return Err(DomainError::conflict(format!(
                "a conversation can have at most {} members",
                max
            )));
        }
        Ok(())
    }
}
