//! Shared test utilities for the chat domain test suite.
//!
//! Builds fresh services per test and provides small helpers for the
//! sign-up and sign-in dance most scenarios start with.

use chat_domain::service::{AccountView, InMemoryChatService, InMemoryPeopleService};
use chat_domain::{ServiceBuilder, Services};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh, empty services with the default configuration.
pub async fn services() -> Services {
    init_logging();
    ServiceBuilder::new()
        .build()
        .await
        .expect("default configuration must build")
}

pub async fn chat() -> InMemoryChatService {
    services().await.chat
}

pub async fn people() -> InMemoryPeopleService {
    services().await.people
}

/// A signed-in test account.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub account: AccountView,
    pub token: String,
}

/// Sign up `name` as `<name>@example.com` with password `<name>-pw` and sign in.
pub async fn sign_up_and_in(chat: &InMemoryChatService, name: &str) -> TestUser {
    let email = format!("{}@example.com", name.to_lowercase());
    let password = format!("{}-pw", name.to_lowercase());

    chat.sign_up(&email, &password, name)
        .await
        .unwrap_or_else(|e| panic!("Failed to sign up {}: {}", name, e));
    let session = chat
        .sign_in(&email, &password)
        .await
        .unwrap_or_else(|e| panic!("Failed to sign in {}: {}", name, e));

    TestUser {
        account: session.account,
        token: session.token,
    }
}
