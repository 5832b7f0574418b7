//! End-to-end chat scenarios.

use crate::common::{chat, services, sign_up_and_in};
use chat_domain::ServiceBuilder;
use chat_domain::error::{AuthenticationError, DomainError};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_ann_signs_up_and_authenticates() {
    let chat = chat().await;
    let ann = chat.sign_up("a@b.com", "pw", "Ann").await.unwrap();
    assert_eq!(ann.name, "Ann");

    let session = chat.sign_in("a@b.com", "pw").await.unwrap();
    assert_eq!(session.token, "pw");
    assert_eq!(session.account.id, ann.id);

    let error = chat.sign_in("a@b.com", "wrong").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Authentication(AuthenticationError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_account_lookup() {
    let chat = chat().await;
    let ann = sign_up_and_in(&chat, "Ann").await;

    let loaded = chat.account(&ann.account.id).await.unwrap();
    assert_eq!(loaded, ann.account);
    assert_eq!(chat.account("missing").await.unwrap_err().error_code(), "NOT_FOUND");
    assert_eq!(chat.account("").await.unwrap_err().error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_group_conversation() {
    let chat = chat().await;
    let ann = sign_up_and_in(&chat, "Ann").await;
    let bob = sign_up_and_in(&chat, "Bob").await;
    let cat = sign_up_and_in(&chat, "Cat").await;

    let conversation = chat
        .start_conversation(&ann.token, [&bob.account.id])
        .await
        .unwrap();
    assert_eq!(conversation.members, vec![ann.account.id.clone(), bob.account.id.clone()]);
    assert!(conversation.messages.is_empty());

    chat.send_message(&bob.token, &conversation.id, "hi ann").await.unwrap();
    chat.add_member(&bob.token, &conversation.id, &cat.account.id)
        .await
        .unwrap();
    chat.send_message(&cat.token, &conversation.id, "hi all").await.unwrap();

    let authors: Vec<String> = chat
        .messages(&ann.token, &conversation.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.author_id)
        .collect();
    assert_eq!(authors, vec![bob.account.id.clone(), cat.account.id.clone()]);

    for user in [&ann, &bob, &cat] {
        let visible = chat.conversations(&user.token).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].messages.len(), 2);
    }
}

#[tokio::test]
async fn test_message_length_boundary() {
    let chat = chat().await;
    let ann = sign_up_and_in(&chat, "Ann").await;
    let conversation = chat
        .start_conversation(&ann.token, Vec::<String>::new())
        .await
        .unwrap();

    assert!(chat.send_message(&ann.token, &conversation.id, "").await.is_ok());
    assert!(
        chat.send_message(&ann.token, &conversation.id, &"a".repeat(100))
            .await
            .is_ok()
    );
    assert!(
        chat.send_message(&ann.token, &conversation.id, &"a".repeat(101))
            .await
            .is_err()
    );
    assert_eq!(chat.messages(&ann.token, &conversation.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_outsider_is_locked_out() {
    let chat = chat().await;
    let ann = sign_up_and_in(&chat, "Ann").await;
    let eve = sign_up_and_in(&chat, "Eve").await;
    let conversation = chat
        .start_conversation(&ann.token, Vec::<String>::new())
        .await
        .unwrap();

    for result in [
        chat.messages(&eve.token, &conversation.id).await.map(|_| ()),
        chat.send_message(&eve.token, &conversation.id, "hi").await.map(|_| ()),
        chat.add_member(&eve.token, &conversation.id, &eve.account.id)
            .await
            .map(|_| ()),
        chat.subscribe_to(&eve.token, &conversation.id).await.map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(DomainError::Authentication(AuthenticationError::NotAMember { .. }))
        ));
    }
}

#[tokio::test]
async fn test_subscriber_sees_messages_in_order() {
    let chat = chat().await;
    let ann = sign_up_and_in(&chat, "Ann").await;
    let bob = sign_up_and_in(&chat, "Bob").await;
    let conversation = chat
        .start_conversation(&ann.token, [&bob.account.id])
        .await
        .unwrap();

    let mut subscription = chat.subscribe_to(&bob.token, &conversation.id).await.unwrap();

    let sender = chat.clone();
    let token = ann.token.clone();
    let conversation_id = conversation.id.clone();
    let publisher = tokio::spawn(async move {
        for content in ["one", "two", "three"] {
            sender.send_message(&token, &conversation_id, content).await.unwrap();
        }
    });

    let mut received = Vec::new();
    for _ in 0..3 {
        let event = timeout(Duration::from_secs(1), subscription.next())
            .await
            .expect("message should arrive")
            .expect("feed should stay open");
        assert_eq!(event.conversation_id, conversation.id);
        received.push(event.message.content);
    }
    publisher.await.unwrap();
    assert_eq!(received, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_shared_password_shares_token() {
    let chat = chat().await;
    chat.sign_up("ann@example.com", "same", "Ann").await.unwrap();
    chat.sign_up("bob@example.com", "same", "Bob").await.unwrap();

    let ann = chat.sign_in("ann@example.com", "same").await.unwrap();
    let bob = chat.sign_in("bob@example.com", "same").await.unwrap();
    assert_eq!(ann.token, bob.token);
    assert_ne!(ann.account.id, bob.account.id);
}

#[tokio::test]
async fn test_concurrent_sign_ups_all_land() {
    let services = services().await;
    let handles: Vec<_> = (0..20)
        .map(|i| {
            let chat = services.chat.clone();
            tokio::spawn(async move {
                chat.sign_up(&format!("user{}@example.com", i), "pw", &format!("User {}", i))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(services.chat.accounts().await.len(), 20);
}

#[tokio::test]
async fn test_projection_json_shape() {
    let chat = ServiceBuilder::new().build().await.unwrap().chat;
    let ann = sign_up_and_in(&chat, "Ann").await;
    let conversation = chat
        .start_conversation(&ann.token, Vec::<String>::new())
        .await
        .unwrap();
    let message = chat.send_message(&ann.token, &conversation.id, "hi").await.unwrap();

    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(value["authorId"], ann.account.id);
    assert_eq!(value["content"], "hi");
    assert!(value["publishedAt"].is_string());

    let session = serde_json::to_value(chat.sign_in("ann@example.com", "ann-pw").await.unwrap())
        .unwrap();
    assert_eq!(session["account"]["email"], "ann@example.com");
    assert!(session["account"].get("password").is_none());
}
