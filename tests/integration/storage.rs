//! Store contract checks across aggregate kinds.

use chat_domain::domain::{Account, Aggregate, Car, Conversation, Person};
use chat_domain::storage::{
    AccountQueries, CarQueries, ConversationQueries, InMemoryStore, PersonQueries, Store,
};
use chat_domain::value_objects::{
    CarModel, DisplayName, Email, Identifier, MessageContent, Password, Token,
};

#[tokio::test]
async fn test_conversation_survives_save_load() {
    let store = InMemoryStore::<Conversation>::new();
    let ann = Identifier::generate();
    let mut conversation = Conversation::start(vec![ann.clone()]);
    conversation.publish_message(ann.clone(), MessageContent::new("first").unwrap());
    let saved = store.save(conversation).await;

    let mut loaded = store.load(saved.id()).await.unwrap();
    assert_eq!(loaded, saved);

    loaded.publish_message(ann.clone(), MessageContent::new("second").unwrap());
    store.save(loaded).await;

    let reloaded = store.load(saved.id()).await.unwrap();
    assert_eq!(reloaded.messages().len(), 2);
    assert_eq!(store.len().await, 1);
    assert_eq!(store.conversations_of(&ann).await.len(), 1);
}

#[tokio::test]
async fn test_clones_share_state() {
    let store = InMemoryStore::<Account>::new();
    let other_handle = store.clone();

    let account = Account::register(
        Email::new("a@b.com").unwrap(),
        Password::new("pw").unwrap(),
        DisplayName::new("Ann").unwrap(),
    );
    other_handle.save(account.clone()).await;

    assert!(store.exists(account.id()).await);
    assert_eq!(
        store.find_by_token(&Token::new("pw").unwrap()).await,
        Some(account)
    );
}

#[tokio::test]
async fn test_separate_stores_are_isolated() {
    let first = InMemoryStore::<Person>::new();
    let second = InMemoryStore::<Person>::new();
    let ann = first.save(Person::new(DisplayName::new("ann").unwrap())).await;

    assert!(second.load(ann.id()).await.is_none());
    assert!(second.is_empty().await);
    assert_eq!(first.stats().await.total, 1);
    assert_eq!(first.stats().await.aggregate_kind, Person::KIND);
}

#[tokio::test]
async fn test_relations_resolve_through_identifiers() {
    let people = InMemoryStore::<Person>::new();
    let cars = InMemoryStore::<Car>::new();

    let bob = people.save(Person::new(DisplayName::new("bob").unwrap())).await;
    let mut ann = Person::new(DisplayName::new("ann").unwrap());
    ann.set_best_friend(bob.id().clone());
    let ann = people.save(ann).await;
    let car = cars
        .save(Car::register(CarModel::new("Beetle").unwrap(), ann.id().clone()))
        .await;

    let friend = people.best_friend_of(&ann).await.unwrap().unwrap();
    assert_eq!(friend.id(), bob.id());
    assert_eq!(cars.cars_owned_by(ann.id()).await, vec![car.clone()]);
    assert_eq!(people.load(car.owner_id()).await, Some(ann));
}
