//! Demo data inserted when [`ServiceConfig::seed_demo_data`] is set.
//!
//! [`ServiceConfig::seed_demo_data`]: crate::service::ServiceConfig::seed_demo_data

use crate::domain::{Account, Car, Conversation, Person};
use crate::error::DomainResult;
use crate::service::{ChatService, PeopleService};
use crate::storage::Store;
use log::info;

/// Demo accounts as (email, password, name).
pub(crate) const DEMO_ACCOUNTS: &[(&str, &str, &str)] = &[
    ("ann@example.com", "ann-secret", "Ann"),
    ("bob@example.com", "bob-secret", "Bob"),
];

/// Demo people as (name, cars owned). Consecutive pairs are besties.
pub(crate) const DEMO_PEOPLE: &[(&str, &[&str])] = &[
    ("ann", &["Beetle"]),
    ("bob", &["Mini", "Golf"]),
    ("cat", &[]),
    ("dan", &["Civic"]),
];

/// Insert the demo accounts, a conversation between them, and a small
/// social graph of people with their cars.
pub(crate) async fn seed_demo_data<AS, CS, PS, VS>(
    chat: &ChatService<AS, CS>,
    people: &PeopleService<PS, VS>,
) -> DomainResult<()>
where
    AS: Store<Account>,
    CS: Store<Conversation>,
    PS: Store<Person>,
    VS: Store<Car>,
{
    let mut account_ids = Vec::new();
    for (email, password, name) in DEMO_ACCOUNTS {
        account_ids.push(chat.sign_up(email, password, name).await?.id);
    }
    let (_, first_password, _) = DEMO_ACCOUNTS[0];
    let conversation = chat
        .start_conversation(first_password, &account_ids[1..])
        .await?;
    chat.send_message(first_password, &conversation.id, "Welcome to the chat!")
        .await?;

    let mut person_ids = Vec::new();
    for (name, cars) in DEMO_PEOPLE {
        let person = people.add_person(name).await?;
        for model in cars.iter() {
            people.add_car(model, &person.id).await?;
        }
        person_ids.push(person.id);
    }
    for pair in person_ids.chunks_exact(2) {
        people.make_besties(&pair[0], &pair[1]).await?;
    }

    info!(
        "Seeded {} accounts and {} people",
        account_ids.len(),
        person_ids.len()
    );
    Ok(())
}
