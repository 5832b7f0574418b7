//! Property tests for the in-memory store.

use chat_domain::domain::{Aggregate, Person};
use chat_domain::storage::{InMemoryStore, Store};
use chat_domain::value_objects::{DisplayName, Identifier};
use proptest::prelude::*;
use tokio_test::block_on;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

proptest! {
    #[test]
    fn saved_aggregates_load_back(names in prop::collection::vec(name_strategy(), 0..20)) {
        let store = InMemoryStore::<Person>::new();
        let saved: Vec<Person> = names
            .iter()
            .map(|name| block_on(store.save(Person::new(DisplayName::new(name.as_str()).unwrap()))))
            .collect();

        for person in &saved {
            let loaded = block_on(store.load(person.id()));
            prop_assert_eq!(loaded.as_ref(), Some(person));
        }
        prop_assert_eq!(block_on(store.all()).len(), saved.len());
    }

    #[test]
    fn last_write_wins(id in "[a-z0-9]{1,10}", names in prop::collection::vec(name_strategy(), 1..10)) {
        let store = InMemoryStore::<Person>::new();
        let id = Identifier::new(id).unwrap();

        for name in &names {
            let person = Person::restore(id.clone(), DisplayName::new(name.as_str()).unwrap(), None);
            block_on(store.save(person));
        }

        let loaded = block_on(store.load(&id)).unwrap();
        prop_assert_eq!(loaded.name().as_str(), names.last().unwrap().as_str());
        prop_assert_eq!(block_on(store.all()).len(), 1);
    }

    #[test]
    fn unknown_ids_load_nothing(id in "[a-z]{1,10}") {
        let store = InMemoryStore::<Person>::new();
        block_on(store.save(Person::new(DisplayName::new("ann").unwrap())));
        let id = Identifier::new(format!("missing-{}", id)).unwrap();
        prop_assert!(block_on(store.load(&id)).is_none());
        prop_assert!(!block_on(store.exists(&id)));
    }
}
