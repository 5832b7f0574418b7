//! People, best friends and car ownership through the service API.

use crate::common::{init_logging, people};
use chat_domain::ServiceBuilder;

#[tokio::test]
async fn test_names_are_capitalized_in_views() {
    let people = people().await;
    let ann = people.add_person("ann").await.unwrap();
    let zoe = people.add_person("Zoë").await.unwrap();
    let eve = people.add_person("élodie").await.unwrap();

    assert_eq!(ann.name, "Ann");
    assert_eq!(zoe.name, "Zoë");
    assert_eq!(eve.name, "Élodie");
}

#[tokio::test]
async fn test_besties_round_trip() {
    let people = people().await;
    let ann = people.add_person("ann").await.unwrap();
    let bob = people.add_person("bob").await.unwrap();
    let cat = people.add_person("cat").await.unwrap();

    people.make_besties(&ann.id, &bob.id).await.unwrap();
    let bobs_friend = people.best_friend(&bob.id).await.unwrap().unwrap();
    assert_eq!(bobs_friend.id, ann.id);

    // Cat naming Ann leaves Ann and Bob untouched.
    people.set_best_friend(&cat.id, &ann.id).await.unwrap();
    let anns_friend = people.best_friend(&ann.id).await.unwrap().unwrap();
    assert_eq!(anns_friend.id, bob.id);

    let mut admirers: Vec<String> = people
        .admirers(&ann.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    admirers.sort();
    assert_eq!(admirers, vec!["Bob", "Cat"]);
}

#[tokio::test]
async fn test_car_ownership_queries() {
    let people = people().await;
    let ann = people.add_person("ann").await.unwrap();

    let beetle = people.add_car("Beetle", &ann.id).await.unwrap();
    assert_eq!(beetle.owner_id, ann.id);
    assert_eq!(people.owner_of(&beetle.id).await.unwrap().name, "Ann");
    assert_eq!(people.cars_of(&ann.id).await.unwrap(), vec![beetle.clone()]);

    assert_eq!(
        people.add_car("", &ann.id).await.unwrap_err().error_code(),
        "VALIDATION_ERROR"
    );
    assert_eq!(
        people.owner_of("no-such-car").await.unwrap_err().error_code(),
        "NOT_FOUND"
    );
    assert_eq!(
        people.transfer_car(&beetle.id, "nobody").await.unwrap_err().error_code(),
        "NOT_FOUND"
    );
    assert_eq!(people.owner_of(&beetle.id).await.unwrap().id, ann.id);
}

#[tokio::test]
async fn test_demo_data_besties_are_symmetric() {
    init_logging();
    let services = ServiceBuilder::new().with_demo_data().build().await.unwrap();

    for person in services.people.people().await {
        let friend = services
            .people
            .best_friend(&person.id)
            .await
            .unwrap()
            .expect("every demo person has a best friend");
        assert_eq!(friend.best_friend_id.as_deref(), Some(person.id.as_str()));
    }
}
