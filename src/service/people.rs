//! People operations: persons, best-friend links and car ownership.

use crate::domain::{Aggregate, Car, Person};
use crate::error::{DomainError, DomainResult, ReferentialIntegrityError};
use crate::service::projection::{CarView, PersonView};
use crate::storage::{CarQueries, PersonQueries, Store};
use crate::value_objects::{CarModel, DisplayName, Identifier};
use log::{debug, info, warn};

/// People service over pluggable person and car stores.
#[derive(Debug, Clone)]
pub struct PeopleService<PS, CS> {
    people: PS,
    cars: CS,
}

impl<PS, CS> PeopleService<PS, CS>
where
    PS: Store<Person>,
    CS: Store<Car>,
{
    pub fn new(people: PS, cars: CS) -> Self {
        Self { people, cars }
    }

    pub async fn people(&self) -> Vec<PersonView> {
        self.people.all().await.iter().map(PersonView::from).collect()
    }

    pub async fn person(&self, id: &str) -> DomainResult<PersonView> {
        let person = self.load_person(&Identifier::new(id)?).await?;
        Ok(PersonView::from(&person))
    }

    pub async fn add_person(&self, name: &str) -> DomainResult<PersonView> {
        let name = DisplayName::new(name)?;
        let person = self.people.save(Person::new(name)).await;
        info!("Added person {}", person.id());
        Ok(PersonView::from(&person))
    }

    pub async fn rename_person(&self, id: &str, name: &str) -> DomainResult<PersonView> {
        let name = DisplayName::new(name)?;
        let mut person = self.load_person(&Identifier::new(id)?).await?;
        person.rename(name);
        let person = self.people.save(person).await;
        Ok(PersonView::from(&person))
    }

    /// The best friend of person `id`, if one is set.
    pub async fn best_friend(&self, id: &str) -> DomainResult<Option<PersonView>> {
        let person = self.load_person(&Identifier::new(id)?).await?;
        let friend = self.people.best_friend_of(&person).await.inspect_err(|e| {
            warn!("Dangling best friend reference: {}", e);
        })?;
        Ok(friend.as_ref().map(PersonView::from))
    }

    /// Everyone who named person `id` as their best friend.
    pub async fn admirers(&self, id: &str) -> DomainResult<Vec<PersonView>> {
        let person = self.load_person(&Identifier::new(id)?).await?;
        Ok(self
            .people
            .admirers_of(person.id())
            .await
            .iter()
            .map(PersonView::from)
            .collect())
    }

    /// Point `person_id` at `friend_id`. The reverse link is left untouched.
    pub async fn set_best_friend(
        &self,
        person_id: &str,
        friend_id: &str,
    ) -> DomainResult<PersonView> {
        let mut person = self.load_person(&Identifier::new(person_id)?).await?;
        let friend = self.load_person(&Identifier::new(friend_id)?).await?;
        ensure_distinct(&person, &friend)?;

        person.set_best_friend(friend.id().clone());
        let person = self.people.save(person).await;
        debug!("{} now names {} as best friend", person.id(), friend.id());
        Ok(PersonView::from(&person))
    }

    pub async fn clear_best_friend(&self, person_id: &str) -> DomainResult<PersonView> {
        let mut person = self.load_person(&Identifier::new(person_id)?).await?;
        person.clear_best_friend();
        let person = self.people.save(person).await;
        Ok(PersonView::from(&person))
    }

    /// Make `a` and `b` each other's best friend.
    pub async fn make_besties(&self, a: &str, b: &str) -> DomainResult<(PersonView, PersonView)> {
        let mut first = self.load_person(&Identifier::new(a)?).await?;
        let mut second = self.load_person(&Identifier::new(b)?).await?;
        ensure_distinct(&first, &second)?;

        first.set_best_friend(second.id().clone());
        second.set_best_friend(first.id().clone());
        let first = self.people.save(first).await;
        let second = self.people.save(second).await;
        info!("{} and {} are now besties", first.id(), second.id());
        Ok((PersonView::from(&first), PersonView::from(&second)))
    }

    pub async fn cars(&self) -> Vec<CarView> {
        self.cars.all().await.iter().map(CarView::from).collect()
    }

    /// Register a car for an existing person.
    pub async fn add_car(&self, model: &str, owner_id: &str) -> DomainResult<CarView> {
        let model = CarModel::new(model)?;
        let owner = Identifier::new(owner_id)?;
        if !self.people.exists(&owner).await {
            warn!("Car registration for unknown owner {}", owner);
            return Err(DomainError::not_found("Owner", owner.as_str()));
        }

        let car = self.cars.save(Car::register(model, owner)).await;
        info!("Registered car {} for {}", car.id(), car.owner_id());
        Ok(CarView::from(&car))
    }

    pub async fn cars_of(&self, owner_id: &str) -> DomainResult<Vec<CarView>> {
        let owner = self.load_person(&Identifier::new(owner_id)?).await?;
        Ok(self
            .cars
            .cars_owned_by(owner.id())
            .await
            .iter()
            .map(CarView::from)
            .collect())
    }

    /// The person owning car `car_id`.
    pub async fn owner_of(&self, car_id: &str) -> DomainResult<PersonView> {
        let car = self.load_car(&Identifier::new(car_id)?).await?;
        let owner = self.people.load(car.owner_id()).await.ok_or_else(|| {
            ReferentialIntegrityError::new(
                "owner",
                car.identity(),
                Person::KIND,
                car.owner_id().as_str(),
            )
        })?;
        Ok(PersonView::from(&owner))
    }

    /// Hand car `car_id` over to an existing person.
    pub async fn transfer_car(&self, car_id: &str, new_owner_id: &str) -> DomainResult<CarView> {
        let mut car = self.load_car(&Identifier::new(car_id)?).await?;
        let new_owner = self.load_person(&Identifier::new(new_owner_id)?).await?;

        car.transfer_to(new_owner.id().clone());
        let car = self.cars.save(car).await;
        info!("Car {} transferred to {}", car.id(), new_owner.id());
        Ok(CarView::from(&car))
    }

    async fn load_person(&self, id: &Identifier) -> DomainResult<Person> {
        self.people
            .load(id)
            .await
            .ok_or_else(|| DomainError::not_found(Person::KIND, id.as_str()))
    }

    async fn load_car(&self, id: &Identifier) -> DomainResult<Car> {
        self.cars
            .load(id)
            .await
            .ok_or_else(|| DomainError::not_found(Car::KIND, id.as_str()))
    }
}

/// Nobody can be their own best friend.
fn ensure_distinct(person: &Person, friend: &Person) -> DomainResult<()> {
    if person.id() == friend.id() {
        return Err(DomainError::conflict(format!(
            "{} cannot be their own best friend",
            person.id()
        )));
    }
    Ok(())
}
