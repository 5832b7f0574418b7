//! Car aggregate, owned by a person.

use crate::domain::Aggregate;
use crate::value_objects::{CarModel, Identifier};

/// A car and the identifier of the person who owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: Identifier,
    model: CarModel,
    owner_id: Identifier,
}

impl Car {
    pub fn register(model: CarModel, owner_id: Identifier) -> Self {
        Self::restore(Identifier::generate(), model, owner_id)
    }

    /// Rebuild a car whose identifier is already known.
    pub fn restore(id: Identifier, model: CarModel, owner_id: Identifier) -> Self {
        Self {
            id,
            model,
            owner_id,
        }
    }

    pub fn model(&self) -> &CarModel {
        &self.model
    }

    pub fn owner_id(&self) -> &Identifier {
        &self.owner_id
    }

    pub fn is_owned_by(&self, person_id: &Identifier) -> bool {
        &self.owner_id == person_id
    }

    pub fn transfer_to(&mut self, new_owner: Identifier) {
        self.owner_id = new_owner;
    }
}

impl Aggregate for Car {
    const KIND: &'static str = "Car";

    fn id(&self) -> &Identifier {
        &self.id
    }
}
