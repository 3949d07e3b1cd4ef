//! Pet models.

use serde::{Deserialize, Serialize};

use super::client::Client;
use super::entity::{impl_entity, EntityId, EntityKind, UNASSIGNED_ID};

/// A pet record. Always owned by a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Repository-assigned id
    pub id: EntityId,
    /// Pet name
    pub name: String,
    /// Species (e.g., "Cachorro", "Gato")
    pub species: String,
    /// Breed
    pub breed: String,
    /// Age in years (positive)
    pub age: u32,
    /// Owner snapshot taken at registration
    pub owner: Client,
}

impl Pet {
    /// Create an unsaved pet owned by `owner`.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        breed: impl Into<String>,
        age: u32,
        owner: Client,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            species: species.into(),
            breed: breed.into(),
            age,
            owner,
        }
    }

    /// Id of the owning client.
    pub fn owner_id(&self) -> EntityId {
        self.owner.id
    }

    /// Check whether this pet belongs to the given client.
    pub fn is_owned_by(&self, client_id: EntityId) -> bool {
        self.owner.id == client_id
    }
}

impl_entity!(Pet, EntityKind::Pet);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_reference() {
        let mut owner = Client::new("Maria Souza", "11998765432", "maria@example.com");
        owner.id = 7;
        let pet = Pet::new("Miau", "Gato", "Siamês", 2, owner);
        assert_eq!(pet.owner_id(), 7);
        assert!(pet.is_owned_by(7));
        assert!(!pet.is_owned_by(8));
    }
}
