//! Appointment ("consulta") models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::client::Client;
use super::entity::{impl_entity, EntityId, EntityKind, UNASSIGNED_ID};
use super::pet::Pet;
use super::veterinarian::Veterinarian;

/// A scheduled meeting between a pet, its client and a veterinarian.
///
/// Only pending (scheduled) appointments are stored. Completing or
/// cancelling one removes it from the clinic; both are terminal and leave
/// no record, so there is no status field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Repository-assigned id
    pub id: EntityId,
    /// Pet being seen
    pub pet: Pet,
    /// Client bringing the pet
    pub client: Client,
    /// Attending veterinarian
    pub veterinarian: Veterinarian,
    /// Local wall-clock date and time
    pub scheduled_at: NaiveDateTime,
}

impl Appointment {
    /// Create an unsaved appointment.
    pub fn new(
        pet: Pet,
        client: Client,
        veterinarian: Veterinarian,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            pet,
            client,
            veterinarian,
            scheduled_at,
        }
    }

    /// Check whether the appointment falls before `now`.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.scheduled_at < now
    }

    /// Check whether this appointment names the given client.
    pub fn involves_client(&self, client_id: EntityId) -> bool {
        self.client.id == client_id
    }

    /// Check whether this appointment references the given pet.
    pub fn involves_pet(&self, pet_id: EntityId) -> bool {
        self.pet.id == pet_id
    }

    /// Check whether this appointment is booked with the given veterinarian.
    pub fn involves_veterinarian(&self, vet_id: EntityId) -> bool {
        self.veterinarian.id == vet_id
    }
}

impl_entity!(Appointment, EntityKind::Appointment);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn make_appointment() -> Appointment {
        let mut client = Client::new("Carlos Pereira", "11976543210", "");
        client.id = 3;
        let mut pet = Pet::new("Thor", "Cachorro", "Golden Retriever", 5, client.clone());
        pet.id = 4;
        let mut vet = Veterinarian::new("Dra. Ana Costa", "Clínica Geral");
        vet.id = 5;
        Appointment::new(pet, client, vet, at(10, 14))
    }

    #[test]
    fn test_is_past() {
        let appointment = make_appointment();
        assert!(appointment.is_past(at(11, 9)));
        assert!(!appointment.is_past(at(10, 14)));
        assert!(!appointment.is_past(at(9, 8)));
    }

    #[test]
    fn test_involves() {
        let appointment = make_appointment();
        assert!(appointment.involves_pet(4));
        assert!(appointment.involves_client(3));
        assert!(appointment.involves_veterinarian(5));
        assert!(!appointment.involves_veterinarian(4));
    }
}
