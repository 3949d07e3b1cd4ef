//! The [`Clinic`] facade.

use chrono::NaiveDateTime;

use super::{ClinicConfig, ClinicError, ClinicResult, RemovalPolicy};
use crate::models::{
    Appointment, Client, Diagnosis, EntityId, EntityKind, Medication, Pet, Prescription,
    Veterinarian,
};
use crate::repo::{IdSequence, RepoError, Repository};

/// Single entry point for clinic operations.
///
/// Owns one repository per stored record type. Diagnoses and prescriptions
/// are not stored records; they only draw ids from their own sequences, and
/// prescriptions are appended to `history` when `retain_history` is on.
/// Not synchronized: callers that
/// share a clinic across threads wrap it in a mutex (see the FFI layer).
#[derive(Debug, Clone, Default)]
pub struct Clinic {
    config: ClinicConfig,
    clients: Repository<Client>,
    pets: Repository<Pet>,
    veterinarians: Repository<Veterinarian>,
    appointments: Repository<Appointment>,
    diagnosis_ids: IdSequence,
    prescription_ids: IdSequence,
    history: Vec<Prescription>,
}

impl Clinic {
    /// Create an empty clinic.
    pub fn new(config: ClinicConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    // =========================================================================
    // Clients
    // =========================================================================

    /// Register a client and return it with its assigned id.
    pub fn register_client(&mut self, client: Client) -> ClinicResult<Client> {
        let client = self.clients.add(client)?;
        tracing::info!(client_id = client.id, name = %client.name, "client registered");
        Ok(client)
    }

    pub fn list_clients(&self) -> Vec<Client> {
        self.clients.list_all()
    }

    pub fn find_client(&self, id: EntityId) -> Option<Client> {
        self.clients.find_by_id(id)
    }

    /// Replace a stored client's fields.
    ///
    /// Pets and appointments keep the snapshot taken when they were created.
    pub fn update_client(&mut self, client: Client) -> ClinicResult<()> {
        self.clients.update(client)?;
        Ok(())
    }

    /// Remove a client that owns no pets. Under [`RemovalPolicy::Strict`]
    /// a client named on a pending appointment is also kept.
    pub fn remove_client(&mut self, client: &Client) -> ClinicResult<Client> {
        let owned = self.pets.iter().filter(|pet| pet.is_owned_by(client.id)).count();
        if owned > 0 {
            tracing::warn!(client_id = client.id, owned, "client removal denied");
            return Err(ClinicError::ReferentialConflict(format!(
                "client '{}' still owns {} pet(s)",
                client.name, owned
            )));
        }

        if self.config.removal_policy == RemovalPolicy::Strict {
            let pending = self
                .appointments
                .iter()
                .filter(|a| a.involves_client(client.id))
                .count();
            if pending > 0 {
                tracing::warn!(client_id = client.id, pending, "client removal denied");
                return Err(ClinicError::ReferentialConflict(format!(
                    "client '{}' has {} pending appointment(s)",
                    client.name, pending
                )));
            }
        }

        let removed = self.clients.remove(client)?;
        tracing::info!(client_id = removed.id, "client removed");
        Ok(removed)
    }

    /// Pets currently registered to a client.
    pub fn pets_of_client(&self, client_id: EntityId) -> Vec<Pet> {
        self.pets
            .iter()
            .filter(|pet| pet.is_owned_by(client_id))
            .cloned()
            .collect()
    }

    // =========================================================================
    // Pets
    // =========================================================================

    /// Register a pet. The owner snapshot is stored as given.
    pub fn register_pet(&mut self, pet: Pet) -> ClinicResult<Pet> {
        let pet = self.pets.add(pet)?;
        tracing::info!(
            pet_id = pet.id,
            owner_id = pet.owner_id(),
            name = %pet.name,
            "pet registered"
        );
        Ok(pet)
    }

    pub fn list_pets(&self) -> Vec<Pet> {
        self.pets.list_all()
    }

    pub fn find_pet(&self, id: EntityId) -> Option<Pet> {
        self.pets.find_by_id(id)
    }

    pub fn update_pet(&mut self, pet: Pet) -> ClinicResult<()> {
        self.pets.update(pet)?;
        Ok(())
    }

    /// Remove a pet. Under [`RemovalPolicy::Strict`] a pet with pending
    /// appointments is kept.
    pub fn remove_pet(&mut self, pet: &Pet) -> ClinicResult<Pet> {
        if self.config.removal_policy == RemovalPolicy::Strict {
            let pending = self.appointments.iter().filter(|a| a.involves_pet(pet.id)).count();
            if pending > 0 {
                tracing::warn!(pet_id = pet.id, pending, "pet removal denied");
                return Err(ClinicError::ReferentialConflict(format!(
                    "pet '{}' has {} pending appointment(s)",
                    pet.name, pending
                )));
            }
        }

        let removed = self.pets.remove(pet)?;
        tracing::info!(pet_id = removed.id, "pet removed");
        Ok(removed)
    }

    // =========================================================================
    // Veterinarians
    // =========================================================================

    pub fn register_veterinarian(
        &mut self,
        veterinarian: Veterinarian,
    ) -> ClinicResult<Veterinarian> {
        let veterinarian = self.veterinarians.add(veterinarian)?;
        tracing::info!(
            vet_id = veterinarian.id,
            name = %veterinarian.name,
            "veterinarian registered"
        );
        Ok(veterinarian)
    }

    pub fn list_veterinarians(&self) -> Vec<Veterinarian> {
        self.veterinarians.list_all()
    }

    pub fn find_veterinarian(&self, id: EntityId) -> Option<Veterinarian> {
        self.veterinarians.find_by_id(id)
    }

    pub fn update_veterinarian(&mut self, veterinarian: Veterinarian) -> ClinicResult<()> {
        self.veterinarians.update(veterinarian)?;
        Ok(())
    }

    /// Remove a veterinarian. Under [`RemovalPolicy::Strict`] one with
    /// pending appointments is kept.
    pub fn remove_veterinarian(
        &mut self,
        veterinarian: &Veterinarian,
    ) -> ClinicResult<Veterinarian> {
        if self.config.removal_policy == RemovalPolicy::Strict {
            let pending = self
                .appointments
                .iter()
                .filter(|a| a.involves_veterinarian(veterinarian.id))
                .count();
            if pending > 0 {
                tracing::warn!(vet_id = veterinarian.id, pending, "veterinarian removal denied");
                return Err(ClinicError::ReferentialConflict(format!(
                    "veterinarian '{}' has {} pending appointment(s)",
                    veterinarian.name, pending
                )));
            }
        }

        let removed = self.veterinarians.remove(veterinarian)?;
        tracing::info!(vet_id = removed.id, "veterinarian removed");
        Ok(removed)
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// Book an appointment.
    ///
    /// No double-booking check: two appointments for the same veterinarian
    /// at the same time are both accepted.
    pub fn schedule_appointment(
        &mut self,
        pet: &Pet,
        client: &Client,
        veterinarian: &Veterinarian,
        scheduled_at: NaiveDateTime,
    ) -> ClinicResult<Appointment> {
        if self.config.reject_past_appointments {
            let now = chrono::Local::now().naive_local();
            if scheduled_at < now {
                return Err(ClinicError::InvalidInput(format!(
                    "appointment date {} is in the past",
                    scheduled_at
                )));
            }
        }

        let appointment = Appointment::new(
            pet.clone(),
            client.clone(),
            veterinarian.clone(),
            scheduled_at,
        );
        let appointment = self.appointments.add(appointment)?;
        tracing::info!(
            appointment_id = appointment.id,
            pet = %pet.name,
            veterinarian = %veterinarian.name,
            at = %scheduled_at,
            "appointment scheduled"
        );
        Ok(appointment)
    }

    /// Pending appointments in booking order.
    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.list_all()
    }

    pub fn find_appointment(&self, id: EntityId) -> Option<Appointment> {
        self.appointments.find_by_id(id)
    }

    /// Pending appointments booked with one veterinarian.
    pub fn appointments_for_veterinarian(&self, vet_id: EntityId) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.involves_veterinarian(vet_id))
            .cloned()
            .collect()
    }

    /// Cancel a pending appointment.
    pub fn remove_appointment(&mut self, appointment: &Appointment) -> ClinicResult<Appointment> {
        let removed = self.appointments.remove(appointment)?;
        tracing::info!(appointment_id = removed.id, "appointment cancelled");
        Ok(removed)
    }

    /// Attend a pending appointment.
    ///
    /// Builds a diagnosis and a prescription linked to it, drops the
    /// appointment from the pending list and returns the prescription.
    /// Fails with `NotFound` if the appointment is no longer pending.
    pub fn complete_appointment(
        &mut self,
        appointment: &Appointment,
        diagnosis_text: &str,
        medications: Vec<Medication>,
    ) -> ClinicResult<Prescription> {
        if !self.appointments.contains(appointment.id) {
            return Err(ClinicError::NotFound {
                kind: EntityKind::Appointment,
                id: appointment.id,
            });
        }
        let diagnosis_id = next_id(&mut self.diagnosis_ids, EntityKind::Diagnosis)?;
        let prescription_id = next_id(&mut self.prescription_ids, EntityKind::Prescription)?;

        let appointment = self.appointments.remove(appointment)?;

        let mut diagnosis = Diagnosis::new(appointment.clone(), diagnosis_text);
        diagnosis.id = diagnosis_id;

        let mut prescription =
            Prescription::new(appointment, medications).with_diagnosis(diagnosis);
        prescription.id = prescription_id;

        if self.config.retain_history {
            self.history.push(prescription.clone());
        }

        tracing::info!(
            appointment_id = prescription.appointment.id,
            prescription_id = prescription.id,
            medications = prescription.medications.len(),
            "appointment completed"
        );
        Ok(prescription)
    }

    /// Prescriptions kept from completed appointments.
    ///
    /// Always empty unless `retain_history` is enabled.
    pub fn list_prescriptions(&self) -> Vec<Prescription> {
        self.history.clone()
    }
}

fn next_id(sequence: &mut IdSequence, kind: EntityKind) -> ClinicResult<EntityId> {
    sequence.next_id().ok_or_else(|| {
        RepoError::IdExhausted {
            kind,
            id: EntityId::MAX,
        }
        .into()
    })
}
