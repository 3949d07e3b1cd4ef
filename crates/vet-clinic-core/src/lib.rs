//! Vet-Clinic Core Library
//!
//! Record keeping for a veterinary clinic: clients, pets, veterinarians and
//! appointments, held in process memory.
//!
//! # Architecture
//!
//! ```text
//!        UI forms (Swift / Kotlin / desktop)
//!                      │
//!          [input: parse + presence checks]
//!                      │
//!                      ▼
//!     ┌────────────────────────────────────┐
//!     │        Clinic (facade)             │
//!     │  register / list / remove          │
//!     │  schedule ─► complete / cancel     │
//!     └──┬──────┬──────┬──────┬──────┬─────┘
//!        ▼      ▼      ▼      ▼      ▼
//!    clients  pets   vets  appts  history
//!    (one Repository + IdSequence each; history is a plain list)
//! ```
//!
//! Completing an appointment turns it into a diagnosis and a prescription
//! and drops it from the pending list.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Client, Pet, Appointment, Prescription, etc.)
//! - [`repo`]: Generic in-memory repository with per-instance id sequences
//! - [`clinic`]: Orchestration facade and configuration
//! - [`input`]: Form field parsing
//! - [`display`]: Labels and attendance summaries
//! - [`logging`]: `tracing` subscriber setup

pub mod clinic;
pub mod display;
pub mod input;
pub mod logging;
pub mod models;
pub mod repo;

// Re-export commonly used types
pub use clinic::{Clinic, ClinicConfig, ClinicError, ClinicResult, RemovalPolicy};
pub use display::AttendanceSummary;
pub use models::{
    Appointment, Client, Diagnosis, Entity, EntityId, EntityKind, Medication, Pet, Prescription,
    Veterinarian,
};
pub use repo::{IdSequence, RepoError, Repository};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use input::{NewClient, NewPet, NewVeterinarian};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetClinicError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Referential conflict: {0}")]
    ReferentialConflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ClinicError> for VetClinicError {
    fn from(e: ClinicError) -> Self {
        match e {
            ClinicError::NotFound { .. } => VetClinicError::NotFound(e.to_string()),
            ClinicError::DuplicateId { .. } => VetClinicError::InvalidInput(e.to_string()),
            ClinicError::ReferentialConflict(msg) => VetClinicError::ReferentialConflict(msg),
            ClinicError::InvalidInput(msg) => VetClinicError::InvalidInput(msg),
        }
    }
}

impl From<input::InputError> for VetClinicError {
    fn from(e: input::InputError) -> Self {
        VetClinicError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for VetClinicError {
    fn from(e: serde_json::Error) -> Self {
        VetClinicError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for VetClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        VetClinicError::Internal(format!("Lock poisoned: {}", e))
    }
}

fn not_found(kind: EntityKind, id: EntityId) -> VetClinicError {
    ClinicError::NotFound { kind, id }.into()
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a clinic. `config_json` is a [`ClinicConfig`] document; `None` uses defaults.
#[uniffi::export]
pub fn open_clinic(config_json: Option<String>) -> Result<Arc<VetClinicCore>, VetClinicError> {
    let config = match config_json {
        Some(json) => ClinicConfig::from_json_str(&json)?,
        None => ClinicConfig::default(),
    };
    let clinic = if config.seed_sample_data {
        Clinic::with_sample_data(config)?
    } else {
        Clinic::new(config)
    };
    Ok(Arc::new(VetClinicCore {
        clinic: Arc::new(Mutex::new(clinic)),
    }))
}

/// Install a log subscriber. Returns `false` if one was already installed.
#[uniffi::export]
pub fn init_logging(json: bool) -> bool {
    if json {
        logging::init_json()
    } else {
        logging::init()
    }
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe clinic wrapper for FFI.
#[derive(uniffi::Object)]
pub struct VetClinicCore {
    clinic: Arc<Mutex<Clinic>>,
}

#[uniffi::export]
impl VetClinicCore {
    // =========================================================================
    // Client Operations
    // =========================================================================

    /// Register a client. Name and phone are required.
    pub fn register_client(
        &self,
        name: String,
        phone: String,
        email: String,
    ) -> Result<FfiClient, VetClinicError> {
        let client = NewClient { name, phone, email }.validate()?;
        let mut clinic = self.clinic.lock()?;
        Ok(clinic.register_client(client)?.into())
    }

    pub fn list_clients(&self) -> Result<Vec<FfiClient>, VetClinicError> {
        let clinic = self.clinic.lock()?;
        Ok(clinic.list_clients().into_iter().map(|c| c.into()).collect())
    }

    /// Edit a client's contact details.
    pub fn update_client(
        &self,
        client_id: u64,
        name: String,
        phone: String,
        email: String,
    ) -> Result<FfiClient, VetClinicError> {
        let mut client = NewClient { name, phone, email }.validate()?;
        client.id = client_id;
        let mut clinic = self.clinic.lock()?;
        clinic.update_client(client.clone())?;
        Ok(client.into())
    }

    /// Remove a client. Fails while the client still owns pets.
    pub fn remove_client(&self, client_id: u64) -> Result<(), VetClinicError> {
        let mut clinic = self.clinic.lock()?;
        let client = clinic
            .find_client(client_id)
            .ok_or_else(|| not_found(EntityKind::Client, client_id))?;
        clinic.remove_client(&client)?;
        Ok(())
    }

    // =========================================================================
    // Pet Operations
    // =========================================================================

    /// Register a pet for an existing client. `age` is the raw form text.
    pub fn register_pet(
        &self,
        name: String,
        species: String,
        breed: String,
        age: String,
        owner_id: u64,
    ) -> Result<FfiPet, VetClinicError> {
        let mut clinic = self.clinic.lock()?;
        let owner = clinic
            .find_client(owner_id)
            .ok_or_else(|| not_found(EntityKind::Client, owner_id))?;
        let pet = NewPet {
            name,
            species,
            breed,
            age,
            owner: Some(owner),
        }
        .validate()?;
        Ok(clinic.register_pet(pet)?.into())
    }

    pub fn list_pets(&self) -> Result<Vec<FfiPet>, VetClinicError> {
        let clinic = self.clinic.lock()?;
        Ok(clinic.list_pets().into_iter().map(|p| p.into()).collect())
    }

    pub fn pets_of_client(&self, client_id: u64) -> Result<Vec<FfiPet>, VetClinicError> {
        let clinic = self.clinic.lock()?;
        Ok(clinic
            .pets_of_client(client_id)
            .into_iter()
            .map(|p| p.into())
            .collect())
    }

    /// Edit a pet. The owner is unchanged.
    pub fn update_pet(
        &self,
        pet_id: u64,
        name: String,
        species: String,
        breed: String,
        age: String,
    ) -> Result<FfiPet, VetClinicError> {
        let mut clinic = self.clinic.lock()?;
        let existing = clinic
            .find_pet(pet_id)
            .ok_or_else(|| not_found(EntityKind::Pet, pet_id))?;
        let mut pet = NewPet {
            name,
            species,
            breed,
            age,
            owner: Some(existing.owner),
        }
        .validate()?;
        pet.id = pet_id;
        clinic.update_pet(pet.clone())?;
        Ok(pet.into())
    }

    pub fn remove_pet(&self, pet_id: u64) -> Result<(), VetClinicError> {
        let mut clinic = self.clinic.lock()?;
        let pet = clinic
            .find_pet(pet_id)
            .ok_or_else(|| not_found(EntityKind::Pet, pet_id))?;
        clinic.remove_pet(&pet)?;
        Ok(())
    }

    // =========================================================================
    // Veterinarian Operations
    // =========================================================================

    pub fn register_veterinarian(
        &self,
        name: String,
        license: String,
    ) -> Result<FfiVeterinarian, VetClinicError> {
        let vet = NewVeterinarian { name, license }.validate()?;
        let mut clinic = self.clinic.lock()?;
        Ok(clinic.register_veterinarian(vet)?.into())
    }

    pub fn list_veterinarians(&self) -> Result<Vec<FfiVeterinarian>, VetClinicError> {
        let clinic = self.clinic.lock()?;
        Ok(clinic
            .list_veterinarians()
            .into_iter()
            .map(|v| v.into())
            .collect())
    }

    pub fn update_veterinarian(
        &self,
        vet_id: u64,
        name: String,
        license: String,
    ) -> Result<FfiVeterinarian, VetClinicError> {
        let mut vet = NewVeterinarian { name, license }.validate()?;
        vet.id = vet_id;
        let mut clinic = self.clinic.lock()?;
        clinic.update_veterinarian(vet.clone())?;
        Ok(vet.into())
    }

    pub fn remove_veterinarian(&self, vet_id: u64) -> Result<(), VetClinicError> {
        let mut clinic = self.clinic.lock()?;
        let vet = clinic
            .find_veterinarian(vet_id)
            .ok_or_else(|| not_found(EntityKind::Veterinarian, vet_id))?;
        clinic.remove_veterinarian(&vet)?;
        Ok(())
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Book an appointment. `date_time` is `dd/MM/yyyy HH:mm[:ss]`.
    pub fn schedule_appointment(
        &self,
        pet_id: u64,
        client_id: u64,
        vet_id: u64,
        date_time: String,
    ) -> Result<FfiAppointment, VetClinicError> {
        let scheduled_at = input::parse_date_time(&date_time)?;
        let mut clinic = self.clinic.lock()?;
        let pet = clinic
            .find_pet(pet_id)
            .ok_or_else(|| not_found(EntityKind::Pet, pet_id))?;
        let client = clinic
            .find_client(client_id)
            .ok_or_else(|| not_found(EntityKind::Client, client_id))?;
        let vet = clinic
            .find_veterinarian(vet_id)
            .ok_or_else(|| not_found(EntityKind::Veterinarian, vet_id))?;
        let appointment = clinic.schedule_appointment(&pet, &client, &vet, scheduled_at)?;
        Ok(appointment.into())
    }

    /// Pending appointments.
    pub fn list_appointments(&self) -> Result<Vec<FfiAppointment>, VetClinicError> {
        let clinic = self.clinic.lock()?;
        Ok(clinic
            .list_appointments()
            .into_iter()
            .map(|a| a.into())
            .collect())
    }

    pub fn cancel_appointment(&self, appointment_id: u64) -> Result<(), VetClinicError> {
        let mut clinic = self.clinic.lock()?;
        let appointment = clinic
            .find_appointment(appointment_id)
            .ok_or_else(|| not_found(EntityKind::Appointment, appointment_id))?;
        clinic.remove_appointment(&appointment)?;
        Ok(())
    }

    /// Attend an appointment.
    ///
    /// `medications` is a comma-separated list such as
    /// "Amoxicilina 250mg, Meloxicam 0.5ml". The diagnosis is required.
    pub fn complete_appointment(
        &self,
        appointment_id: u64,
        diagnosis: String,
        medications: String,
    ) -> Result<FfiPrescription, VetClinicError> {
        let diagnosis = input::require("diagnosis", &diagnosis)?;
        let medications = input::parse_medications(&medications);
        let mut clinic = self.clinic.lock()?;
        let appointment = clinic
            .find_appointment(appointment_id)
            .ok_or_else(|| not_found(EntityKind::Appointment, appointment_id))?;
        let prescription = clinic.complete_appointment(&appointment, &diagnosis, medications)?;
        Ok(prescription.into())
    }

    /// Retained prescriptions (empty unless `retain_history` is set).
    pub fn list_prescriptions(&self) -> Result<Vec<FfiPrescription>, VetClinicError> {
        let clinic = self.clinic.lock()?;
        Ok(clinic
            .list_prescriptions()
            .into_iter()
            .map(|p| p.into())
            .collect())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe client.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiClient {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub label: String,
}

impl From<Client> for FfiClient {
    fn from(client: Client) -> Self {
        Self {
            label: display::client_label(&client),
            id: client.id,
            name: client.name,
            phone: client.phone,
            email: client.email,
        }
    }
}

/// FFI-safe pet.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPet {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub owner_id: u64,
    pub owner_name: String,
    pub label: String,
}

impl From<Pet> for FfiPet {
    fn from(pet: Pet) -> Self {
        Self {
            label: display::pet_label(&pet),
            id: pet.id,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            age: pet.age,
            owner_id: pet.owner.id,
            owner_name: pet.owner.name,
        }
    }
}

/// FFI-safe veterinarian.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVeterinarian {
    pub id: u64,
    pub name: String,
    pub license: String,
    pub label: String,
}

impl From<Veterinarian> for FfiVeterinarian {
    fn from(vet: Veterinarian) -> Self {
        Self {
            label: display::veterinarian_label(&vet),
            id: vet.id,
            name: vet.name,
            license: vet.license,
        }
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: u64,
    pub pet_id: u64,
    pub pet_name: String,
    pub client_id: u64,
    pub client_name: String,
    pub vet_id: u64,
    pub vet_name: String,
    /// `dd/MM/yyyy HH:mm:ss`
    pub scheduled_at: String,
    pub label: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            label: display::appointment_label(&appointment),
            scheduled_at: display::format_date_time(&appointment.scheduled_at),
            id: appointment.id,
            pet_id: appointment.pet.id,
            pet_name: appointment.pet.name,
            client_id: appointment.client.id,
            client_name: appointment.client.name,
            vet_id: appointment.veterinarian.id,
            vet_name: appointment.veterinarian.name,
        }
    }
}

/// FFI-safe medication.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub name: String,
    pub dosage: String,
    pub description: Option<String>,
}

impl From<Medication> for FfiMedication {
    fn from(medication: Medication) -> Self {
        Self {
            name: medication.name,
            dosage: medication.dosage,
            description: medication.description,
        }
    }
}

/// FFI-safe prescription with its attendance summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescription {
    pub id: u64,
    pub appointment: FfiAppointment,
    pub diagnosis: Option<String>,
    pub medications: Vec<FfiMedication>,
    pub summary_text: String,
}

impl From<Prescription> for FfiPrescription {
    fn from(prescription: Prescription) -> Self {
        let summary_text = AttendanceSummary::from_prescription(&prescription).to_text();
        Self {
            id: prescription.id,
            diagnosis: prescription.diagnosis_description().map(str::to_string),
            appointment: prescription.appointment.into(),
            medications: prescription
                .medications
                .into_iter()
                .map(|m| m.into())
                .collect(),
            summary_text,
        }
    }
}
