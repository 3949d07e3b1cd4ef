//! Diagnosis, prescription and medication models.

use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::entity::{EntityId, UNASSIGNED_ID};

/// A prescribed medication. Value object, no identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Drug name
    pub name: String,
    /// Dosage text (e.g., "10mg"), may be empty
    pub dosage: String,
    /// Optional free-text instructions
    pub description: Option<String>,
}

impl Medication {
    /// Create a medication without instructions.
    pub fn new(name: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            description: None,
        }
    }

    /// Attach free-text instructions.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outcome of an attended appointment. Ids come from the clinic's
/// diagnosis sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diagnosis {
    pub id: EntityId,
    /// Appointment this diagnosis was made in
    pub appointment: Appointment,
    /// Free-text findings
    pub description: String,
}

impl Diagnosis {
    /// Create an unsaved diagnosis.
    pub fn new(appointment: Appointment, description: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            appointment,
            description: description.into(),
        }
    }
}

/// Medications prescribed at the end of an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    /// Id from the clinic's prescription sequence
    pub id: EntityId,
    /// Appointment the prescription was issued in
    pub appointment: Appointment,
    /// Linked diagnosis, if any
    pub diagnosis: Option<Diagnosis>,
    /// Ordered medication list
    pub medications: Vec<Medication>,
}

impl Prescription {
    /// Create an unsaved prescription with no diagnosis attached.
    pub fn new(appointment: Appointment, medications: Vec<Medication>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            appointment,
            diagnosis: None,
            medications,
        }
    }

    /// Link the diagnosis made in the same appointment.
    pub fn with_diagnosis(mut self, diagnosis: Diagnosis) -> Self {
        self.diagnosis = Some(diagnosis);
        self
    }

    /// Diagnosis text, if a diagnosis is linked.
    pub fn diagnosis_description(&self) -> Option<&str> {
        self.diagnosis.as_ref().map(|d| d.description.as_str())
    }

    /// Whether nothing was prescribed.
    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }
}
