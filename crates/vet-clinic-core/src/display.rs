//! Presentation-only formatting.
//!
//! Labels for list widgets and the attendance summary shown once an
//! appointment is completed. Models stay free of display concerns.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Client, EntityId, Pet, Prescription, Veterinarian};

/// Display format for dates, `dd/MM/yyyy HH:mm:ss`.
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_DISPLAY_FORMAT).to_string()
}

/// "João Silva (ID: 1)"
pub fn client_label(client: &Client) -> String {
    format!("{} (ID: {})", client.name, client.id)
}

/// "Rex (Cachorro, ID: 1)"
pub fn pet_label(pet: &Pet) -> String {
    format!("{} ({}, ID: {})", pet.name, pet.species, pet.id)
}

/// "Dra. Ana Costa (Clínica Geral, ID: 1)"
pub fn veterinarian_label(vet: &Veterinarian) -> String {
    format!("{} ({}, ID: {})", vet.name, vet.license, vet.id)
}

/// "#3 Rex with Dra. Ana Costa at 02/05/2026 10:30:00"
pub fn appointment_label(appointment: &Appointment) -> String {
    format!(
        "#{} {} with {} at {}",
        appointment.id,
        appointment.pet.name,
        appointment.veterinarian.name,
        format_date_time(&appointment.scheduled_at)
    )
}

/// One prescribed medication in a summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    pub name: String,
    pub dosage: String,
    pub description: Option<String>,
}

/// Flattened view of a completed appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSummary {
    pub prescription_id: EntityId,
    pub appointment_id: EntityId,
    pub pet_name: String,
    pub client_name: String,
    pub veterinarian_name: String,
    /// Formatted with [`DATE_TIME_DISPLAY_FORMAT`]
    pub scheduled_at: String,
    pub diagnosis: Option<String>,
    pub medications: Vec<SummaryLine>,
}

impl AttendanceSummary {
    pub fn from_prescription(prescription: &Prescription) -> Self {
        let appointment = &prescription.appointment;
        Self {
            prescription_id: prescription.id,
            appointment_id: appointment.id,
            pet_name: appointment.pet.name.clone(),
            client_name: appointment.client.name.clone(),
            veterinarian_name: appointment.veterinarian.name.clone(),
            scheduled_at: format_date_time(&appointment.scheduled_at),
            diagnosis: prescription.diagnosis_description().map(str::to_string),
            medications: prescription
                .medications
                .iter()
                .map(|m| SummaryLine {
                    name: m.name.clone(),
                    dosage: m.dosage.clone(),
                    description: m.description.clone(),
                })
                .collect(),
        }
    }

    /// Plain-text summary for dialogs and logs.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Attendance #{} for {} ({}) with {} on {}\n",
            self.appointment_id,
            self.pet_name,
            self.client_name,
            self.veterinarian_name,
            self.scheduled_at
        );
        out.push_str(&format!(
            "Diagnosis: {}\n",
            self.diagnosis.as_deref().unwrap_or("-")
        ));
        out.push_str("Prescription:\n");
        if self.medications.is_empty() {
            out.push_str("  (none)\n");
        }
        for line in &self.medications {
            if line.dosage.is_empty() {
                out.push_str(&format!("  - {}", line.name));
            } else {
                out.push_str(&format!("  - {} ({})", line.name, line.dosage));
            }
            if let Some(description) = &line.description {
                out.push_str(&format!(": {}", description));
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
