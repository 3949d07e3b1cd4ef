//! Veterinarian models.

use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId, EntityKind, UNASSIGNED_ID};

/// A veterinarian who can be booked for appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Veterinarian {
    pub id: EntityId,
    pub name: String,
    /// Council registration (CRMV) or specialty text
    pub license: String,
}

impl Veterinarian {
    /// Create an unsaved veterinarian.
    pub fn new(name: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            license: license.into(),
        }
    }
}

impl_entity!(Veterinarian, EntityKind::Veterinarian);
