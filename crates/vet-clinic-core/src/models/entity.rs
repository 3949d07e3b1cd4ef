//! Identity shared by every stored record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric record identifier. Assigned by the owning repository.
pub type EntityId = u64;

/// Id carried by a record that has not been stored yet.
pub const UNASSIGNED_ID: EntityId = 0;

/// Record types known to the clinic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Client,
    Pet,
    Veterinarian,
    Appointment,
    Diagnosis,
    Prescription,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Client => "client",
            EntityKind::Pet => "pet",
            EntityKind::Veterinarian => "veterinarian",
            EntityKind::Appointment => "appointment",
            EntityKind::Diagnosis => "diagnosis",
            EntityKind::Prescription => "prescription",
        };
        f.write_str(name)
    }
}

/// A record that can live in a [`Repository`](crate::repo::Repository).
pub trait Entity: Clone {
    /// Kind reported in errors and log events.
    const KIND: EntityKind;

    /// Current id, [`UNASSIGNED_ID`] before the first save.
    fn id(&self) -> EntityId;

    /// Overwrite the id. Only repositories call this.
    fn set_id(&mut self, id: EntityId);

    /// Whether a repository has assigned this record an id.
    fn has_id(&self) -> bool {
        self.id() != UNASSIGNED_ID
    }
}

/// Implements [`Entity`] for a struct with a public `id: EntityId` field.
macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl $crate::models::Entity for $ty {
            const KIND: $crate::models::EntityKind = $kind;

            fn id(&self) -> $crate::models::EntityId {
                self.id
            }

            fn set_id(&mut self, id: $crate::models::EntityId) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_entity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::Client.to_string(), "client");
        assert_eq!(EntityKind::Veterinarian.to_string(), "veterinarian");
    }
}
