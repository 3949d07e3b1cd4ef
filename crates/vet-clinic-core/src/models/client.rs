//! Client (pet owner) models.

use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId, EntityKind, UNASSIGNED_ID};

/// A clinic client. Owns zero or more pets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    /// Repository-assigned id
    pub id: EntityId,
    /// Full name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email (may be empty)
    pub email: String,
}

impl Client {
    /// Create an unsaved client.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether an email address was provided.
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

impl_entity!(Client, EntityKind::Client);
