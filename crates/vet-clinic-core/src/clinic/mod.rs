//! Orchestration facade over the clinic repositories.
//!
//! Every business operation goes through [`Clinic`]. Failures come back as
//! [`ClinicError`] values; nothing here is fatal.

mod config;
mod facade;
mod sample;

pub use config::*;
pub use facade::*;

use thiserror::Error;

use crate::input::InputError;
use crate::models::{EntityId, EntityKind};
use crate::repo::RepoError;

/// Clinic operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClinicError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },

    #[error("{kind} {id} already registered")]
    DuplicateId { kind: EntityKind, id: EntityId },

    #[error("Referential conflict: {0}")]
    ReferentialConflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<RepoError> for ClinicError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound { kind, id } => ClinicError::NotFound { kind, id },
            RepoError::DuplicateId { kind, id } => ClinicError::DuplicateId { kind, id },
            RepoError::IdExhausted { .. } => ClinicError::InvalidInput(e.to_string()),
        }
    }
}

impl From<InputError> for ClinicError {
    fn from(e: InputError) -> Self {
        ClinicError::InvalidInput(e.to_string())
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;
