//! In-memory repository layer.
//!
//! One [`Repository`] per record type, each with its own [`IdSequence`].
//! Storage is an ordered `Vec`; lookups are linear scans by id.

mod repository;
mod sequence;

pub use repository::*;
pub use sequence::*;

use thiserror::Error;

use crate::models::{EntityId, EntityKind};

/// Repository errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },

    #[error("{kind} {id} already stored")]
    DuplicateId { kind: EntityKind, id: EntityId },

    #[error("{kind} id {id} is outside the assignable range")]
    IdExhausted { kind: EntityKind, id: EntityId },
}

pub type RepoResult<T> = Result<T, RepoError>;
