//! Generic ordered in-memory repository.

use super::{IdSequence, RepoError, RepoResult};
use crate::models::{Entity, EntityId};

/// Ordered in-memory collection of one record type.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    items: Vec<T>,
    sequence: IdSequence,
}

impl<T: Entity> Repository<T> {
    /// Create an empty repository with a fresh id sequence.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            sequence: IdSequence::new(),
        }
    }

    /// Store a record, assigning the next id if it has none.
    ///
    /// Records arriving with an id keep it, provided no stored record
    /// already uses that id. Returns the stored copy.
    pub fn add(&mut self, mut entity: T) -> RepoResult<T> {
        if entity.has_id() {
            let id = entity.id();
            if self.contains(id) {
                tracing::warn!(kind = %T::KIND, id, "duplicate id rejected");
                return Err(RepoError::DuplicateId { kind: T::KIND, id });
            }
            if !self.sequence.observe(id) {
                tracing::warn!(kind = %T::KIND, id, "id outside assignable range");
                return Err(RepoError::IdExhausted { kind: T::KIND, id });
            }
        } else {
            let id = self.sequence.next_id().ok_or(RepoError::IdExhausted {
                kind: T::KIND,
                id: EntityId::MAX,
            })?;
            entity.set_id(id);
        }

        tracing::debug!(kind = %T::KIND, id = entity.id(), "record added");
        self.items.push(entity.clone());
        Ok(entity)
    }

    /// Copy of every stored record, in insertion order.
    pub fn list_all(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Find a record by id.
    pub fn find_by_id(&self, id: EntityId) -> Option<T> {
        let found = self.get(id).cloned();
        if found.is_none() {
            tracing::debug!(kind = %T::KIND, id, "record not found");
        }
        found
    }

    /// Borrow a record by id.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Remove the stored record with the same id as `entity`.
    pub fn remove(&mut self, entity: &T) -> RepoResult<T> {
        self.remove_by_id(entity.id())
    }

    /// Remove the first record with this id and return it.
    pub fn remove_by_id(&mut self, id: EntityId) -> RepoResult<T> {
        match self.position(id) {
            Some(index) => {
                let removed = self.items.remove(index);
                tracing::debug!(kind = %T::KIND, id, "record removed");
                Ok(removed)
            }
            None => {
                tracing::warn!(kind = %T::KIND, id, "record not found for removal");
                Err(RepoError::NotFound { kind: T::KIND, id })
            }
        }
    }

    /// Replace the stored record with the same id. Returns the previous version.
    pub fn update(&mut self, entity: T) -> RepoResult<T> {
        let id = entity.id();
        match self.position(id) {
            Some(index) => {
                let previous = std::mem::replace(&mut self.items[index], entity);
                tracing::debug!(kind = %T::KIND, id, "record updated");
                Ok(previous)
            }
            None => {
                tracing::warn!(kind = %T::KIND, id, "record not found for update");
                Err(RepoError::NotFound { kind: T::KIND, id })
            }
        }
    }

    /// Whether a record with this id is stored.
    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    /// Iterate stored records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}
