//! The normalized collection value.

use crate::entity::Entity;
use std::collections::HashMap;

/// A normalized collection of entities.
///
/// `EntityState<T>` pairs an ordered id list with an id-to-entity map.
/// The two are kept consistent by the operations on
/// [`EntityAdapter`](crate::EntityAdapter): every id appears exactly once
/// and maps to exactly one entity.
///
/// Values are immutable from the outside. Consumers read through the
/// selectors; new values are produced by adapter operations.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState<T: Entity> {
    /// Ordered ids, no duplicates.
    pub(crate) ids: Vec<T::Id>,
    /// Entity per id. Key set equals the id list.
    pub(crate) entities: HashMap<T::Id, T>,
}

impl<T: Entity> EntityState<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            entities: HashMap::new(),
        }
    }

    /// Returns all entities in id order.
    pub fn select_all(&self) -> Vec<&T> {
        self.ids.iter().map(|id| &self.entities[id]).collect()
    }

    /// Looks up an entity by id.
    ///
    /// An absent id is a normal outcome, not an error.
    pub fn select_by_id(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id)
    }

    /// Returns the ordered ids.
    pub fn select_ids(&self) -> &[T::Id] {
        &self.ids
    }

    /// Returns the number of entities.
    pub fn select_total(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the collection holds no entities.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns true if an entity with this id is present.
    pub fn contains(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    /// Iterates over entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.ids.iter().map(|id| &self.entities[id])
    }
}

impl<T: Entity> Default for EntityState<T> {
    fn default() -> Self {
        Self::new()
    }
}
