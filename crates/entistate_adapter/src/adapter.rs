//! Pure operations over normalized collections.

use crate::entity::{Entity, Patch};
use crate::state::EntityState;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Comparator that totally orders two entities.
///
/// Fixed at adapter construction; applies to every sort-affecting
/// operation for the lifetime of the adapter.
pub type SortComparer<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Factory of pure functions over [`EntityState`].
///
/// The adapter itself is stateless: it holds only the optional sort
/// comparator. Every operation takes a collection value and returns a new
/// one; the input is left untouched, so callers may hold on to previous
/// values and observe them unchanged.
///
/// Bulk operations are defined as the sequential fold of their single-item
/// counterpart over the input, in input order. When the input repeats an
/// id, the later entry wins.
///
/// Sorting uses the standard library sort; stability across
/// equal-comparing entities beyond what that provides is not promised.
pub struct EntityAdapter<T: Entity> {
    sort_comparer: Option<SortComparer<T>>,
}

impl<T: Entity> EntityAdapter<T> {
    /// Creates an adapter that preserves insertion order.
    pub fn new() -> Self {
        Self {
            sort_comparer: None,
        }
    }

    /// Creates an adapter that keeps collections sorted by `comparer`.
    pub fn with_sort_comparer<F>(comparer: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            sort_comparer: Some(Box::new(comparer)),
        }
    }

    /// Returns true if a sort comparator is configured.
    pub fn is_sorted(&self) -> bool {
        self.sort_comparer.is_some()
    }

    /// Creates the empty collection.
    pub fn initial(&self) -> EntityState<T> {
        EntityState::new()
    }

    /// Sorts ids by the comparator applied to their entities, when one
    /// is configured. Every id must be present in `entities`.
    fn sort_ids(&self, ids: &mut [T::Id], entities: &HashMap<T::Id, T>) {
        if let Some(comparer) = &self.sort_comparer {
            ids.sort_by(|a, b| comparer(&entities[a], &entities[b]));
        }
    }

    /// Replaces the entire collection with `entities`.
    ///
    /// A later duplicate id in the input overwrites the earlier entity
    /// (last-wins) while keeping the first occurrence's position.
    pub fn set_all<I>(&self, entities: I) -> EntityState<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut ids = Vec::new();
        let mut map = HashMap::new();
        for entity in entities {
            let id = entity.id();
            if map.insert(id.clone(), entity).is_none() {
                ids.push(id);
            }
        }
        self.sort_ids(&mut ids, &map);
        EntityState { ids, entities: map }
    }

    /// Adds one entity. No-op if the id is already present; the stored
    /// entity is not overwritten.
    pub fn add_one(&self, state: &EntityState<T>, entity: T) -> EntityState<T> {
        if state.entities.contains_key(&entity.id()) {
            return state.clone();
        }
        let mut next = state.clone();
        let id = entity.id();
        next.entities.insert(id.clone(), entity);
        next.ids.push(id);
        self.sort_ids(&mut next.ids, &next.entities);
        next
    }

    /// Adds many entities, skipping any whose id is already present.
    /// New ids are appended in filtered input order.
    pub fn add_many<I>(&self, state: &EntityState<T>, entities: I) -> EntityState<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut next = state.clone();
        for entity in entities {
            let id = entity.id();
            if next.entities.contains_key(&id) {
                continue;
            }
            next.entities.insert(id.clone(), entity);
            next.ids.push(id);
        }
        self.sort_ids(&mut next.ids, &next.entities);
        next
    }

    /// Inserts the entity if absent, overwrites it if present.
    pub fn set_one(&self, state: &EntityState<T>, entity: T) -> EntityState<T> {
        let mut next = state.clone();
        Self::set_in_place(&mut next, entity);
        self.sort_ids(&mut next.ids, &next.entities);
        next
    }

    /// Applies [`set_one`](Self::set_one) per entity in input order.
    pub fn set_many<I>(&self, state: &EntityState<T>, entities: I) -> EntityState<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut next = state.clone();
        for entity in entities {
            Self::set_in_place(&mut next, entity);
        }
        self.sort_ids(&mut next.ids, &next.entities);
        next
    }

    fn set_in_place(state: &mut EntityState<T>, entity: T) {
        let id = entity.id();
        if state.entities.insert(id.clone(), entity).is_none() {
            state.ids.push(id);
        }
    }

    /// Removes the entity with this id. No-op if absent.
    pub fn remove_one(&self, state: &EntityState<T>, id: &T::Id) -> EntityState<T> {
        if !state.entities.contains_key(id) {
            return state.clone();
        }
        let mut next = state.clone();
        next.entities.remove(id);
        next.ids.retain(|i| i != id);
        next
    }

    /// Removes every listed id. Ids not present are ignored.
    pub fn remove_many(&self, state: &EntityState<T>, ids: &[T::Id]) -> EntityState<T> {
        let mut next = state.clone();
        for id in ids {
            if next.entities.remove(id).is_some() {
                next.ids.retain(|i| i != id);
            }
        }
        next
    }

    /// Empties the collection.
    pub fn remove_all(&self) -> EntityState<T> {
        EntityState::new()
    }

    /// Merges a patch into the entity with this id. No-op if absent.
    ///
    /// Re-sorts even when the patched fields do not affect the
    /// comparator, matching [`set_one`](Self::set_one).
    pub fn update_one<P>(&self, state: &EntityState<T>, id: &T::Id, patch: &P) -> EntityState<T>
    where
        P: Patch<T>,
    {
        let Some(current) = state.entities.get(id) else {
            return state.clone();
        };
        let mut updated = current.clone();
        patch.apply(&mut updated);
        let mut next = state.clone();
        next.entities.insert(id.clone(), updated);
        self.sort_ids(&mut next.ids, &next.entities);
        next
    }

    /// Applies [`update_one`](Self::update_one) per `(id, patch)` pair
    /// in input order.
    pub fn update_many<P, I>(&self, state: &EntityState<T>, updates: I) -> EntityState<T>
    where
        P: Patch<T>,
        I: IntoIterator<Item = (T::Id, P)>,
    {
        let mut next = state.clone();
        for (id, patch) in updates {
            if let Some(current) = next.entities.get_mut(&id) {
                patch.apply(current);
            }
        }
        self.sort_ids(&mut next.ids, &next.entities);
        next
    }

    /// Alias of [`set_one`](Self::set_one): insert-or-overwrite.
    pub fn upsert_one(&self, state: &EntityState<T>, entity: T) -> EntityState<T> {
        self.set_one(state, entity)
    }

    /// Alias of [`set_many`](Self::set_many).
    pub fn upsert_many<I>(&self, state: &EntityState<T>, entities: I) -> EntityState<T>
    where
        I: IntoIterator<Item = T>,
    {
        self.set_many(state, entities)
    }
}

impl<T: Entity> Default for EntityAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> std::fmt::Debug for EntityAdapter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityAdapter")
            .field("sorted", &self.sort_comparer.is_some())
            .finish_non_exhaustive()
    }
}
