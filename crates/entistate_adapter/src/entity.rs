//! Entity and patch traits.

use std::fmt;
use std::hash::Hash;

/// A record with a stable, unique, opaque identifier.
///
/// The adapter never inspects an entity beyond its id and, when one is
/// configured, the sort comparator.
pub trait Entity: Clone {
    /// The identifier type. Ids must be cheap to clone and hashable;
    /// they are used as map keys and kept in the ordered id list.
    type Id: Clone + Eq + Hash + fmt::Debug;

    /// Returns this entity's identifier.
    fn id(&self) -> Self::Id;
}

/// A partial set of changes merged into an existing entity.
///
/// Each entity type defines its own patch struct of optional fields and
/// writes the merge by hand, field by field. Implementations must not
/// change the target's id.
pub trait Patch<T> {
    /// Merges the present fields of this patch into `target`.
    fn apply(&self, target: &mut T);
}
