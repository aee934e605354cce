//! Click-to-sort state.

use std::cmp::Ordering;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orients an ascending comparison to this direction.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A sortable column of a row type.
///
/// Each key compares two rows by its own field, so numeric columns
/// compare numerically and text columns lexicographically.
pub trait SortKey<T>: Copy + PartialEq {
    /// Compares two rows by this column, ascending.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The currently selected sort column and direction.
///
/// Clicking the selected column again toggles the direction; clicking a
/// different column selects it and resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    key: K,
    direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    /// Creates a sort state on `key`, ascending.
    pub fn new(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Returns the selected column key.
    pub fn key(&self) -> K {
        self.key
    }

    /// Returns the current direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Handles a header click on `key`.
    pub fn click(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Sorts rows in place by the selected column and direction.
    pub fn sort<T>(&self, rows: &mut [T])
    where
        K: SortKey<T>,
    {
        rows.sort_by(|a, b| self.direction.orient(self.key.compare(a, b)));
    }
}
