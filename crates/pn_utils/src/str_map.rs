use core::fmt::Debug;

use crate::hash::FixedHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// StrMap

/// A map keyed by `&'static str`, usually method names.
///
/// Insertion never overwrites: the first value stored under a name is kept.
/// This matches member lookup along a type's ancestry, where the most derived
/// declaration is visited first and must shadow the rest.
///
/// # Examples
///
/// ```
/// use pn_utils::StrMap;
///
/// let mut map = StrMap::new();
/// assert!(map.insert_if_absent("get_name", 1));
/// assert!(!map.insert_if_absent("get_name", 2));
/// assert_eq!(map.get("get_name"), Some(&1));
/// ```
pub struct StrMap<V>(HashMap<&'static str, V, FixedHashState>);

impl<V> StrMap<V> {
    /// Creates an empty `StrMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(FixedHashState))
    }

    /// Creates an empty `StrMap` with room for `capacity` names.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, FixedHashState))
    }

    /// Stores `value` under `name` unless the name is taken.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_if_absent(&mut self, name: &'static str, value: V) -> bool {
        match self.0.entry(name) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the value stored under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.get(name)
    }

    /// Returns `true` if `name` is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no names.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visits every entry in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &V)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }
}

impl<V> Default for StrMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for StrMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: Debug> Debug for StrMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
