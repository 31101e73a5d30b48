//! Field carriers used by fluent mutators.
//!
//! Field types double as copy-policy declarations: owned values, `Vec`,
//! maps and `Box` are deep-cloned when a builder is cloned, while a
//! [`Shared`] field stays aliased between the source and the clone.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A sub-entity reference that cloned builders share.
///
/// Cloning a `Shared` aliases the same value; use [`Shared::deep_clone`] to
/// detach. Equality, serialization and validation look at the value, not
/// the pointer.
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Borrows the shared value.
    ///
    /// # Panics
    /// If the value is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrows the shared value; every alias observes the change.
    ///
    /// # Panics
    /// If the value is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Applies `f` to the shared value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.borrow_mut());
    }

    /// Returns true if both handles point at the same value.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: Clone> Shared<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }

    /// Returns a new handle to an independent copy of the value.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&*self.0.borrow()).finish()
    }
}

impl<T: Serialize> Serialize for Shared<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Shared<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

/// An ordered field an append-mutator can push onto.
pub trait Sequence<V> {
    fn push_item(&mut self, value: V);
}

impl<V> Sequence<V> for Vec<V> {
    fn push_item(&mut self, value: V) {
        self.push(value);
    }
}

/// Absent sequences are created on first append.
impl<V> Sequence<V> for Option<Vec<V>> {
    fn push_item(&mut self, value: V) {
        self.get_or_insert_with(Vec::new).push(value);
    }
}

/// A keyed field a map-mutator can insert into. Existing keys are
/// overwritten; the previous value is returned.
pub trait Mapping<K, V> {
    fn upsert(&mut self, key: K, value: V) -> Option<V>;
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping<K, V> for HashMap<K, V, S> {
    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

/// Absent maps are created on first insert.
impl<K: Eq + Hash, V, S: BuildHasher + Default> Mapping<K, V> for Option<HashMap<K, V, S>> {
    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.get_or_insert_with(HashMap::default).insert(key, value)
    }
}

impl<K: Ord, V> Mapping<K, V> for Option<BTreeMap<K, V>> {
    fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.get_or_insert_with(BTreeMap::new).insert(key, value)
    }
}
