//! Constant containers and their uniqueness policies.
//!
//! A container aggregates constants under a uniqueness rule and answers value lookups.
//! Two capability traits define the contracts, and two base types implement them over
//! insertion-order-preserving storage:
//!
//! - [`ConstantContainer`] / [`ConstantSet`] - a set of plain constants, keyed by value
//!   equality; duplicate values in the initial list collapse silently (first wins)
//! - [`RelationContainer`] / [`RelationMap`] - an ordered mapping from key value to its
//!   [`RelationConstant`]; duplicate key values are a hard construction error, because
//!   relation containers emulate enumeration-like unambiguous key spaces
//!
//! Containers are constructed once and immutable for their lifetime. Caller-defined
//! container types are newtypes over the base types that delegate the trait methods
//! and implement [`ContainerInit`](crate::ContainerInit) so the
//! [registry](crate::registry) can build them on demand; inline ("anonymous") containers
//! are just base-type values used directly.
//!
//! # Examples
//!
//! ```rust
//! use constel::{constants, relate, ConstantContainer, ConstantSet, RelationContainer, RelationMap};
//!
//! // Anonymous dedup container: "ONE" is stored once.
//! let set = ConstantSet::new(constants(["ONE", "ONE", "TWO"]));
//! assert_eq!(set.len(), 2);
//!
//! // Anonymous relation container: keys must be unique.
//! let map = RelationMap::new([
//!     relate("One", [1]),
//!     relate("Two", [2]),
//! ])?;
//! assert_eq!(map.relation_values(), vec![vec![1], vec![2]]);
//! # Ok::<(), constel::Error>(())
//! ```

mod map;
mod set;

pub use map::RelationMap;
pub use set::ConstantSet;

use std::hash::Hash;

use indexmap::IndexSet;

use crate::constant::{Constant, RelationConstant};

/// A container that stores constants with the same contained value type.
///
/// Invariant: no two stored constants have equal values. Iteration order is the
/// insertion order of first occurrence and is observable through [`keys`](Self::keys).
///
/// Only [`keys`](Self::keys) is required; the remaining queries have order-respecting
/// default implementations. Implementations backed by hashed storage (such as
/// [`ConstantSet`]) override [`key`](Self::key) with a constant-time lookup.
pub trait ConstantContainer {
    /// The contained key value type
    type Value: Eq + Hash + Clone;

    /// Returns all stored constants in insertion order of first occurrence
    fn keys(&self) -> impl Iterator<Item = &Constant<Self::Value>>;

    /// Returns the stored constant whose value equals `value`, if any
    fn key(&self, value: &Self::Value) -> Option<&Constant<Self::Value>> {
        self.keys().find(|constant| constant.value() == value)
    }

    /// Returns all key values of the container, in key order
    ///
    /// The result is duplicate-free by the container invariant.
    fn key_values(&self) -> IndexSet<Self::Value> {
        self.keys().map(|constant| constant.value().clone()).collect()
    }

    /// Returns true if the container stores a constant with the given value
    fn contains_value(&self, value: &Self::Value) -> bool {
        self.key(value).is_some()
    }

    /// Returns the number of stored constants
    fn len(&self) -> usize {
        self.keys().count()
    }

    /// Returns true if the container stores no constants
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container that stores relation constants under pairwise-distinct keys.
///
/// Extends [`ConstantContainer`]: the keys of the relation constants are the container's
/// constants. Insertion order of the initial list is preserved and observable through
/// [`relations`](Self::relations) and everything derived from it.
pub trait RelationContainer: ConstantContainer {
    /// The relation value type
    type Relation: Eq + Hash + Clone;

    /// Returns all stored relation constants in insertion order
    fn relations(&self) -> impl Iterator<Item = &RelationConstant<Self::Value, Self::Relation>>;

    /// Returns the relation constant registered for `key_value`, if any
    fn relation(
        &self,
        key_value: &Self::Value,
    ) -> Option<&RelationConstant<Self::Value, Self::Relation>> {
        self.relations().find(|relation| relation.value() == key_value)
    }

    /// Returns the plain relation values for each stored key, in key order
    fn relation_values(&self) -> Vec<Vec<Self::Relation>> {
        self.relations()
            .map(|relation| relation.relation_values().cloned().collect())
            .collect()
    }

    /// Returns the plain relation values registered for `key_value`, if the key is known
    fn relation_values_of(&self, key_value: &Self::Value) -> Option<Vec<Self::Relation>> {
        self.relation(key_value)
            .map(|relation| relation.relation_values().cloned().collect())
    }

    /// Returns true if any stored relation constant carries the given relation value
    fn any_relation_value(&self, value: &Self::Relation) -> bool {
        self.relations().any(|relation| relation.contains_relation(value))
    }
}
