use std::fmt;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::constant::{Constant, RelationConstant};
use crate::container::{ConstantContainer, RelationContainer};
use crate::{Error, Result};

/// Order-preserving map from key value to relation constant, with strict key uniqueness.
///
/// The base implementation of [`RelationContainer`]: materializes an immutable backing
/// map from an initial ordered list of [`RelationConstant`]s. Two elements sharing an
/// equal key value fail construction with [`Error::DuplicateKey`] - never a silent
/// dedup - since relation containers stand in for enumeration-like exhaustive,
/// unambiguous key spaces. Relation values, by contrast, may repeat freely across and
/// within keys.
///
/// Key order is the insertion order of the initial list and is observable through every
/// query that returns multiple items.
///
/// # Examples
///
/// ```rust
/// use constel::{relate, RelationContainer, RelationMap};
///
/// let map = RelationMap::new([
///     relate("One", [1]),
///     relate("Two", [2]),
///     relate("Three", [3]),
///     relate("Four-five", [4, 5]),
/// ])?;
///
/// assert_eq!(map.relation_values(), vec![vec![1], vec![2], vec![3], vec![4, 5]]);
/// assert!(map.any_relation_value(&3));
/// assert!(!map.any_relation_value(&10));
/// # Ok::<(), constel::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMap<L: Eq + Hash, R> {
    relations: IndexMap<L, RelationConstant<L, R>>,
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> RelationMap<L, R> {
    /// Creates a container from an initial ordered list of relation constants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] when two elements share an equal key value. The
    /// first occurrence of the key is reported; nothing is constructed.
    pub fn new(initial: impl IntoIterator<Item = RelationConstant<L, R>>) -> Result<Self>
    where
        L: fmt::Debug,
    {
        let mut relations = IndexMap::new();
        for relation in initial {
            match relations.entry(relation.value().clone()) {
                Entry::Occupied(entry) => {
                    return Err(Error::DuplicateKey {
                        key: format!("{:?}", entry.key()),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(relation);
                }
            }
        }
        Ok(RelationMap { relations })
    }
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> ConstantContainer for RelationMap<L, R> {
    type Value = L;

    fn keys(&self) -> impl Iterator<Item = &Constant<L>> {
        self.relations.values().map(RelationConstant::key)
    }

    fn key(&self, value: &L) -> Option<&Constant<L>> {
        self.relations.get(value).map(RelationConstant::key)
    }

    fn len(&self) -> usize {
        self.relations.len()
    }
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> RelationContainer for RelationMap<L, R> {
    type Relation = R;

    fn relations(&self) -> impl Iterator<Item = &RelationConstant<L, R>> {
        self.relations.values()
    }

    fn relation(&self, key_value: &L) -> Option<&RelationConstant<L, R>> {
        self.relations.get(key_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::relate;

    fn demo_map() -> RelationMap<&'static str, i32> {
        RelationMap::new([
            relate("One", [1]),
            relate("Two", [2]),
            relate("Three", [3]),
            relate("Four-five", [4, 5]),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_keys_fail_construction() {
        let result = RelationMap::new([relate("KEY", ["VALUE1"]), relate("KEY", ["VALUE2"])]);
        assert!(matches!(result, Err(Error::DuplicateKey { .. })));
    }

    #[test]
    fn test_duplicate_keys_fail_every_time() {
        // Strict uniqueness is not a first-call effect; reconstruction fails identically.
        for _ in 0..3 {
            let result = RelationMap::new([relate("KEY", [1]), relate("KEY", [2])]);
            assert!(matches!(result, Err(Error::DuplicateKey { .. })));
        }
    }

    #[test]
    fn test_duplicate_relation_values_are_permitted() {
        let map = RelationMap::new([relate("A", [1, 1]), relate("B", [1])]).unwrap();
        assert_eq!(map.relation_values(), vec![vec![1, 1], vec![1]]);
    }

    #[test]
    fn test_key_order_matches_initial_list() {
        let map = demo_map();
        let keys: Vec<_> = map.keys().map(|c| *c.value()).collect();
        assert_eq!(keys, vec!["One", "Two", "Three", "Four-five"]);
    }

    #[test]
    fn test_relation_values_ordered_per_key() {
        let map = demo_map();
        let values = map.relation_values();
        assert_eq!(values, vec![vec![1], vec![2], vec![3], vec![4, 5]]);
        assert!(values[values.len() - 1].contains(&4));
        assert!(values[values.len() - 1].contains(&5));
    }

    #[test]
    fn test_relation_lookup_by_key_value() {
        let map = demo_map();
        let relation = map.relation(&"Two").unwrap();
        assert_eq!(*relation.value(), "Two");
        assert!(relation.contains_relation(&2));
        assert!(map.relation(&"Seven").is_none());
    }

    #[test]
    fn test_relation_values_of_unknown_key_is_absent() {
        let map = demo_map();
        assert_eq!(map.relation_values_of(&"One"), Some(vec![1]));
        assert_eq!(map.relation_values_of(&"Seven"), None);
    }

    #[test]
    fn test_empty_container_is_legal() {
        let map: RelationMap<&str, i32> = RelationMap::new([]).unwrap();
        assert!(map.is_empty());
        assert!(map.relation_values().is_empty());
    }
}
