use std::hash::Hash;

use indexmap::IndexSet;

use crate::constant::Constant;
use crate::container::ConstantContainer;

/// Order-preserving set of constants with silent deduplication.
///
/// The base implementation of [`ConstantContainer`]: materializes an immutable backing
/// set from an initial ordered list. Duplicate-valued entries collapse into the first
/// occurrence, which keeps its position; this is deliberately more lenient than
/// [`RelationMap`](crate::RelationMap), which treats duplicates as an error.
///
/// Used directly for inline containers, or wrapped in a named newtype that delegates
/// [`ConstantContainer`] and implements [`ContainerInit`](crate::ContainerInit) for
/// registry access.
///
/// # Examples
///
/// ```rust
/// use constel::{constants, ConstantContainer, ConstantSet};
///
/// let set = ConstantSet::from_values(["ONE", "ONE", "TWO", "TWO"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains_value(&"TWO"));
///
/// // First occurrence wins and keeps its position.
/// let order: Vec<_> = set.keys().map(|c| *c.value()).collect();
/// assert_eq!(order, vec!["ONE", "TWO"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantSet<T: Eq + Hash> {
    constants: IndexSet<Constant<T>>,
}

impl<T: Eq + Hash + Clone> ConstantSet<T> {
    /// Creates a container from an initial ordered list of constants.
    ///
    /// Duplicate-valued entries are collapsed silently; an empty list yields a legal
    /// empty container.
    #[must_use]
    pub fn new(initial: impl IntoIterator<Item = Constant<T>>) -> Self {
        ConstantSet {
            constants: initial.into_iter().collect(),
        }
    }

    /// Creates a container directly from plain values, wrapping each in a [`Constant`]
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        ConstantSet::new(values.into_iter().map(Constant::new))
    }
}

impl<T: Eq + Hash + Clone> ConstantContainer for ConstantSet<T> {
    type Value = T;

    fn keys(&self) -> impl Iterator<Item = &Constant<T>> {
        self.constants.iter()
    }

    fn key(&self, value: &T) -> Option<&Constant<T>> {
        self.constants.get(value)
    }

    fn len(&self) -> usize {
        self.constants.len()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<Constant<T>> for ConstantSet<T> {
    fn from_iter<I: IntoIterator<Item = Constant<T>>>(iter: I) -> Self {
        ConstantSet::new(iter)
    }
}
