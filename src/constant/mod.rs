//! Constant value objects.
//!
//! This module provides the two value types everything else in the crate is built from:
//!
//! - [`Constant`] - an immutable wrapper around a single value, usable as a map or set key
//! - [`RelationConstant`] - a constant whose identity is a key value, additionally carrying
//!   an ordered collection of related constants of a possibly different type
//!
//! Both are pure value objects: no interior mutability, no side effects, structural
//! (value-based) equality and hashing.
//!
//! # Examples
//!
//! ```rust
//! use constel::{of, relate};
//!
//! let one = of(1);
//! assert_eq!(*one.value(), 1);
//!
//! let four_five = relate("Four-five", [4, 5]);
//! assert_eq!(*four_five.value(), "Four-five");
//! assert_eq!(four_five.relations().len(), 2);
//! ```

use std::borrow::Borrow;
use std::fmt;

/// An immutable constant holding one value.
///
/// Equality and hashing are defined by the contained value alone, so a `Constant<T>`
/// hashes and compares exactly like its `T` and can stand in for it as a dictionary key.
/// Construction is usually done through [`of`](crate::of).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// Creates a new constant wrapping `value`
    #[must_use]
    pub fn new(value: T) -> Self {
        Constant { value }
    }

    /// Returns a reference to the contained value
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the constant and returns the contained value
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> From<T> for Constant<T> {
    fn from(value: T) -> Self {
        Constant::new(value)
    }
}

// A single-field struct's derived Hash and Eq delegate to the field, so borrowing
// `Constant<T>` as `T` keeps lookups by plain value consistent with stored keys.
impl<T> Borrow<T> for Constant<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant({:?})", self.value)
    }
}

impl<T: fmt::Display> fmt::Display for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// A constant that contains a key and its relations.
///
/// The key is a [`Constant<L>`] and the relations are an ordered collection of
/// [`Constant<R>`]. The relation constant's own value is defined as its key's value:
/// [`value()`](RelationConstant::value) forwards to the key. Relations may be empty,
/// and duplicate relation values are permitted and preserved in order.
///
/// Construction is usually done through [`relate`](crate::relate).
///
/// # Examples
///
/// ```rust
/// use constel::relate;
///
/// let two = relate("Two", [2]);
/// assert_eq!(*two.value(), "Two");
/// assert_eq!(*two.key().value(), "Two");
/// assert_eq!(*two.relations()[0].value(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RelationConstant<L, R> {
    key: Constant<L>,
    relations: Vec<Constant<R>>,
}

impl<L, R> RelationConstant<L, R> {
    /// Creates a new relation constant from a key constant and its relation constants
    #[must_use]
    pub fn new(key: Constant<L>, relations: Vec<Constant<R>>) -> Self {
        RelationConstant { key, relations }
    }

    /// Returns the key constant
    #[must_use]
    pub fn key(&self) -> &Constant<L> {
        &self.key
    }

    /// Returns the contained value, which is always the key's value
    #[must_use]
    pub fn value(&self) -> &L {
        self.key.value()
    }

    /// Returns the relations as constants, in construction order
    #[must_use]
    pub fn relations(&self) -> &[Constant<R>] {
        &self.relations
    }

    /// Returns an iterator over the plain relation values, in construction order
    pub fn relation_values(&self) -> impl Iterator<Item = &R> {
        self.relations.iter().map(Constant::value)
    }

    /// Returns true if any relation carries a value equal to `value`
    pub fn contains_relation(&self, value: &R) -> bool
    where
        R: PartialEq,
    {
        self.relation_values().any(|v| v == value)
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for RelationConstant<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&R> = self.relation_values().collect();
        write!(f, "RelationConstant({:?} -> {:?})", self.key.value(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_value() {
        let constant = Constant::new("One");
        assert_eq!(*constant.value(), "One");
        assert_eq!(constant.into_value(), "One");
    }

    #[test]
    fn test_constant_equality_is_structural() {
        assert_eq!(Constant::new(1), Constant::new(1));
        assert_ne!(Constant::new(1), Constant::new(2));
        assert_eq!(Constant::from("A"), Constant::new("A"));
    }

    #[test]
    fn test_constant_usable_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Constant::new("One"), 1);
        assert_eq!(map.get(&Constant::new("One")), Some(&1));
    }

    #[test]
    fn test_relation_value_forwards_to_key() {
        let rc = RelationConstant::new(
            Constant::new("Two"),
            vec![Constant::new(2)],
        );
        assert_eq!(rc.value(), rc.key().value());
        assert_eq!(*rc.value(), "Two");
    }

    #[test]
    fn test_relations_preserve_order_and_duplicates() {
        let rc = RelationConstant::new(
            Constant::new("K"),
            vec![Constant::new(4), Constant::new(5), Constant::new(4)],
        );
        let values: Vec<_> = rc.relation_values().copied().collect();
        assert_eq!(values, vec![4, 5, 4]);
    }

    #[test]
    fn test_empty_relations_are_legal() {
        let rc: RelationConstant<&str, i32> = RelationConstant::new(Constant::new("K"), Vec::new());
        assert!(rc.relations().is_empty());
        assert!(!rc.contains_relation(&1));
    }

    #[test]
    fn test_contains_relation() {
        let rc = RelationConstant::new(
            Constant::new("Four-five"),
            vec![Constant::new(4), Constant::new(5)],
        );
        assert!(rc.contains_relation(&5));
        assert!(!rc.contains_relation(&10));
    }
}
