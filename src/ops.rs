//! Stateless construction, matching, and extraction operations.
//!
//! The query façade over the rest of the crate: free functions for building constants,
//! matching values against anything that yields constants, and resolving container
//! types through the process-wide [`Registry`](crate::Registry). Everything here is
//! pure with respect to its explicit inputs, except that the registry-backed getters
//! read (and on first use populate) the instance cache.
//!
//! The original overload family dispatched on argument runtime type; here each shape
//! is served at compile time instead:
//!
//! - bare constants, slices, and collections go through the iterator-based
//!   [`match_value`] / [`any_value`] / [`match_relation`] / [`any_relation_value`]
//! - containers pass their [`keys()`](crate::ConstantContainer::keys) or
//!   [`relations()`](crate::RelationContainer::relations) iterators to the same
//!   functions (or use the equivalent trait methods directly)
//! - enum bridges use their [`EnumConstants`](crate::EnumConstants) /
//!   [`EnumRelations`](crate::EnumRelations) operations, wrapped here as
//!   [`enum_by_value`] / [`enum_by_relation_value`]
//! - container *types* resolve through the registry-backed [`instance`],
//!   [`key_value`], [`key_value_by`], [`all_values`] and [`all_relation_values`]
//!
//! Ties break on the first match in iteration order, which every container and bridge
//! in this crate guarantees to be insertion or declaration order.
//!
//! # Examples
//!
//! ```rust
//! use constel::{any_relation_value, any_value, match_value, of, relate};
//!
//! let constants = [of("One"), of("Two"), of("Three")];
//! assert_eq!(match_value(&"Two", &constants), Some(&constants[1]));
//! assert!(any_value(&"Three", &constants));
//!
//! let relations = [relate("One", [1]), relate("Four-five", [4, 5])];
//! assert!(any_relation_value(&5, &relations));
//! assert!(!any_relation_value(&10, &relations));
//! ```

use std::sync::Arc;

use indexmap::IndexSet;

use crate::bridge::{EnumConstants, EnumRelations};
use crate::constant::{Constant, RelationConstant};
use crate::container::{ConstantContainer, RelationContainer};
use crate::registry::{ContainerInit, Registry};
use crate::Result;

// ------------------------------ Construct ------------------------------ //

/// Creates a constant from a value
#[must_use]
pub fn of<T>(value: T) -> Constant<T> {
    Constant::new(value)
}

/// Creates a relation constant from a key value and its relation values.
///
/// Relations may be empty; duplicates are kept in order.
#[must_use]
pub fn relate<L, R>(key: L, relations: impl IntoIterator<Item = R>) -> RelationConstant<L, R> {
    RelationConstant::new(
        Constant::new(key),
        relations.into_iter().map(Constant::new).collect(),
    )
}

/// Wraps each value in a [`Constant`], preserving order.
///
/// Convenience for building container initial lists from plain values.
#[must_use]
pub fn constants<T>(values: impl IntoIterator<Item = T>) -> Vec<Constant<T>> {
    values.into_iter().map(Constant::new).collect()
}

// ------------------------------ Match ------------------------------ //

/// Returns the first constant carrying the given value, in iteration order.
///
/// Accepts anything that yields borrowed constants: slices, collections, container
/// [`keys()`](ConstantContainer::keys), or a cached bridge list.
pub fn match_value<'a, T, I>(value: &T, constants: I) -> Option<&'a Constant<T>>
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a Constant<T>>,
{
    constants.into_iter().find(|constant| constant.value() == value)
}

/// Returns true if any of the constants carries the given value
pub fn any_value<'a, T, I>(value: &T, constants: I) -> bool
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a Constant<T>>,
{
    match_value(value, constants).is_some()
}

/// Returns the first relation constant carrying the given value among its relations,
/// in iteration order
pub fn match_relation<'a, L, R, I>(value: &R, relations: I) -> Option<&'a RelationConstant<L, R>>
where
    L: 'a,
    R: PartialEq + 'a,
    I: IntoIterator<Item = &'a RelationConstant<L, R>>,
{
    relations
        .into_iter()
        .find(|relation| relation.contains_relation(value))
}

/// Returns true if any of the relation constants carries the given relation value
pub fn any_relation_value<'a, L, R, I>(value: &R, relations: I) -> bool
where
    L: 'a,
    R: PartialEq + 'a,
    I: IntoIterator<Item = &'a RelationConstant<L, R>>,
{
    match_relation(value, relations).is_some()
}

/// Returns the relation constant whose key carries the given value, in iteration order
pub fn relation_by_key<'a, L, R, I>(
    key_value: &L,
    relations: I,
) -> Option<&'a RelationConstant<L, R>>
where
    L: PartialEq + 'a,
    R: 'a,
    I: IntoIterator<Item = &'a RelationConstant<L, R>>,
{
    relations
        .into_iter()
        .find(|relation| relation.value() == key_value)
}

// ------------------------------ Registry-backed ------------------------------ //

/// Returns the cached singleton of the container type `C` from the process-wide
/// registry, constructing it on first request.
///
/// # Errors
///
/// Returns [`Error::Instantiation`](crate::Error::Instantiation) when construction
/// fails; the failure is not cached and a later call retries.
pub fn instance<C: ContainerInit>() -> Result<Arc<C>> {
    Registry::global().instance::<C>()
}

/// Resolves `C` through the registry and returns its key value equal to `value`, if any
///
/// # Errors
///
/// Returns [`Error::Instantiation`](crate::Error::Instantiation) when the container
/// cannot be constructed.
pub fn key_value<C>(value: &C::Value) -> Result<Option<C::Value>>
where
    C: ContainerInit + ConstantContainer,
{
    let container = instance::<C>()?;
    Ok(container.key(value).map(|constant| constant.value().clone()))
}

/// Resolves `C` through the registry and returns its first key value satisfying the
/// predicate, in key order, if any
///
/// # Errors
///
/// Returns [`Error::Instantiation`](crate::Error::Instantiation) when the container
/// cannot be constructed.
pub fn key_value_by<C>(mut predicate: impl FnMut(&C::Value) -> bool) -> Result<Option<C::Value>>
where
    C: ContainerInit + ConstantContainer,
{
    let container = instance::<C>()?;
    let found = container
        .keys()
        .map(|constant| constant.value())
        .find(|&value| predicate(value))
        .cloned();
    Ok(found)
}

/// Resolves `C` through the registry and returns all its key values, in key order
///
/// # Errors
///
/// Returns [`Error::Instantiation`](crate::Error::Instantiation) when the container
/// cannot be constructed.
pub fn all_values<C>() -> Result<IndexSet<C::Value>>
where
    C: ContainerInit + ConstantContainer,
{
    Ok(instance::<C>()?.key_values())
}

/// Resolves `C` through the registry and returns the plain relation values for each of
/// its keys, in key order
///
/// # Errors
///
/// Returns [`Error::Instantiation`](crate::Error::Instantiation) when the container
/// cannot be constructed.
pub fn all_relation_values<C>() -> Result<Vec<Vec<C::Relation>>>
where
    C: ContainerInit + RelationContainer,
{
    Ok(instance::<C>()?.relation_values())
}

// ------------------------------ Enum bridges ------------------------------ //

/// Returns the instance of the bridged enum `E` whose constant carries the given value,
/// if any
pub fn enum_by_value<E: EnumConstants>(value: &E::Value) -> Option<E> {
    E::by_value(value)
}

/// Returns the first instance of the bridged enum `E` carrying the given relation
/// value, in declaration order, if any
pub fn enum_by_relation_value<E: EnumRelations>(value: &E::Relation) -> Option<E> {
    E::by_relation_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_and_relate() {
        assert_eq!(*of(7).value(), 7);

        let rc = relate("Four-five", [4, 5]);
        assert_eq!(*rc.value(), "Four-five");
        assert_eq!(rc.relations().len(), 2);

        let empty: RelationConstant<&str, i32> = relate("None", []);
        assert!(empty.relations().is_empty());
    }

    #[test]
    fn test_constants_preserves_order_and_duplicates() {
        let list = constants(["ONE", "ONE", "TWO"]);
        assert_eq!(list.len(), 3);
        assert_eq!(*list[1].value(), "ONE");
    }

    #[test]
    fn test_match_value_first_in_iteration_order() {
        let list = [of(1), of(2), of(2)];
        let matched = match_value(&2, &list).unwrap();
        assert!(std::ptr::eq(matched, &list[1]));
        assert_eq!(match_value(&9, &list), None);
    }

    #[test]
    fn test_any_value_over_mixed_sources() {
        let one = of("One");
        let two = of("Two");
        assert!(any_value(&"Two", [&one, &two]));
        assert!(!any_value(&"Seven", [&one, &two]));
    }

    #[test]
    fn test_match_relation() {
        let list = [relate("One", [1]), relate("Four-five", [4, 5])];
        let matched = match_relation(&5, &list).unwrap();
        assert_eq!(*matched.value(), "Four-five");
        assert!(match_relation(&10, &list).is_none());
    }

    #[test]
    fn test_relation_by_key() {
        let list = [relate("One", [1]), relate("Two", [2])];
        let one = relation_by_key(&"One", &list).unwrap();
        assert_eq!(*one.value(), "One");
        assert!(one.contains_relation(&1));
        assert!(relation_by_key(&"Seven", &list).is_none());
    }
}
