//! Bridges that let fixed-instance enumerations satisfy the container contracts.
//!
//! A plain Rust `enum` already is an exhaustive, unambiguous key space - exactly what a
//! relation container emulates. These bridges let such a type answer the same queries
//! as a constructed container without ever building one: the "all instances" operation
//! comes from the [`strum::EnumIter`] derive, and each instance exposes its own constant.
//!
//! - [`EnumConstants`] - each enum instance exposes one [`Constant`]
//! - [`EnumRelations`] - each enum instance exposes one [`RelationConstant`]
//!
//! Because instances are listed rather than constructed, bridged enums are cached in
//! the separate [`EnumRegistry`](crate::registry::EnumRegistry) instead of the
//! constructor-backed [`Registry`](crate::Registry), and they cannot implement
//! [`ContainerInit`](crate::ContainerInit). Declaration order is the iteration order,
//! so the usual order-preservation guarantees hold.
//!
//! # Examples
//!
//! ```rust
//! use constel::{of, relate, Constant, EnumConstants, EnumRelations, RelationConstant};
//! use strum::EnumIter;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
//! enum Numeral {
//!     One,
//!     Two,
//!     Three,
//! }
//!
//! impl EnumConstants for Numeral {
//!     type Value = &'static str;
//!
//!     fn constant(&self) -> Constant<&'static str> {
//!         match self {
//!             Numeral::One => of("One"),
//!             Numeral::Two => of("Two"),
//!             Numeral::Three => of("Three"),
//!         }
//!     }
//! }
//!
//! impl EnumRelations for Numeral {
//!     type Relation = i32;
//!
//!     fn relation_constant(&self) -> RelationConstant<&'static str, i32> {
//!         match self {
//!             Numeral::One => relate("One", [1]),
//!             Numeral::Two => relate("Two", [2]),
//!             Numeral::Three => relate("Three", [3]),
//!         }
//!     }
//! }
//!
//! assert_eq!(Numeral::by_value(&"Two"), Some(Numeral::Two));
//! assert!(Numeral::any_relation_value(&3));
//! assert_eq!(Numeral::all_relation_values(), vec![vec![1], vec![2], vec![3]]);
//! ```

use std::hash::Hash;

use indexmap::IndexSet;
use std::sync::Arc;
use strum::IntoEnumIterator;

use crate::constant::{Constant, RelationConstant};
use crate::registry::EnumRegistry;

/// Capability of a fixed-instance enumeration whose instances each expose a constant.
///
/// Requires [`strum::IntoEnumIterator`] (derive [`strum::EnumIter`]) as the listing
/// facility. Only [`constant`](Self::constant) must be written; the bulk operations are
/// derived by iterating the enum's instances and served from the process-wide
/// [`EnumRegistry`](crate::registry::EnumRegistry) cache.
pub trait EnumConstants: IntoEnumIterator + Copy + Eq + Send + Sync + 'static {
    /// The constant value type exposed by the instances
    type Value: Eq + Hash + Clone + Send + Sync + 'static;

    /// Returns the constant this enum instance exposes
    fn constant(&self) -> Constant<Self::Value>;

    /// Returns the constants of all instances, in declaration order, from the cache
    #[must_use]
    fn all_constants() -> Arc<Vec<Constant<Self::Value>>> {
        EnumRegistry::global().constants_of::<Self>()
    }

    /// Returns the constant values of all instances, in declaration order
    #[must_use]
    fn all_values() -> IndexSet<Self::Value> {
        Self::all_constants()
            .iter()
            .map(|constant| constant.value().clone())
            .collect()
    }

    /// Returns the instance whose constant carries the given value, if any
    fn by_value(value: &Self::Value) -> Option<Self> {
        Self::iter().find(|instance| instance.constant().value() == value)
    }

    /// Returns true if any instance's constant carries the given value
    fn any_value(value: &Self::Value) -> bool {
        Self::by_value(value).is_some()
    }
}

/// Capability of a fixed-instance enumeration whose instances each expose a relation
/// constant.
///
/// The plain constant of such an instance is its relation constant's key, so the
/// [`EnumConstants`] operations keep working on key values while the operations here
/// cover the relations.
pub trait EnumRelations: EnumConstants {
    /// The relation value type exposed by the instances
    type Relation: Eq + Hash + Clone + Send + Sync + 'static;

    /// Returns the relation constant this enum instance exposes
    fn relation_constant(&self) -> RelationConstant<Self::Value, Self::Relation>;

    /// Returns the plain relation values of this instance, in construction order
    #[must_use]
    fn relation_values(&self) -> Vec<Self::Relation> {
        self.relation_constant()
            .relation_values()
            .cloned()
            .collect()
    }

    /// Returns the relation constants of all instances, in declaration order, from the
    /// cache
    #[must_use]
    fn all_relations() -> Arc<Vec<RelationConstant<Self::Value, Self::Relation>>> {
        EnumRegistry::global().relations_of::<Self>()
    }

    /// Returns for each instance, in declaration order, the plain values of its
    /// relations
    #[must_use]
    fn all_relation_values() -> Vec<Vec<Self::Relation>> {
        Self::all_relations()
            .iter()
            .map(|relation| relation.relation_values().cloned().collect())
            .collect()
    }

    /// Returns the first instance carrying the given relation value, in declaration
    /// order, if any
    fn by_relation_value(value: &Self::Relation) -> Option<Self> {
        Self::iter().find(|instance| instance.relation_constant().contains_relation(value))
    }

    /// Returns true if any instance carries the given relation value
    fn any_relation_value(value: &Self::Relation) -> bool {
        Self::by_relation_value(value).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{of, relate};
    use strum::EnumIter;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
    enum Digit {
        One,
        Two,
        Three,
        Four,
    }

    impl EnumConstants for Digit {
        type Value = i32;

        fn constant(&self) -> Constant<i32> {
            match self {
                Digit::One => of(1),
                Digit::Two => of(2),
                Digit::Three => of(3),
                Digit::Four => of(4),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
    enum Numeral {
        One,
        Two,
        Three,
        FourFive,
    }

    impl EnumConstants for Numeral {
        type Value = &'static str;

        fn constant(&self) -> Constant<&'static str> {
            self.relation_constant().key().clone()
        }
    }

    impl EnumRelations for Numeral {
        type Relation = i32;

        fn relation_constant(&self) -> RelationConstant<&'static str, i32> {
            match self {
                Numeral::One => relate("One", [1]),
                Numeral::Two => relate("Two", [2]),
                Numeral::Three => relate("Three", [3]),
                Numeral::FourFive => relate("Four-five", [4, 5]),
            }
        }
    }

    #[test]
    fn test_instance_constant() {
        assert_eq!(*Digit::Two.constant().value(), 2);
    }

    #[test]
    fn test_all_values_in_declaration_order() {
        let values: Vec<_> = Digit::all_values().into_iter().collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_by_value() {
        assert_eq!(Digit::by_value(&2), Some(Digit::Two));
        assert_eq!(Digit::by_value(&9), None);
        assert!(Digit::any_value(&4));
        assert!(!Digit::any_value(&5));
    }

    #[test]
    fn test_relation_key_is_the_constant() {
        let two = Numeral::Two;
        assert_eq!(*two.constant().value(), "Two");
        assert_eq!(two.constant(), *two.relation_constant().key());
    }

    #[test]
    fn test_relation_values_per_instance() {
        assert_eq!(Numeral::FourFive.relation_values(), vec![4, 5]);
    }

    #[test]
    fn test_all_relation_values_in_declaration_order() {
        assert_eq!(
            Numeral::all_relation_values(),
            vec![vec![1], vec![2], vec![3], vec![4, 5]]
        );
    }

    #[test]
    fn test_by_relation_value() {
        assert_eq!(Numeral::by_relation_value(&5), Some(Numeral::FourFive));
        assert_eq!(Numeral::by_relation_value(&10), None);
        assert!(Numeral::any_relation_value(&3));
        assert!(!Numeral::any_relation_value(&10));
    }

    #[test]
    fn test_listing_is_cached() {
        let first = Numeral::all_relations();
        let second = Numeral::all_relations();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
