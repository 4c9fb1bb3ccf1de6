// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # constel
//!
//! Programmable constant sets with relations - a typed, registry-backed alternative to
//! fixed enumerations.
//!
//! A plain `enum` gives you a closed set of named values and nothing else. `constel`
//! generalizes that shape into data: a [`Constant`] wraps one value, a
//! [`RelationConstant`] pairs a key constant with an ordered collection of related
//! constants, and containers group them under a uniqueness policy. Container types are
//! resolved as cached singletons through a process-wide [`Registry`], and a stateless
//! query façade covers construction, matching, and bulk extraction - including over
//! ordinary enums via the [bridge](crate::bridge) traits.
//!
//! ## Features
//!
//! - **Typed constants** - value-keyed, hashable wrappers usable anywhere a key is
//! - **Relations** - each key can carry an ordered collection of related values
//! - **Uniqueness policies** - silent dedup for plain sets, hard failure for relation
//!   maps that emulate enum-like key spaces
//! - **Cached singletons** - container types construct once and are shared process-wide
//! - **Enum bridges** - existing enums answer the same queries without containers
//! - **Thread safe** - concurrent get-or-create with at-most-one construction per type
//!
//! ## Quick Start
//!
//! Add `constel` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! constel = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use constel::prelude::*;
//!
//! let numerals = RelationMap::new([
//!     relate("One", [1]),
//!     relate("Two", [2]),
//!     relate("Four-five", [4, 5]),
//! ])?;
//!
//! assert!(numerals.any_relation_value(&5));
//! assert_eq!(numerals.relation_values(), vec![vec![1], vec![2], vec![4, 5]]);
//! # Ok::<(), constel::Error>(())
//! ```
//!
//! ### Declaring a Container Type
//!
//! A named container is a newtype over a base container plus a [`ContainerInit`] impl;
//! the registry builds and caches it on first request:
//!
//! ```rust
//! use constel::prelude::*;
//!
//! struct HttpMethods(ConstantSet<&'static str>);
//!
//! impl ContainerInit for HttpMethods {
//!     fn initialize() -> Result<Self> {
//!         Ok(HttpMethods(ConstantSet::from_values(["GET", "POST", "PUT"])))
//!     }
//! }
//!
//! impl ConstantContainer for HttpMethods {
//!     type Value = &'static str;
//!
//!     fn keys(&self) -> impl Iterator<Item = &Constant<&'static str>> {
//!         self.0.keys()
//!     }
//!
//!     fn key(&self, value: &&'static str) -> Option<&Constant<&'static str>> {
//!         self.0.key(value)
//!     }
//! }
//!
//! let methods = instance::<HttpMethods>()?;
//! assert!(methods.contains_value(&"GET"));
//! assert_eq!(key_value::<HttpMethods>(&"POST")?, Some("POST"));
//! # Ok::<(), constel::Error>(())
//! ```
//!
//! ### Bridging an Enum
//!
//! An existing fixed-instance enum satisfies the same contracts through the
//! [`bridge`] traits and the [`strum::EnumIter`] derive - no container construction
//! involved. See the [`bridge`] module documentation for a complete example.
//!
//! ## Architecture
//!
//! `constel` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`constant`] - The [`Constant`] and [`RelationConstant`] value objects
//! - [`container`] - Container contracts and their order-preserving base types
//! - [`registry`] - Type-keyed singleton caches (constructed and bridged)
//! - [`bridge`] - Contracts letting plain enums answer container queries
//! - [`ops`] - The stateless construction/matching/extraction façade
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Absence is never an
//! error: lookups return [`Option`] or empty collections. The two failure classes are
//! construction-time only:
//!
//! ```rust
//! use constel::{relate, Error, RelationMap};
//!
//! match RelationMap::new([relate("KEY", [1]), relate("KEY", [2])]) {
//!     Err(Error::DuplicateKey { key }) => println!("rejected: {}", key),
//!     Err(e) => println!("other error: {}", e),
//!     Ok(_) => println!("constructed"),
//! }
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the constel library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use constel::prelude::*;
///
/// let pair = relate("Four-five", [4, 5]);
/// assert!(pair.contains_relation(&4));
/// ```
pub mod prelude;

/// Constant value objects.
///
/// The two building blocks of the crate:
///
/// - [`Constant`] - immutable value wrapper with structural equality, usable as a key
/// - [`RelationConstant`] - a key constant plus an ordered collection of related
///   constants; its own value is its key's value
///
/// # Example
///
/// ```rust
/// use constel::relate;
///
/// let two = relate("Two", [2]);
/// assert_eq!(two.value(), two.key().value());
/// ```
pub mod constant;

/// Constant containers and their uniqueness policies.
///
/// Defines the [`ConstantContainer`](container::ConstantContainer) and
/// [`RelationContainer`](container::RelationContainer) contracts plus the two
/// order-preserving base implementations:
///
/// - [`ConstantSet`](container::ConstantSet) - silent dedup, first occurrence wins
/// - [`RelationMap`](container::RelationMap) - strict key uniqueness, duplicates fail
///   construction with [`Error::DuplicateKey`]
pub mod container;

/// Type-keyed singleton registries.
///
/// - [`Registry`](registry::Registry) - get-or-create cache over container types that
///   implement [`ContainerInit`](registry::ContainerInit); at most one construction
///   wins per type, failures are not cached
/// - [`EnumRegistry`](registry::EnumRegistry) - separate cache for the materialized
///   constant lists of bridged enums
///
/// Both are explicit objects with process-wide defaults used by the [`ops`] façade.
pub mod registry;

/// Bridges letting fixed-instance enumerations satisfy the container contracts.
///
/// A plain enum deriving [`strum::EnumIter`] implements
/// [`EnumConstants`](bridge::EnumConstants) (each instance exposes a [`Constant`]) or
/// [`EnumRelations`](bridge::EnumRelations) (a [`RelationConstant`]); all bulk
/// operations are derived from the iteration facility rather than container
/// construction.
pub mod bridge;

/// Stateless construction, matching, and extraction operations.
///
/// The query façade: [`of`], [`relate`] and [`constants`] for construction,
/// [`match_value`]/[`any_value`]/[`match_relation`]/[`any_relation_value`] for
/// matching in iteration order, and the registry-backed getters ([`instance`],
/// [`key_value`], [`all_values`], [`all_relation_values`], ...) that resolve a
/// container type through the process-wide registry.
pub mod ops;

/// `constel` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
///
/// # Examples
///
/// ```rust
/// use constel::{relate, RelationMap, Result};
///
/// fn build() -> Result<RelationMap<&'static str, i32>> {
///     RelationMap::new([relate("One", [1]), relate("Two", [2])])
/// }
/// # build().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `constel` Error type
///
/// The main error type for all operations in this crate: duplicate keys at relation
/// container construction and registry instantiation failures. Lookups that find
/// nothing return [`Option`] instead.
pub use error::Error;

/// The constant value objects, re-exported for direct use
pub use constant::{Constant, RelationConstant};

/// The container contracts and base implementations, re-exported for direct use
pub use container::{ConstantContainer, ConstantSet, RelationContainer, RelationMap};

/// The registry types and factory contract, re-exported for direct use
pub use registry::{ContainerInit, EnumRegistry, Registry};

/// The enum bridge contracts, re-exported for direct use
pub use bridge::{EnumConstants, EnumRelations};

/// The query façade, re-exported for direct use
pub use ops::{
    all_relation_values, all_values, any_relation_value, any_value, constants,
    enum_by_relation_value, enum_by_value, instance, key_value, key_value_by, match_relation,
    match_value, of, relate, relation_by_key,
};
