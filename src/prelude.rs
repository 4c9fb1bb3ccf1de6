//! # constel Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! traits from the constel library. Import it to get quick access to the constant
//! types, the container contracts, and the query façade in one line.
//!
//! # Example
//!
//! ```rust
//! use constel::prelude::*;
//!
//! let set = ConstantSet::new(constants(["ONE", "TWO"]));
//! assert!(set.contains_value(&"ONE"));
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all constel operations
pub use crate::Error;

/// The result type used throughout constel
pub use crate::Result;

// ================================================================================================
// Constants
// ================================================================================================

/// The constant value objects
pub use crate::constant::{Constant, RelationConstant};

// ================================================================================================
// Containers
// ================================================================================================

/// The container contracts and their base implementations
pub use crate::container::{ConstantContainer, ConstantSet, RelationContainer, RelationMap};

// ================================================================================================
// Registry
// ================================================================================================

/// The registry and the factory contract for registry-constructed containers
pub use crate::registry::{ContainerInit, EnumRegistry, Registry};

// ================================================================================================
// Enum Bridges
// ================================================================================================

/// The bridges letting fixed-instance enums satisfy the container contracts
pub use crate::bridge::{EnumConstants, EnumRelations};

// ================================================================================================
// Query Façade
// ================================================================================================

/// Construction helpers
pub use crate::ops::{constants, of, relate};

/// Matching and testing
pub use crate::ops::{any_relation_value, any_value, match_relation, match_value, relation_by_key};

/// Registry-backed getters
pub use crate::ops::{
    all_relation_values, all_values, enum_by_relation_value, enum_by_value, instance, key_value,
    key_value_by,
};
