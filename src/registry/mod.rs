//! Type-keyed singleton registries for container instances.
//!
//! This module provides the process-wide instance cache behind the
//! [query façade](crate::ops): a container type is constructed at most once and every
//! subsequent request observes the identical shared instance.
//!
//! # Key Components
//!
//! - [`ContainerInit`] - explicit zero-argument factory a container type implements to
//!   opt into registry construction
//! - [`Registry`] - type-keyed get-or-create cache over `TypeId`
//! - [`EnumRegistry`] - separate cache for the materialized constant lists of
//!   [enum bridges](crate::bridge), which are listed rather than constructed
//!
//! # Registry Architecture
//!
//! Both registries are explicit objects with a lazily created process-wide default
//! ([`Registry::global`] / [`EnumRegistry::global`]); code that wants isolation (tests,
//! embedded setups) constructs its own and passes it by reference. Instances are stored
//! as `Arc<dyn Any + Send + Sync>` keyed by the concrete type's `TypeId`, so a lookup
//! can hand back a typed [`Arc`] without any runtime type inspection beyond the keyed
//! downcast.
//!
//! Construction is *explicit*, not reflective: a type says how to build itself through
//! [`ContainerInit::initialize`]. Types without that impl - inline container values,
//! bridged enums - simply cannot be requested, which moves the original failure class
//! "this type cannot be instantiated" from runtime to compile time.
//!
//! # Thread Safety
//!
//! The registries are designed for concurrent callers:
//! - Get-or-create is atomic per type: the backing [`DashMap`] entry lock guarantees at
//!   most one construction attempt wins and every caller observes the same instance
//! - Failed constructions are never cached, so a later call may retry
//! - Cached instances are immutable and freely shareable (`Send + Sync` is required)
//!
//! # Examples
//!
//! ```rust
//! use constel::{ConstantContainer, ConstantSet, ContainerInit, Registry, Result};
//!
//! struct Switches(ConstantSet<&'static str>);
//!
//! impl ContainerInit for Switches {
//!     fn initialize() -> Result<Self> {
//!         Ok(Switches(ConstantSet::from_values(["ON", "OFF"])))
//!     }
//! }
//!
//! let registry = Registry::new();
//! let first = registry.instance::<Switches>()?;
//! let second = registry.instance::<Switches>()?;
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! assert_eq!(first.0.len(), 2);
//! # Ok::<(), constel::Error>(())
//! ```

use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};

use dashmap::{mapref::entry::Entry, DashMap};

use crate::bridge::{EnumConstants, EnumRelations};
use crate::constant::{Constant, RelationConstant};
use crate::{Error, Result};

/// Explicit factory contract for registry-constructed container types.
///
/// The Rust rendition of "has an accessible zero-argument constructor": a type opts
/// into [`Registry::instance`] by saying how to build itself. `initialize` must be a
/// pure function of static data - it runs the container's uniqueness checks eagerly,
/// may be called again after a failure, and must not call back into the registry that
/// is constructing it (the get-or-create entry lock is held during construction).
pub trait ContainerInit: Send + Sync + Sized + 'static {
    /// Constructs the container instance, running its uniqueness checks.
    ///
    /// # Errors
    ///
    /// Returns the construction error, typically
    /// [`Error::DuplicateKey`] from a [`RelationMap`](crate::RelationMap) initial list.
    fn initialize() -> Result<Self>;
}

/// Process-wide default registry storage.
static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Process-wide default enum value cache storage.
static GLOBAL_ENUMS: OnceLock<EnumRegistry> = OnceLock::new();

/// Type-keyed singleton cache producing container instances on demand.
///
/// On the first request for a type the registry runs [`ContainerInit::initialize`],
/// caches the result, and hands out clones of the same [`Arc`] forever after - object
/// identity, not just value equality. Construction failures propagate to the caller,
/// are logged, and leave the type uncached so a subsequent request retries.
///
/// The registry never evicts.
pub struct Registry {
    containers: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Registry {
    /// Creates a new, empty registry
    #[must_use]
    pub fn new() -> Self {
        Registry {
            containers: DashMap::new(),
        }
    }

    /// Returns the process-wide default registry, creating it on first use.
    ///
    /// This is the instance the [query façade](crate::ops) resolves container types
    /// against. It lives for the remainder of the process.
    #[must_use]
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Returns the cached instance of `C`, constructing and caching it on first request.
    ///
    /// Get-or-create is atomic with respect to concurrent callers requesting the same
    /// uncached type: at most one construction attempt wins, and all callers observe
    /// the identical instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Instantiation`] when `C::initialize()` fails; the underlying
    /// construction error is preserved as the source. The failure is not cached.
    pub fn instance<C: ContainerInit>(&self) -> Result<Arc<C>> {
        match self.containers.entry(TypeId::of::<C>()) {
            Entry::Occupied(entry) => Ok(downcast_cached(entry.get())),
            Entry::Vacant(slot) => match C::initialize() {
                Ok(container) => {
                    let instance = Arc::new(container);
                    slot.insert(instance.clone());
                    log::debug!(
                        "constructed and cached container instance `{}`",
                        std::any::type_name::<C>()
                    );
                    Ok(instance)
                }
                Err(source) => {
                    let type_name = std::any::type_name::<C>();
                    log::error!(
                        "cannot construct container instance `{}`: {}",
                        type_name,
                        source
                    );
                    Err(Error::Instantiation {
                        type_name,
                        source: Box::new(source),
                    })
                }
            },
        }
    }

    /// Returns the number of cached container instances
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns true if no container instance has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

/// Cache of materialized constant lists for bridged enumeration types.
///
/// Enum bridges are not constructed - their "all instances" operation comes from the
/// derived [`strum`] iteration facility - so they live in a separate registry keyed by
/// the enum's `TypeId`. Listing cannot fail, which keeps this cache infallible. Results
/// are cached on first use and never evicted, mirroring [`Registry`].
pub struct EnumRegistry {
    constants: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    relations: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl EnumRegistry {
    /// Creates a new, empty enum value cache
    #[must_use]
    pub fn new() -> Self {
        EnumRegistry {
            constants: DashMap::new(),
            relations: DashMap::new(),
        }
    }

    /// Returns the process-wide default enum value cache, creating it on first use
    #[must_use]
    pub fn global() -> &'static EnumRegistry {
        GLOBAL_ENUMS.get_or_init(EnumRegistry::new)
    }

    /// Returns the cached constant list of the bridged enum `E`, listing its instances
    /// on first request.
    ///
    /// The list order is the enum's declaration order.
    pub fn constants_of<E: EnumConstants>(&self) -> Arc<Vec<Constant<E::Value>>> {
        match self.constants.entry(TypeId::of::<E>()) {
            Entry::Occupied(entry) => downcast_cached(entry.get()),
            Entry::Vacant(slot) => {
                let list: Arc<Vec<Constant<E::Value>>> =
                    Arc::new(E::iter().map(|instance| instance.constant()).collect());
                slot.insert(list.clone());
                list
            }
        }
    }

    /// Returns the cached relation constant list of the bridged enum `E`, listing its
    /// instances on first request.
    ///
    /// The list order is the enum's declaration order.
    pub fn relations_of<E: EnumRelations>(
        &self,
    ) -> Arc<Vec<RelationConstant<E::Value, E::Relation>>> {
        match self.relations.entry(TypeId::of::<E>()) {
            Entry::Occupied(entry) => downcast_cached(entry.get()),
            Entry::Vacant(slot) => {
                let list: Arc<Vec<RelationConstant<E::Value, E::Relation>>> = Arc::new(
                    E::iter()
                        .map(|instance| instance.relation_constant())
                        .collect(),
                );
                slot.insert(list.clone());
                list
            }
        }
    }
}

impl Default for EnumRegistry {
    fn default() -> Self {
        EnumRegistry::new()
    }
}

/// Recovers the typed `Arc` from a cache slot.
///
/// Entries are keyed by the target's `TypeId`, so the stored value is always of the
/// requested type.
fn downcast_cached<T: Send + Sync + 'static>(cached: &Arc<dyn Any + Send + Sync>) -> Arc<T> {
    match cached.clone().downcast::<T>() {
        Ok(instance) => instance,
        Err(_) => unreachable!("registry entries are keyed by TypeId"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ConstantContainer, ConstantSet, RelationContainer, RelationMap};
    use crate::ops::relate;

    struct Numbers(ConstantSet<i32>);

    impl ContainerInit for Numbers {
        fn initialize() -> Result<Self> {
            Ok(Numbers(ConstantSet::from_values([1, 2, 3])))
        }
    }

    struct Doomed(RelationMap<&'static str, i32>);

    impl ContainerInit for Doomed {
        fn initialize() -> Result<Self> {
            Ok(Doomed(RelationMap::new([
                relate("KEY", [1]),
                relate("KEY", [2]),
            ])?))
        }
    }

    #[test]
    fn test_instance_is_cached_singleton() {
        let registry = Registry::new();
        let first = registry.instance::<Numbers>().unwrap();
        let second = registry.instance::<Numbers>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_instance_content_matches_fresh_construction() {
        let registry = Registry::new();
        let cached = registry.instance::<Numbers>().unwrap();
        let fresh = Numbers::initialize().unwrap();
        assert_eq!(cached.0, fresh.0);
    }

    #[test]
    fn test_failed_construction_is_not_cached() {
        let registry = Registry::new();
        for _ in 0..2 {
            let result = registry.instance::<Doomed>();
            match result {
                Err(Error::Instantiation { type_name, source }) => {
                    assert!(type_name.contains("Doomed"));
                    assert!(matches!(*source, Error::DuplicateKey { .. }));
                }
                _ => panic!("expected instantiation failure"),
            }
            assert!(registry.is_empty());
        }
    }

    #[test]
    fn test_distinct_registries_hold_distinct_instances() {
        let a = Registry::new();
        let b = Registry::new();
        let from_a = a.instance::<Numbers>().unwrap();
        let from_b = b.instance::<Numbers>().unwrap();
        assert!(!Arc::ptr_eq(&from_a, &from_b));
    }

    #[test]
    fn test_concurrent_get_or_create_observes_one_instance() {
        use std::sync::Barrier;

        let registry = Arc::new(Registry::new());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                let barrier = barrier.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    registry.instance::<Numbers>().unwrap()
                })
            })
            .collect();

        let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(instances
            .windows(2)
            .all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_relation_container_through_registry() {
        struct Named(RelationMap<&'static str, i32>);

        impl ContainerInit for Named {
            fn initialize() -> Result<Self> {
                Ok(Named(RelationMap::new([
                    relate("One", [1]),
                    relate("Two", [2]),
                ])?))
            }
        }

        let registry = Registry::new();
        let named = registry.instance::<Named>().unwrap();
        assert_eq!(named.0.relation_values(), vec![vec![1], vec![2]]);
        assert!(named.0.contains_value(&"Two"));
    }
}
