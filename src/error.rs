use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Both variants are construction-time failures: lookups that find nothing are never errors
/// and surface as [`Option`] or empty collections instead.
///
/// # Error Categories
///
/// ## Container Construction
/// - [`Error::DuplicateKey`] - Two initial elements of a relation container share a key value
///
/// ## Registry
/// - [`Error::Instantiation`] - A container type could not be constructed on first request
///
/// # Examples
///
/// ```rust
/// use constel::{relate, Error, RelationMap};
///
/// let result = RelationMap::new([
///     relate("KEY", ["VALUE1"]),
///     relate("KEY", ["VALUE2"]),
/// ]);
///
/// match result {
///     Err(Error::DuplicateKey { key }) => println!("duplicate: {}", key),
///     Err(e) => println!("other error: {}", e),
///     Ok(_) => unreachable!("duplicate keys must be rejected"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Two elements of a relation container's initial list share an equal key value.
    ///
    /// Relation containers emulate enumeration-like key spaces, so key values must be
    /// pairwise distinct. This error is fatal to the construction attempt; the container
    /// is not built and, when constructed through the registry, not cached.
    ///
    /// # Fields
    ///
    /// * `key` - The offending key value, `Debug` formatted
    #[error("duplicate key in relation container: {key}")]
    DuplicateKey {
        /// The duplicated key value, rendered with its `Debug` implementation
        key: String,
    },

    /// The registry could not produce an instance of the requested container type.
    ///
    /// Raised when the type's [`ContainerInit::initialize`](crate::ContainerInit::initialize)
    /// fails. The underlying construction error is preserved as the error source. The type
    /// stays uncached, so a later request retries construction (and fails identically unless
    /// the type's initial data changed).
    ///
    /// # Fields
    ///
    /// * `type_name` - Name of the container type that failed to construct
    #[error("failed to construct container instance `{type_name}`")]
    Instantiation {
        /// Name of the container type that could not be constructed
        type_name: &'static str,
        /// The construction error that caused the failure
        #[source]
        source: Box<Error>,
    },
}
