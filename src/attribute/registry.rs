use alloc::vec::Vec;

use crate::attribute::{
    Access, AttributeError, AttributeRegistryBuilder,
    table::AttributeTable,
    types::{AccessorPair, Getter, Setter},
};

/// Keyed registry of attribute accessors.
///
/// The host registers a getter and/or setter per attribute key; consumers
/// then read and write attributes by key. Accessors may borrow host state for
/// the lifetime `'a`, so the registry cannot outlive what they capture.
///
/// # Type Parameters
/// - `K`: Attribute key. Must be totally ordered; names enumerate ascending.
/// - `V`: Attribute value produced by getters and consumed by setters.
///
/// Registering an existing key replaces its accessors. The same holds for
/// valid values.
pub struct AttributeRegistry<'a, K, V> {
    table: AttributeTable<'a, K, V>,
}

impl<'a, K: Ord, V> AttributeRegistry<'a, K, V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            table: AttributeTable::new(),
        }
    }

    /// Starts a builder for declaring the attribute table in one expression.
    pub fn builder() -> AttributeRegistryBuilder<'a, K, V> {
        AttributeRegistryBuilder::new()
    }

    /// Registers the accessors for `key`, replacing any existing ones.
    ///
    /// Pass `None` for a missing getter (write-only) or setter (read-only).
    pub fn register(
        &mut self,
        key: K,
        getter: Option<Getter<'a, V>>,
        setter: Option<Setter<'a, V>>,
    ) {
        self.register_pair(key, AccessorPair::new(getter, setter));
    }

    /// Registers an attribute with only a getter.
    pub fn register_read_only(&mut self, key: K, getter: impl Fn() -> V + 'a) {
        self.register_pair(key, AccessorPair::read_only(getter));
    }

    /// Registers an attribute with only a setter.
    pub fn register_write_only(&mut self, key: K, setter: impl FnMut(V) + 'a) {
        self.register_pair(key, AccessorPair::write_only(setter));
    }

    /// Registers an attribute with both a getter and a setter.
    pub fn register_read_write(
        &mut self,
        key: K,
        getter: impl Fn() -> V + 'a,
        setter: impl FnMut(V) + 'a,
    ) {
        self.register_pair(key, AccessorPair::read_write(getter, setter));
    }

    /// Registers a prebuilt accessor pair for `key`, replacing any existing one.
    pub fn register_pair(&mut self, key: K, pair: AccessorPair<'a, V>) {
        trace!(access = ?pair.access(), "registering attribute");
        if self.table.insert_accessors(key, pair) {
            debug!(attributes = self.table.len(), "replaced accessors of existing attribute");
        }
    }

    /// Reads the attribute by invoking its getter.
    ///
    /// The getter runs on every call; nothing is cached.
    ///
    /// Returns `Unknown` if `key` is not registered and `WriteOnly` if it has
    /// no getter.
    pub fn get(&self, key: K) -> Result<V, AttributeError<K>> {
        let Some(pair) = self.table.accessors(&key) else {
            return Err(AttributeError::Unknown(key));
        };
        pair.read().ok_or(AttributeError::WriteOnly(key))
    }

    /// Writes the attribute by invoking its setter once.
    ///
    /// Valid values registered for `key` are not consulted.
    ///
    /// Returns `Unknown` if `key` is not registered and `ReadOnly` if it has
    /// no setter.
    pub fn set(&mut self, key: K, value: V) -> Result<(), AttributeError<K>> {
        let Some(pair) = self.table.accessors_mut(&key) else {
            return Err(AttributeError::Unknown(key));
        };
        pair.write(value).map_err(|_| AttributeError::ReadOnly(key))
    }

    /// Iterates over registered keys in ascending order.
    pub fn iter_names(&self) -> impl Iterator<Item = &K> {
        self.table.keys()
    }

    /// Stores the advisory list of valid values for `key`.
    ///
    /// Never fails, and does not require `key` to have accessors yet.
    pub fn register_valid_values(&mut self, key: K, values: impl Into<Vec<V>>) {
        let values = values.into();
        trace!(count = values.len(), "registering valid values");
        if self.table.insert_valid_values(key, values) {
            debug!("replaced valid values of existing attribute");
        }
    }

    /// Returns the valid values registered for `key`.
    ///
    /// Existence is checked against the registered accessors first: a key
    /// with valid values but no accessors is `Unknown`. A known key with no
    /// valid values is `NoValidValues`.
    pub fn valid_values(&self, key: K) -> Result<&[V], AttributeError<K>> {
        if self.table.accessors(&key).is_none() {
            return Err(AttributeError::Unknown(key));
        }
        self.table
            .valid_values(&key)
            .ok_or(AttributeError::NoValidValues(key))
    }

    /// Returns which directions `key` can be accessed in, or `None` if it is
    /// not registered. Does not invoke any accessor.
    pub fn access(&self, key: &K) -> Option<Access> {
        self.table.accessors(key).map(AccessorPair::access)
    }

    /// Returns true if `key` has registered accessors.
    pub fn contains(&self, key: &K) -> bool {
        self.table.accessors(key).is_some()
    }

    /// Number of keys with registered accessors.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no attributes are registered.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }
}

impl<K: Ord + Clone, V> AttributeRegistry<'_, K, V> {
    /// Returns every registered key in ascending order.
    pub fn names(&self) -> Vec<K> {
        self.table.keys().cloned().collect()
    }
}

impl<K: Ord, V> Default for AttributeRegistry<'_, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + core::fmt::Debug, V> core::fmt::Debug for AttributeRegistry<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AttributeRegistry")
            .field("names", &DebugNames(self))
            .finish_non_exhaustive()
    }
}

struct DebugNames<'r, 'a, K, V>(&'r AttributeRegistry<'a, K, V>);

impl<K: Ord + core::fmt::Debug, V> core::fmt::Debug for DebugNames<'_, '_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter_names()).finish()
    }
}
