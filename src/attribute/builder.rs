use alloc::vec::Vec;

use crate::attribute::{
    AttributeRegistry,
    types::{Getter, Setter},
};

/// Builder for declaring a registry's attributes in one expression.
///
/// Entries apply in call order, so a later entry for the same key replaces
/// an earlier one exactly like repeated registration on the registry does.
///
/// ```rust
/// use attribute_registry::prelude::*;
///
/// let registry = AttributeRegistry::builder()
///     .read_only("firmware", || 3)
///     .write_only("reset", |_| {})
///     .valid_values("firmware", [1, 2, 3])
///     .build();
///
/// assert_eq!(registry.names(), ["firmware", "reset"]);
/// ```
pub struct AttributeRegistryBuilder<'a, K, V> {
    registry: AttributeRegistry<'a, K, V>,
}

impl<'a, K: Ord, V> AttributeRegistryBuilder<'a, K, V> {
    /// Creates a builder for an empty registry.
    pub fn new() -> Self {
        Self {
            registry: AttributeRegistry::new(),
        }
    }

    /// Adds an attribute with optional boxed accessors.
    pub fn attribute(
        mut self,
        key: K,
        getter: Option<Getter<'a, V>>,
        setter: Option<Setter<'a, V>>,
    ) -> Self {
        self.registry.register(key, getter, setter);
        self
    }

    /// Adds an attribute with only a getter.
    pub fn read_only(mut self, key: K, getter: impl Fn() -> V + 'a) -> Self {
        self.registry.register_read_only(key, getter);
        self
    }

    /// Adds an attribute with only a setter.
    pub fn write_only(mut self, key: K, setter: impl FnMut(V) + 'a) -> Self {
        self.registry.register_write_only(key, setter);
        self
    }

    /// Adds an attribute with both a getter and a setter.
    pub fn read_write(
        mut self,
        key: K,
        getter: impl Fn() -> V + 'a,
        setter: impl FnMut(V) + 'a,
    ) -> Self {
        self.registry.register_read_write(key, getter, setter);
        self
    }

    /// Attaches an advisory list of valid values to `key`.
    pub fn valid_values(mut self, key: K, values: impl Into<Vec<V>>) -> Self {
        self.registry.register_valid_values(key, values);
        self
    }

    /// Build the final registry.
    pub fn build(self) -> AttributeRegistry<'a, K, V> {
        self.registry
    }
}

impl<K: Ord, V> Default for AttributeRegistryBuilder<'_, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{
        Access, AttributeError,
        test_support::{TestRegistry, int_getter, int_setter},
    };
    use alloc::{boxed::Box, vec};
    use core::cell::Cell;

    #[test]
    fn test_simple_builder() {
        let registry: TestRegistry = AttributeRegistry::builder()
            .read_write("gain", int_getter, int_setter)
            .read_only("serial", || 1234)
            .build();

        assert_eq!(registry.names(), vec!["gain", "serial"]);
        assert_eq!(registry.get("serial"), Ok(1234));
    }

    #[test]
    fn test_builder_with_boxed_accessors() {
        let stored = Cell::new(0);
        let mut registry: TestRegistry = AttributeRegistryBuilder::default()
            .attribute("raw", Some(Box::new(|| stored.get())), None)
            .attribute("sink", None, Some(Box::new(|v| stored.set(v))))
            .build();

        registry.set("sink", 8).unwrap();
        assert_eq!(registry.get("raw"), Ok(8));
        assert_eq!(registry.access(&"raw"), Some(Access::ReadOnly));
        assert_eq!(registry.access(&"sink"), Some(Access::WriteOnly));
    }

    #[test]
    fn test_builder_later_entry_wins() {
        let registry: TestRegistry = AttributeRegistry::builder()
            .read_only("mode", || 1)
            .valid_values("mode", [1, 2])
            .read_only("mode", || 2)
            .valid_values("mode", [2, 3])
            .build();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("mode"), Ok(2));
        assert_eq!(registry.valid_values("mode"), Ok(&[2, 3][..]));
    }

    #[test]
    fn test_builder_valid_values_without_accessors() {
        let registry: TestRegistry = AttributeRegistry::builder()
            .valid_values("orphan", [1])
            .build();

        assert!(registry.is_empty());
        assert_eq!(
            registry.valid_values("orphan"),
            Err(AttributeError::Unknown("orphan"))
        );
    }
}
