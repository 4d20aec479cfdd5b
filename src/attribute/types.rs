use alloc::boxed::Box;

use crate::attribute::Access;

/// Type-erased getter. Produces the attribute's current value.
pub type Getter<'a, V> = Box<dyn Fn() -> V + 'a>;

/// Type-erased setter. Consumes the value to store.
pub type Setter<'a, V> = Box<dyn FnMut(V) + 'a>;

/// The accessors bound to one attribute key.
///
/// A missing getter makes the attribute write-only; a missing setter makes
/// it read-only.
pub struct AccessorPair<'a, V> {
    getter: Option<Getter<'a, V>>,
    setter: Option<Setter<'a, V>>,
}

impl<'a, V> AccessorPair<'a, V> {
    /// Creates a pair from optional boxed accessors.
    pub fn new(getter: Option<Getter<'a, V>>, setter: Option<Setter<'a, V>>) -> Self {
        Self { getter, setter }
    }

    /// Creates a pair with only a getter.
    pub fn read_only(getter: impl Fn() -> V + 'a) -> Self {
        Self::new(Some(Box::new(getter)), None)
    }

    /// Creates a pair with only a setter.
    pub fn write_only(setter: impl FnMut(V) + 'a) -> Self {
        Self::new(None, Some(Box::new(setter)))
    }

    /// Creates a pair with both accessors.
    pub fn read_write(getter: impl Fn() -> V + 'a, setter: impl FnMut(V) + 'a) -> Self {
        Self::new(Some(Box::new(getter)), Some(Box::new(setter)))
    }

    /// Returns which directions this pair can be accessed in.
    pub fn access(&self) -> Access {
        Access::from_parts(self.getter.is_some(), self.setter.is_some())
    }

    /// Invokes the getter, or returns `None` if there is none.
    pub(crate) fn read(&self) -> Option<V> {
        self.getter.as_ref().map(|getter| getter())
    }

    /// Invokes the setter, handing the value back if there is none.
    pub(crate) fn write(&mut self, value: V) -> Result<(), V> {
        match self.setter.as_mut() {
            Some(setter) => {
                setter(value);
                Ok(())
            }
            None => Err(value),
        }
    }
}

impl<V> core::fmt::Debug for AccessorPair<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccessorPair")
            .field("access", &self.access())
            .finish_non_exhaustive()
    }
}
