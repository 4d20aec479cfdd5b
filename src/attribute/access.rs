/// Directions in which an attribute can be accessed.
///
/// Derived from which accessors were registered; the registry never stores
/// it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Neither a getter nor a setter is registered.
    Neither,
    /// Only a getter is registered.
    ReadOnly,
    /// Only a setter is registered.
    WriteOnly,
    /// Both a getter and a setter are registered.
    ReadWrite,
}

impl Access {
    pub(crate) fn from_parts(readable: bool, writable: bool) -> Self {
        match (readable, writable) {
            (false, false) => Access::Neither,
            (true, false) => Access::ReadOnly,
            (false, true) => Access::WriteOnly,
            (true, true) => Access::ReadWrite,
        }
    }

    /// Returns true if the attribute has a getter.
    #[inline]
    pub fn can_read(&self) -> bool {
        matches!(self, Access::ReadOnly | Access::ReadWrite)
    }

    /// Returns true if the attribute has a setter.
    #[inline]
    pub fn can_write(&self) -> bool {
        matches!(self, Access::WriteOnly | Access::ReadWrite)
    }
}
