/// Errors returned when dispatching to a registered attribute.
///
/// Every variant carries the key the caller passed, so the message can name
/// the offending attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AttributeError<K> {
    /// No accessors are registered under the key.
    #[error("invalid attribute: {0}")]
    Unknown(K),
    /// The attribute has no getter.
    #[error("attribute is write-only: {0}")]
    WriteOnly(K),
    /// The attribute has no setter.
    #[error("attribute is read-only: {0}")]
    ReadOnly(K),
    /// The attribute exists but no valid values were registered for it.
    #[error("no valid values registered for attribute: {0}")]
    NoValidValues(K),
}

impl<K> AttributeError<K> {
    /// Returns the key the failed operation was called with.
    pub fn key(&self) -> &K {
        match self {
            AttributeError::Unknown(k)
            | AttributeError::WriteOnly(k)
            | AttributeError::ReadOnly(k)
            | AttributeError::NoValidValues(k) => k,
        }
    }

    /// Consumes the error, returning the offending key.
    pub fn into_key(self) -> K {
        match self {
            AttributeError::Unknown(k)
            | AttributeError::WriteOnly(k)
            | AttributeError::ReadOnly(k)
            | AttributeError::NoValidValues(k) => k,
        }
    }
}
