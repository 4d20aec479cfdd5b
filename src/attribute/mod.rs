pub mod access;
mod bind;
pub mod builder;
pub mod error;
pub mod registry;
pub(crate) mod table;
pub mod types;

#[cfg(test)]
mod test_support;

pub use access::Access;
pub use builder::AttributeRegistryBuilder;
pub use error::AttributeError;
pub use registry::AttributeRegistry;
pub use types::{AccessorPair, Getter, Setter};

pub mod prelude {
    pub use super::{
        Access, AccessorPair, AttributeError, AttributeRegistry, AttributeRegistryBuilder, Getter,
        Setter,
    };
}
