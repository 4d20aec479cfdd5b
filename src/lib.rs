//! A `no_std` attribute registry for exposing host properties by key.
//!
//! This crate lets any host object publish a set of named logical properties,
//! each backed by a getter and/or setter closure the host supplies. Consumers
//! (UI panels, device drivers, configuration layers, RPC adapters) then read
//! and write those properties uniformly by key, without the host implementing
//! a shared trait or exposing its internal representation.
//!
//! # Features
//!
//! - **Generic keys** - Any `Ord + Clone` key: `&str`, `String`, integers, enums
//! - **Read-only / write-only attributes** - Missing accessors are explicit, not null
//! - **Deterministic enumeration** - Names are always returned in ascending key order
//! - **Advisory valid values** - Optional per-key list of admissible values
//! - **Borrow-checked lifetimes** - Accessors may borrow host state for `'a`
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  register()   ┌───────────────────────────┐
//! │   Host           │──────────────▶│   AttributeRegistry       │
//! │                  │               │                           │
//! │  getter / setter │◀──────────────│  get() / set()            │
//! │  closures        │  dispatch     │  names() / valid_values() │
//! └──────────────────┘               └───────────────────────────┘
//!                                                 ▲
//!                                                 │ by key
//!                                         ┌───────┴───────┐
//!                                         │   Consumer    │
//!                                         └───────────────┘
//! ```
//!
//! The registry is a passive dispatcher: it never caches, synthesizes, or
//! validates values. Every `get` re-invokes the getter and every `set`
//! invokes the setter exactly once.
//!
//! # Example
//!
//! ```rust
//! use core::cell::Cell;
//! use attribute_registry::prelude::*;
//!
//! let gain = Cell::new(3_i32);
//!
//! let mut registry: AttributeRegistry<'_, &str, i32> = AttributeRegistry::new();
//! registry.register_read_write("gain", || gain.get(), |v| gain.set(v));
//! registry.register_read_only("serial", || 1234);
//! registry.register_valid_values("gain", [0, 3, 6, 9]);
//!
//! registry.set("gain", 6).unwrap();
//! assert_eq!(registry.get("gain"), Ok(6));
//! assert_eq!(
//!     registry.set("serial", 1),
//!     Err(AttributeError::ReadOnly("serial"))
//! );
//! assert_eq!(registry.names(), ["gain", "serial"]);
//! assert_eq!(registry.valid_values("gain").unwrap(), &[0, 3, 6, 9]);
//! ```

#![deny(unsafe_code)]
#![no_std]

extern crate alloc;

#[macro_use]
mod log;

pub mod attribute;

#[doc(hidden)]
pub use paste;

pub mod prelude {
    pub use crate::attribute::prelude::*;
}
