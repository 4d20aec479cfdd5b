//! Test support utilities - only compiled in test builds.

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt::Debug;

use crate::attribute::{AttributeError, AttributeRegistry};

/// Standard test configuration: static string keys, integer values.
pub type TestRegistry<'a> = AttributeRegistry<'a, &'static str, i32>;

pub fn int_getter() -> i32 {
    5
}

pub fn int_setter(_value: i32) {}

/// Host whose `gain` attribute is backed by a cell and instrumented so tests
/// can count getter calls and inspect setter calls.
#[derive(Default)]
pub struct TestHost {
    pub gain: Cell<i32>,
    pub reads: Cell<usize>,
    pub writes: RefCell<Vec<i32>>,
}

impl TestHost {
    pub fn new(gain: i32) -> Self {
        Self {
            gain: Cell::new(gain),
            ..Self::default()
        }
    }

    /// Registers `gain` as read-write against this host.
    pub fn register_gain<'a>(&'a self, registry: &mut TestRegistry<'a>) {
        registry.register_read_write(
            "gain",
            || {
                self.reads.set(self.reads.get() + 1);
                self.gain.get()
            },
            |value| {
                self.writes.borrow_mut().push(value);
                self.gain.set(value);
            },
        );
    }

    pub fn writes(&self) -> Vec<i32> {
        self.writes.borrow().clone()
    }
}

/// Asserts that the result is an `Unknown` error for `key`.
pub fn assert_unknown<T: Debug, K: Debug + PartialEq>(
    result: Result<T, AttributeError<K>>,
    key: K,
) {
    assert_eq!(result.unwrap_err(), AttributeError::Unknown(key));
}

/// Asserts that the result is a `ReadOnly` error for `key`.
pub fn assert_read_only<T: Debug, K: Debug + PartialEq>(
    result: Result<T, AttributeError<K>>,
    key: K,
) {
    assert_eq!(result.unwrap_err(), AttributeError::ReadOnly(key));
}

/// Asserts that the result is a `WriteOnly` error for `key`.
pub fn assert_write_only<T: Debug, K: Debug + PartialEq>(
    result: Result<T, AttributeError<K>>,
    key: K,
) {
    assert_eq!(result.unwrap_err(), AttributeError::WriteOnly(key));
}
