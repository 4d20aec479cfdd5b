//! Basic example: attribute registry fundamentals
//!
//! This example demonstrates:
//! - Registering read-write, read-only and write-only attributes
//! - Reading and writing attributes by key
//! - Enumerating attribute names in key order
//! - Advisory valid values
//! - Error values for unknown keys and wrong access direction

use std::cell::Cell;

use attribute_registry::prelude::*;

pub fn main() {
    // ============ Host State ============
    // The host owns its state; the registry only borrows it through closures.
    let volume = Cell::new(5_i64);
    let muted = Cell::new(0_i64);
    let beeps = Cell::new(0_i64);

    let mut registry: AttributeRegistry<'_, &str, i64> = AttributeRegistry::new();

    registry.register_read_write("volume", || volume.get(), |v| volume.set(v));
    registry.register_read_write("muted", || muted.get(), |v| muted.set(v));
    registry.register_read_only("channels", || 2);
    registry.register_write_only("beep", |count| beeps.set(beeps.get() + count));
    registry.register_valid_values("muted", [0, 1]);

    // ========== Enumeration ==========
    // Names come back sorted, not in registration order.
    println!("attributes: {:?}", registry.names());

    // ========== Dispatch ==========
    registry.set("volume", 8).unwrap();
    registry.set("beep", 3).unwrap();
    println!("volume = {}", registry.get("volume").unwrap());
    println!("channels = {}", registry.get("channels").unwrap());
    println!("beeps issued = {}", beeps.get());

    // ========== Valid Values ==========
    // Advisory only: consumers can offer these choices, the registry does not
    // enforce them.
    println!("muted accepts {:?}", registry.valid_values("muted").unwrap());
    if let Err(err) = registry.valid_values("volume") {
        println!("volume: {err}");
    }

    // ========== Errors ==========
    for result in [
        registry.set("channels", 6),
        registry.set("balance", 0),
    ] {
        if let Err(err) = result {
            println!("set failed: {err}");
        }
    }
    if let Err(err) = registry.get("beep") {
        println!("get failed: {err}");
    }
}
