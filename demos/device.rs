//! Device example: exposing a driver's settings through a registry
//!
//! This example demonstrates:
//! - A host object shared as `Rc<RefCell<_>>`
//! - Declaring the attribute table with the builder
//! - Binding conventional getter/setter methods with `bind_attributes!`
//! - Enum keys ordered by declaration
//! - A generic consumer that only sees keys and values

use std::{cell::RefCell, fmt, rc::Rc};

use attribute_registry::{bind_attributes, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Setting {
    SampleRate,
    Gain,
    Temperature,
    Calibrate,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug)]
struct Sensor {
    sample_rate: u32,
    gain: u32,
    temperature: u32,
    calibrations: u32,
}

impl Sensor {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn set_sample_rate(&mut self, rate: u32) {
        self.sample_rate = rate;
    }

    fn gain(&self) -> u32 {
        self.gain
    }

    fn set_gain(&mut self, gain: u32) {
        self.gain = gain;
    }

    fn temperature(&self) -> u32 {
        self.temperature
    }

    fn set_calibrate(&mut self, _passes: u32) {
        self.calibrations += 1;
        self.temperature = 25;
    }
}

/// Prints every readable attribute. Knows nothing about `Sensor`.
fn dump<K: Ord + Clone + fmt::Display>(registry: &AttributeRegistry<'_, K, u32>) {
    for key in registry.names() {
        match registry.get(key.clone()) {
            Ok(value) => println!("  {key} = {value}"),
            Err(err) => println!("  {err}"),
        }
    }
}

pub fn main() {
    let sensor = Rc::new(RefCell::new(Sensor {
        sample_rate: 100,
        gain: 1,
        temperature: 31,
        calibrations: 0,
    }));

    let mut registry: AttributeRegistry<'_, Setting, u32> = AttributeRegistry::builder()
        .valid_values(Setting::SampleRate, [50, 100, 200, 400])
        .valid_values(Setting::Gain, [1, 2, 4, 8])
        .build();

    bind_attributes!(registry, sensor, {
        Setting::SampleRate => rw sample_rate,
        Setting::Gain => rw gain,
        Setting::Temperature => ro temperature,
        Setting::Calibrate => wo calibrate,
    });

    println!("before:");
    dump(&registry);

    for key in [Setting::SampleRate, Setting::Gain] {
        let choices = registry.valid_values(key).unwrap();
        let pick = choices[choices.len() - 1];
        registry.set(key, pick).unwrap();
    }
    registry.set(Setting::Calibrate, 1).unwrap();

    if let Err(err) = registry.set(Setting::Temperature, 0) {
        println!("rejected: {err}");
    }

    println!("after:");
    dump(&registry);
    println!("calibrations: {}", sensor.borrow().calibrations);
    println!("{:?}", sensor.borrow());
}
