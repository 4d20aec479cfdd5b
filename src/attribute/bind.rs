/// Registers attributes backed by a shared host's accessor methods.
///
/// The host is an `Rc<RefCell<Host>>` (or anything that clones into a handle
/// dereferencing to `RefCell<Host>`). Each entry names the attribute key, an
/// access marker and the host's property name:
///
/// - `ro name` binds `host.name()` as the getter
/// - `wo name` binds `host.set_name(value)` as the setter
/// - `rw name` binds both
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
/// use attribute_registry::{bind_attributes, prelude::*};
///
/// #[derive(Default)]
/// struct Amplifier {
///     gain: i32,
///     serial: i32,
/// }
///
/// impl Amplifier {
///     fn gain(&self) -> i32 { self.gain }
///     fn set_gain(&mut self, gain: i32) { self.gain = gain }
///     fn serial(&self) -> i32 { self.serial }
/// }
///
/// let amp = Rc::new(RefCell::new(Amplifier::default()));
/// let mut registry: AttributeRegistry<'_, &str, i32> = AttributeRegistry::new();
///
/// bind_attributes!(registry, amp, {
///     "gain" => rw gain,
///     "serial" => ro serial,
/// });
///
/// registry.set("gain", 4).unwrap();
/// assert_eq!(amp.borrow().gain, 4);
/// assert_eq!(registry.access(&"serial"), Some(Access::ReadOnly));
/// ```
#[macro_export]
macro_rules! bind_attributes {
    (@bind $registry:expr, $host:expr, $key:expr, ro, $name:ident) => {{
        let host = ::core::clone::Clone::clone(&$host);
        $registry.register_read_only($key, move || {
            ::core::cell::RefCell::borrow(&*host).$name()
        });
    }};
    (@bind $registry:expr, $host:expr, $key:expr, wo, $name:ident) => {{
        let host = ::core::clone::Clone::clone(&$host);
        $crate::paste::paste! {
            $registry.register_write_only($key, move |value| {
                ::core::cell::RefCell::borrow_mut(&*host).[<set_ $name>](value)
            });
        }
    }};
    (@bind $registry:expr, $host:expr, $key:expr, rw, $name:ident) => {{
        let getter_host = ::core::clone::Clone::clone(&$host);
        let setter_host = ::core::clone::Clone::clone(&$host);
        $crate::paste::paste! {
            $registry.register_read_write(
                $key,
                move || ::core::cell::RefCell::borrow(&*getter_host).$name(),
                move |value| {
                    ::core::cell::RefCell::borrow_mut(&*setter_host).[<set_ $name>](value)
                },
            );
        }
    }};
    ($registry:expr, $host:expr, { $($key:expr => $mode:ident $name:ident),* $(,)? }) => {{
        $( $crate::bind_attributes!(@bind $registry, $host, $key, $mode, $name); )*
    }};
}
