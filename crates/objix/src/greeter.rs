//! The `Greeter` type: one stateful entity with a single behavior.
//!
//! `Greeter` demonstrates capability dispatch through a method table. It
//! registers a descriptor with one integer field (the call counter), an
//! instance initializer that announces the allocation, and a `greet`
//! method bound to the default implementation. Callers reach `greet`
//! through the class method table, never by a direct function call.
//!
//! # Observable behavior
//!
//! - Creation prints `"<TypeName> instance initialized."` to stdout.
//! - Each greet prints
//!   `"Hello from <TypeName>! Message: \"<message>\" (Call count: <n>)"`
//!   where `<n>` is the counter value after the increment.
//!
//! # Example
//!
//! ```rust
//! use objix::{greeter, runtime::dispatch, Args, Registry, Selector};
//! use std::str::FromStr;
//!
//! let registry = Registry::new();
//! let obj = greeter::create(&registry);
//!
//! let greet = Selector::from_str(greeter::SEL_GREET).unwrap();
//! dispatch::send(&obj, &greet, &Args::text("hello")).unwrap();
//! dispatch::send(&obj, &greet, &Args::text("again")).unwrap();
//!
//! assert_eq!(obj.get(greeter::SLOT_CALL_COUNT).unwrap(), 2);
//! ```

use crate::error::Result;
use crate::runtime::class::{Class, ClassSpec, Method};
use crate::runtime::message::Args;
use crate::runtime::object::Object;
use crate::runtime::registry::Registry;
use crate::runtime::selector::Selector;
use std::str::FromStr;

/// Registered type name.
pub const TYPE_NAME: &str = "Greeter";

/// Selector name of the greet method.
pub const SEL_GREET: &str = "greet";

/// Field slot holding the running call counter.
pub const SLOT_CALL_COUNT: usize = 0;

/// Instance layout: just the counter.
const SLOT_COUNT: usize = 1;

/// Registers the Greeter descriptor with the given registry.
///
/// Idempotent: the first call builds the descriptor (one counter slot,
/// the init hook, `greet` bound to the default implementation); every
/// later call returns the same descriptor. Registration cannot fail.
pub fn register(registry: &Registry) -> Class {
    let greet = Selector::from_str(SEL_GREET)
        .expect("SEL_GREET is a statically valid selector name");

    registry.get_or_register(ClassSpec {
        name: TYPE_NAME.to_string(),
        slots: SLOT_COUNT,
        init: Some(greeter_init),
        methods: vec![Method {
            selector: greet,
            imp: greet_imp,
            arity: 1,
        }],
    })
}

/// Registers the type if needed, then allocates a fresh instance.
///
/// The instance starts with refcount 1 and `call_count == 0`; the init
/// diagnostic is printed during allocation.
pub fn create(registry: &Registry) -> Object {
    let class = register(registry);
    Object::new(&class)
}

/// Instance initializer. The counter slot is already zeroed when this
/// runs; the printed line is the creation diagnostic.
fn greeter_init(obj: &Object) {
    println!("{} instance initialized.", obj.type_name());
}

/// Default greet implementation: bump the counter, then announce.
///
/// The message is not validated; a missing text argument is treated as
/// the empty string.
fn greet_imp(obj: &Object, args: &Args) -> Result<()> {
    let message = args.as_text().unwrap_or_default();
    let count = obj.bump(SLOT_CALL_COUNT)?;

    println!(
        "Hello from {}! Message: \"{}\" (Call count: {})",
        obj.type_name(),
        message,
        count
    );

    Ok(())
}
