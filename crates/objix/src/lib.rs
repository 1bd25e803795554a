//! `objix`: a small dynamic object runtime.
//!
//! `objix` models an object system in the classic runtime-registry style:
//! types are described by registered class descriptors carrying a method
//! table, instances are reference-counted allocations pointing back at
//! their descriptor, and behavior is reached by resolving a selector
//! through the method table rather than by calling a named function.
//!
//! # Architecture
//!
//! - **Registry layer**: an explicit [`Registry`](runtime::Registry) value
//!   owns every class descriptor; registration is idempotent.
//! - **Class layer**: immutable descriptors (name, instance layout,
//!   selector-keyed method table) shared by all instances of a type.
//! - **Object layer**: reference-counted instances with zero-initialized
//!   integer field slots and deterministic destruction.
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
//!
//! assert_eq!(obj.get(greeter::SLOT_CALL_COUNT).unwrap(), 1);
//! ```

pub mod error;
pub mod greeter;
pub mod runtime;

// Re-export commonly used types
pub use error::{Error, Result};
pub use runtime::{
    Args, Class, ClassSpec, Method, Object, Registry, Selector, TypeId,
};
